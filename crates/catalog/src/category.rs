use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of categories the search surface groups results into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
	Article,
	Service,
	Helper,
	MarketplaceListing,
}

impl Category {
	/// Every category in display order.
	pub const ALL: [Category; 4] = [
		Category::Article,
		Category::Service,
		Category::Helper,
		Category::MarketplaceListing,
	];

	/// Return the wire identifier for this category.
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Category::Article => "article",
			Category::Service => "service",
			Category::Helper => "helper",
			Category::MarketplaceListing => "marketplace-listing",
		}
	}

	/// Return the heading shown above a group of results.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Category::Article => "Articles",
			Category::Service => "Services",
			Category::Helper => "Helpers",
			Category::MarketplaceListing => "Marketplace",
		}
	}

	/// Position of the category in [`Category::ALL`].
	#[must_use]
	pub const fn index(self) -> usize {
		match self {
			Category::Article => 0,
			Category::Service => 1,
			Category::Helper => 2,
			Category::MarketplaceListing => 3,
		}
	}

	/// Parse a wire identifier.
	#[must_use]
	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Category as it arrives from a corpus provider.
///
/// Unknown identifiers are preserved instead of failing the whole corpus so
/// the grouping layer can report and skip the offending record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemCategory {
	Known(Category),
	Unrecognized(String),
}

impl ItemCategory {
	/// Return the known category, if any.
	#[must_use]
	pub fn known(&self) -> Option<Category> {
		match self {
			ItemCategory::Known(category) => Some(*category),
			ItemCategory::Unrecognized(_) => None,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		match self {
			ItemCategory::Known(category) => category.as_str(),
			ItemCategory::Unrecognized(raw) => raw,
		}
	}
}

impl From<Category> for ItemCategory {
	fn from(category: Category) -> Self {
		ItemCategory::Known(category)
	}
}

impl From<String> for ItemCategory {
	fn from(value: String) -> Self {
		match Category::parse(&value) {
			Some(category) => ItemCategory::Known(category),
			None => ItemCategory::Unrecognized(value),
		}
	}
}

impl From<ItemCategory> for String {
	fn from(value: ItemCategory) -> Self {
		match value {
			ItemCategory::Known(category) => category.as_str().to_string(),
			ItemCategory::Unrecognized(raw) => raw,
		}
	}
}

impl fmt::Display for ItemCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_accepts_wire_identifiers() {
		assert_eq!(
			Category::parse("marketplace-listing"),
			Some(Category::MarketplaceListing)
		);
		assert_eq!(Category::parse(" Service "), Some(Category::Service));
		assert_eq!(Category::parse("podcast"), None);
	}

	#[test]
	fn unknown_category_survives_deserialization() {
		let known: ItemCategory = serde_json::from_str("\"helper\"").unwrap();
		assert_eq!(known, ItemCategory::Known(Category::Helper));

		let unknown: ItemCategory = serde_json::from_str("\"podcast\"").unwrap();
		assert_eq!(unknown, ItemCategory::Unrecognized("podcast".into()));
		assert_eq!(unknown.known(), None);
		assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"podcast\"");
	}

	#[test]
	fn index_matches_display_order() {
		for (position, category) in Category::ALL.into_iter().enumerate() {
			assert_eq!(category.index(), position);
		}
	}
}
