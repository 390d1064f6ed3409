use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, ItemCategory};

/// Pricing bucket attached to every searchable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceTier {
	Free,
	Paid,
	Premium,
}

impl PriceTier {
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			PriceTier::Free => "free",
			PriceTier::Paid => "paid",
			PriceTier::Premium => "premium",
		}
	}
}

/// A single record supplied by the corpus provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
	pub id: String,
	pub title: String,
	pub description: String,
	pub category: ItemCategory,
	pub url: String,
	pub created_at: DateTime<Utc>,
	pub price_tier: PriceTier,
	pub popularity: u32,
}

impl SearchItem {
	/// Create an item in `category` with empty description, free tier and zero popularity.
	#[must_use]
	pub fn new(
		id: impl Into<String>,
		title: impl Into<String>,
		category: impl Into<ItemCategory>,
		created_at: DateTime<Utc>,
	) -> Self {
		let id = id.into();
		Self {
			url: format!("/search/{id}"),
			id,
			title: title.into(),
			description: String::new(),
			category: category.into(),
			created_at,
			price_tier: PriceTier::Free,
			popularity: 0,
		}
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	#[must_use]
	pub fn with_url(mut self, url: impl Into<String>) -> Self {
		self.url = url.into();
		self
	}

	#[must_use]
	pub fn with_price_tier(mut self, tier: PriceTier) -> Self {
		self.price_tier = tier;
		self
	}

	#[must_use]
	pub fn with_popularity(mut self, popularity: u32) -> Self {
		self.popularity = popularity;
		self
	}

	/// Project the display fields, or `None` when the category is not one the
	/// search surface knows how to group.
	#[must_use]
	pub fn to_result(&self) -> Option<SearchResult> {
		let category = self.category.known()?;
		Some(SearchResult {
			id: self.id.clone(),
			title: self.title.clone(),
			description: self.description.clone(),
			category,
			url: self.url.clone(),
		})
	}
}

/// Display projection of a [`SearchItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
	pub id: String,
	pub title: String,
	pub description: String,
	pub category: Category,
	pub url: String,
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;

	use super::*;

	#[test]
	fn items_deserialize_from_camel_case_json() {
		let json = r#"{
			"id": "svc-1",
			"title": "Telemedicine Consultation",
			"description": "Video visits with licensed clinicians",
			"category": "service",
			"url": "/services/telemedicine",
			"createdAt": "2024-03-01T09:30:00Z",
			"priceTier": "premium",
			"popularity": 98
		}"#;

		let item: SearchItem = serde_json::from_str(json).unwrap();
		assert_eq!(item.category, ItemCategory::Known(Category::Service));
		assert_eq!(item.price_tier, PriceTier::Premium);
		assert_eq!(
			item.created_at,
			Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
		);
		assert_eq!(item.popularity, 98);
	}

	#[test]
	fn unrecognized_category_has_no_result_projection() {
		let item = SearchItem::new("x", "Podcast", "podcast".to_string(), Utc::now());
		assert!(item.to_result().is_none());

		let item = SearchItem::new("y", "Guide", Category::Article, Utc::now());
		let result = item.to_result().unwrap();
		assert_eq!(result.category, Category::Article);
		assert_eq!(result.url, "/search/y");
	}
}
