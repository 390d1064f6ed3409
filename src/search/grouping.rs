//! Partition ranked hits into the fixed category groups.
//!
//! Totals always come from the full ranked set; only the displayed slice is
//! capped, so "see all N" links never need a second query.

use std::fmt;

use carefind_catalog::{Category, ItemCategory, SearchItem, SearchResult};
use serde::Serialize;
use tracing::warn;

use super::ranking::RankedHit;

/// Category filter chosen by the navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveCategory {
	#[default]
	All,
	Only(Category),
}

impl ActiveCategory {
	/// Tab order: `All` followed by every category.
	pub const CYCLE: [ActiveCategory; 5] = [
		ActiveCategory::All,
		ActiveCategory::Only(Category::Article),
		ActiveCategory::Only(Category::Service),
		ActiveCategory::Only(Category::Helper),
		ActiveCategory::Only(Category::MarketplaceListing),
	];

	#[must_use]
	pub fn includes(self, category: Category) -> bool {
		match self {
			ActiveCategory::All => true,
			ActiveCategory::Only(active) => active == category,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			ActiveCategory::All => "all",
			ActiveCategory::Only(category) => category.as_str(),
		}
	}

	/// Parse `all` or a category identifier.
	#[must_use]
	pub fn parse(value: &str) -> Option<Self> {
		if value.trim().eq_ignore_ascii_case("all") {
			return Some(ActiveCategory::All);
		}
		Category::parse(value).map(ActiveCategory::Only)
	}

	fn position(self) -> usize {
		match self {
			ActiveCategory::All => 0,
			ActiveCategory::Only(category) => category.index() + 1,
		}
	}

	/// The next tab, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		Self::CYCLE[(self.position() + 1) % Self::CYCLE.len()]
	}

	/// The previous tab, wrapping around.
	#[must_use]
	pub fn previous(self) -> Self {
		let len = Self::CYCLE.len();
		Self::CYCLE[(self.position() + len - 1) % len]
	}
}

impl fmt::Display for ActiveCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<Category> for ActiveCategory {
	fn from(category: Category) -> Self {
		ActiveCategory::Only(category)
	}
}

/// One category's slice of the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
	pub category: Category,
	/// Every match in the category, regardless of how many are displayed.
	pub total: usize,
	/// Results visible for the active category, in rank order.
	pub results: Vec<SearchResult>,
}

impl CategoryGroup {
	fn empty(category: Category) -> Self {
		Self {
			category,
			total: 0,
			results: Vec::new(),
		}
	}

	/// Whether more matches exist than are displayed.
	#[must_use]
	pub fn is_truncated(&self) -> bool {
		self.total > self.results.len()
	}
}

/// Ranked results split by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedResults {
	pub groups: Vec<CategoryGroup>,
	/// Hits skipped because their category is outside the known set.
	pub dropped: usize,
}

impl Default for GroupedResults {
	fn default() -> Self {
		Self {
			groups: Category::ALL.into_iter().map(CategoryGroup::empty).collect(),
			dropped: 0,
		}
	}
}

impl GroupedResults {
	/// Total matches for `category`.
	#[must_use]
	pub fn total_for(&self, category: Category) -> usize {
		self.groups
			.iter()
			.find(|group| group.category == category)
			.map_or(0, |group| group.total)
	}

	/// Sum of every category total.
	#[must_use]
	pub fn total(&self) -> usize {
		self.groups.iter().map(|group| group.total).sum()
	}

	/// Displayed results in display order; the addressable space for navigation.
	#[must_use]
	pub fn flatten(&self) -> Vec<&SearchResult> {
		self.groups
			.iter()
			.flat_map(|group| group.results.iter())
			.collect()
	}

	/// Number of displayed results across every group.
	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.groups.iter().map(|group| group.results.len()).sum()
	}

	/// Displayed groups that have at least one visible result.
	pub fn visible_groups(&self) -> impl Iterator<Item = &CategoryGroup> {
		self.groups.iter().filter(|group| !group.results.is_empty())
	}
}

/// Group `hits` (already ranked) from `items` for display under `active`.
///
/// With [`ActiveCategory::All`] each group shows at most `preview_limit`
/// results; a specific category shows its full list and hides the others.
#[must_use]
pub fn group(
	items: &[SearchItem],
	hits: &[RankedHit],
	active: ActiveCategory,
	preview_limit: usize,
) -> GroupedResults {
	let mut grouped = GroupedResults::default();

	for hit in hits {
		let item = &items[hit.index];
		let category = match &item.category {
			ItemCategory::Known(category) => *category,
			ItemCategory::Unrecognized(raw) => {
				warn!(id = %item.id, category = %raw, "skipping search item with unrecognized category");
				grouped.dropped += 1;
				continue;
			}
		};

		let group = &mut grouped.groups[category.index()];
		group.total += 1;

		let visible = match active {
			ActiveCategory::All => group.results.len() < preview_limit,
			ActiveCategory::Only(selected) => selected == category,
		};
		if visible && let Some(result) = item.to_result() {
			group.results.push(result);
		}
	}

	grouped
}

#[cfg(test)]
mod tests {
	use chrono::Utc;

	use super::*;

	fn corpus() -> Vec<SearchItem> {
		let now = Utc::now();
		let mut items = Vec::new();
		for n in 0..7 {
			items.push(SearchItem::new(format!("s{n}"), format!("Service {n}"), Category::Service, now));
		}
		items.push(SearchItem::new("a0", "Article", Category::Article, now));
		items.push(SearchItem::new("x0", "Podcast", "podcast".to_string(), now));
		items
	}

	fn all_hits(items: &[SearchItem]) -> Vec<RankedHit> {
		(0..items.len())
			.map(|index| RankedHit { index, score: 1 })
			.collect()
	}

	#[test]
	fn all_tab_caps_each_group_but_not_the_totals() {
		let items = corpus();
		let grouped = group(&items, &all_hits(&items), ActiveCategory::All, 5);

		assert_eq!(grouped.total_for(Category::Service), 7);
		let services = &grouped.groups[Category::Service.index()];
		assert_eq!(services.results.len(), 5);
		assert!(services.is_truncated());
		assert_eq!(grouped.total_for(Category::Article), 1);
		assert_eq!(grouped.visible_len(), 6);
	}

	#[test]
	fn specific_category_is_uncapped_and_hides_the_rest() {
		let items = corpus();
		let grouped = group(
			&items,
			&all_hits(&items),
			ActiveCategory::Only(Category::Service),
			5,
		);

		assert_eq!(grouped.groups[Category::Service.index()].results.len(), 7);
		assert!(grouped.groups[Category::Article.index()].results.is_empty());
		assert_eq!(grouped.total_for(Category::Article), 1);
		assert_eq!(grouped.flatten().len(), 7);
	}

	#[test]
	fn unrecognized_categories_are_dropped_from_totals() {
		let items = corpus();
		let hits = all_hits(&items);
		let grouped = group(&items, &hits, ActiveCategory::All, 5);

		assert_eq!(grouped.dropped, 1);
		assert_eq!(grouped.total() + grouped.dropped, hits.len());
		assert!(grouped.flatten().iter().all(|result| result.id != "x0"));
	}

	#[test]
	fn flatten_preserves_rank_order_within_groups() {
		let items = corpus();
		let hits = vec![
			RankedHit { index: 3, score: 9 },
			RankedHit { index: 7, score: 8 },
			RankedHit { index: 1, score: 7 },
		];
		let grouped = group(&items, &hits, ActiveCategory::All, 5);
		let ids: Vec<&str> = grouped.flatten().iter().map(|result| result.id.as_str()).collect();
		assert_eq!(ids, vec!["a0", "s3", "s1"]);
	}

	#[test]
	fn tabs_cycle_in_both_directions() {
		assert_eq!(
			ActiveCategory::All.next(),
			ActiveCategory::Only(Category::Article)
		);
		assert_eq!(
			ActiveCategory::All.previous(),
			ActiveCategory::Only(Category::MarketplaceListing)
		);
		assert_eq!(
			ActiveCategory::Only(Category::MarketplaceListing).next(),
			ActiveCategory::All
		);
		assert_eq!(ActiveCategory::parse("ALL"), Some(ActiveCategory::All));
		assert_eq!(
			ActiveCategory::parse("helper"),
			Some(ActiveCategory::Only(Category::Helper))
		);
	}
}
