//! Facet filters applied independently of text relevance.
//!
//! Each facet is a closed enum so adding a new window, tier or sort mode is a
//! compile-time decision for every `match` that consumes it.

use std::fmt;
use std::str::FromStr;

use carefind_catalog::{PriceTier, SearchItem};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Creation-date window relative to the evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
	Last7Days,
	Last30Days,
	LastYear,
	#[default]
	AllTime,
}

impl DateRange {
	/// Length of the window, or `None` when unbounded.
	#[must_use]
	pub fn window(self) -> Option<Duration> {
		match self {
			DateRange::Last7Days => Some(Duration::days(7)),
			DateRange::Last30Days => Some(Duration::days(30)),
			DateRange::LastYear => Some(Duration::days(365)),
			DateRange::AllTime => None,
		}
	}

	/// Whether an item created at `created_at` falls inside the window ending at `now`.
	#[must_use]
	pub fn admits(self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
		match self.window() {
			Some(window) => created_at >= now - window,
			None => true,
		}
	}

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			DateRange::Last7Days => "last-7-days",
			DateRange::Last30Days => "last-30-days",
			DateRange::LastYear => "last-year",
			DateRange::AllTime => "all-time",
		}
	}
}

/// Ordering applied to the filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
	#[default]
	Relevance,
	Newest,
	Popularity,
}

impl SortBy {
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			SortBy::Relevance => "relevance",
			SortBy::Newest => "newest",
			SortBy::Popularity => "popularity",
		}
	}
}

/// Price facet; `All` disables the facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceFilter {
	#[default]
	All,
	Free,
	Paid,
	Premium,
}

impl PriceFilter {
	#[must_use]
	pub fn admits(self, tier: PriceTier) -> bool {
		match self {
			PriceFilter::All => true,
			PriceFilter::Free => tier == PriceTier::Free,
			PriceFilter::Paid => tier == PriceTier::Paid,
			PriceFilter::Premium => tier == PriceTier::Premium,
		}
	}

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			PriceFilter::All => "all",
			PriceFilter::Free => "free",
			PriceFilter::Paid => "paid",
			PriceFilter::Premium => "premium",
		}
	}
}

macro_rules! facet_from_str {
	($ty:ty, $label:literal, [$($variant:path),+ $(,)?]) => {
		impl FromStr for $ty {
			type Err = String;

			fn from_str(value: &str) -> Result<Self, Self::Err> {
				let value = value.trim();
				[$($variant),+]
					.into_iter()
					.find(|candidate| candidate.as_str().eq_ignore_ascii_case(value))
					.ok_or_else(|| format!("unknown {} '{value}'", $label))
			}
		}

		impl fmt::Display for $ty {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}

facet_from_str!(
	DateRange,
	"date range",
	[
		DateRange::Last7Days,
		DateRange::Last30Days,
		DateRange::LastYear,
		DateRange::AllTime,
	]
);
facet_from_str!(
	SortBy,
	"sort mode",
	[SortBy::Relevance, SortBy::Newest, SortBy::Popularity]
);
facet_from_str!(
	PriceFilter,
	"price tier",
	[
		PriceFilter::All,
		PriceFilter::Free,
		PriceFilter::Paid,
		PriceFilter::Premium,
	]
);

/// Facet selection for one query evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
	pub date_range: DateRange,
	pub sort_by: SortBy,
	pub price_tier: PriceFilter,
}

impl SearchFilters {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_date_range(mut self, date_range: DateRange) -> Self {
		self.date_range = date_range;
		self
	}

	#[must_use]
	pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
		self.sort_by = sort_by;
		self
	}

	#[must_use]
	pub fn with_price_tier(mut self, price_tier: PriceFilter) -> Self {
		self.price_tier = price_tier;
		self
	}

	/// Check the date and price facets for `item`.
	#[must_use]
	pub fn admits(&self, item: &SearchItem, now: DateTime<Utc>) -> bool {
		self.date_range.admits(item.created_at, now) && self.price_tier.admits(item.price_tier)
	}
}

#[cfg(test)]
mod tests {
	use carefind_catalog::Category;

	use super::*;

	fn item_aged(days: i64, now: DateTime<Utc>) -> SearchItem {
		SearchItem::new("i", "Item", Category::Article, now - Duration::days(days))
	}

	#[test]
	fn date_windows_are_inclusive_of_the_boundary() {
		let now = Utc::now();
		assert!(DateRange::Last7Days.admits(now - Duration::days(7), now));
		assert!(!DateRange::Last7Days.admits(now - Duration::days(8), now));
		assert!(DateRange::Last30Days.admits(now - Duration::days(29), now));
		assert!(!DateRange::LastYear.admits(now - Duration::days(366), now));
		assert!(DateRange::AllTime.admits(now - Duration::days(10_000), now));
	}

	#[test]
	fn price_facet_matches_exactly() {
		assert!(PriceFilter::All.admits(PriceTier::Premium));
		assert!(PriceFilter::Paid.admits(PriceTier::Paid));
		assert!(!PriceFilter::Paid.admits(PriceTier::Premium));
		assert!(!PriceFilter::Free.admits(PriceTier::Paid));
	}

	#[test]
	fn filters_combine_both_facets() {
		let now = Utc::now();
		let filters = SearchFilters::new()
			.with_date_range(DateRange::Last30Days)
			.with_price_tier(PriceFilter::Free);

		assert!(filters.admits(&item_aged(3, now), now));
		assert!(!filters.admits(&item_aged(40, now), now));
		let paid = item_aged(3, now).with_price_tier(PriceTier::Paid);
		assert!(!filters.admits(&paid, now));
	}

	#[test]
	fn facets_parse_from_wire_names() {
		assert_eq!("last-year".parse::<DateRange>(), Ok(DateRange::LastYear));
		assert_eq!("Newest".parse::<SortBy>(), Ok(SortBy::Newest));
		assert_eq!("premium".parse::<PriceFilter>(), Ok(PriceFilter::Premium));
		assert!("cheapest".parse::<SortBy>().is_err());
	}
}
