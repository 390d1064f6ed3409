use carefind::{ActiveCategory, Category, DateRange, PriceFilter, SortBy};
use clap::ValueEnum;

/// Result orderings accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortArg {
	Relevance,
	Newest,
	Popularity,
}

impl SortArg {
	pub(crate) fn as_str(self) -> &'static str {
		SortBy::from(self).as_str()
	}
}

impl From<SortArg> for SortBy {
	fn from(value: SortArg) -> Self {
		match value {
			SortArg::Relevance => SortBy::Relevance,
			SortArg::Newest => SortBy::Newest,
			SortArg::Popularity => SortBy::Popularity,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DateRangeArg {
	#[value(name = "last-7-days")]
	Last7Days,
	#[value(name = "last-30-days")]
	Last30Days,
	LastYear,
	AllTime,
}

impl DateRangeArg {
	pub(crate) fn as_str(self) -> &'static str {
		DateRange::from(self).as_str()
	}
}

impl From<DateRangeArg> for DateRange {
	fn from(value: DateRangeArg) -> Self {
		match value {
			DateRangeArg::Last7Days => DateRange::Last7Days,
			DateRangeArg::Last30Days => DateRange::Last30Days,
			DateRangeArg::LastYear => DateRange::LastYear,
			DateRangeArg::AllTime => DateRange::AllTime,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum PriceArg {
	All,
	Free,
	Paid,
	Premium,
}

impl PriceArg {
	pub(crate) fn as_str(self) -> &'static str {
		PriceFilter::from(self).as_str()
	}
}

impl From<PriceArg> for PriceFilter {
	fn from(value: PriceArg) -> Self {
		match value {
			PriceArg::All => PriceFilter::All,
			PriceArg::Free => PriceFilter::Free,
			PriceArg::Paid => PriceFilter::Paid,
			PriceArg::Premium => PriceFilter::Premium,
		}
	}
}

/// Category tab to display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum CategoryArg {
	All,
	Article,
	Service,
	Helper,
	#[value(name = "marketplace-listing", alias = "marketplace")]
	MarketplaceListing,
}

impl From<CategoryArg> for ActiveCategory {
	fn from(value: CategoryArg) -> Self {
		match value {
			CategoryArg::All => ActiveCategory::All,
			CategoryArg::Article => ActiveCategory::Only(Category::Article),
			CategoryArg::Service => ActiveCategory::Only(Category::Service),
			CategoryArg::Helper => ActiveCategory::Only(Category::Helper),
			CategoryArg::MarketplaceListing => ActiveCategory::Only(Category::MarketplaceListing),
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
