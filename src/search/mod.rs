//! Filtering, scoring, ranking and grouping over the injected corpus.
//!
//! Everything here is synchronous and pure: a query plus filters in, ranked
//! hits out. Debouncing and selection live in [`crate::pipeline`] and
//! [`crate::navigation`].

mod engine;
pub mod filters;
pub mod grouping;
pub mod query;
pub mod ranking;
pub mod scoring;
pub mod tuning;

pub use engine::{SearchEngine, SearchOutput};
pub use filters::{DateRange, PriceFilter, SearchFilters, SortBy};
pub use grouping::{ActiveCategory, CategoryGroup, GroupedResults};
pub use query::NormalizedQuery;
pub use ranking::RankedHit;
pub use tuning::SearchTuning;
