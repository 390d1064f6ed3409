//! Core crate exports for the carefind global search surface.
//!
//! The root module re-exports the session, engine and history types so that
//! embedders can wire a search surface without digging through the module
//! hierarchy. The item model lives in the `carefind-catalog` crate.

pub mod app_dirs;
pub mod highlight;
pub mod history;
pub mod logging;
pub mod navigation;
pub mod pipeline;
pub mod search;
pub mod session;

pub use carefind_catalog::{
	CatalogError, Category, Corpus, CorpusProvider, ItemCategory, JsonCorpus, PriceTier,
	SearchItem, SearchResult, StaticCorpus, sample_items,
};

pub use highlight::{HighlightSegment, highlight, highlight_line};
pub use history::{JsonFileStore, KeyValueStore, MemoryStore, SearchHistory, StoreError};
pub use navigation::{KeyAction, NavigationState};
pub use pipeline::{Evaluation, Phase, QueryPipeline};
pub use search::{
	ActiveCategory, CategoryGroup, DateRange, GroupedResults, NormalizedQuery, PriceFilter,
	RankedHit, SearchEngine, SearchFilters, SearchOutput, SearchTuning, SortBy,
};
pub use session::{SearchSession, SessionEvent, SessionView};
