//! Data model shared by the carefind search engine and its corpus providers.
//!
//! Items are immutable once loaded. The [`Corpus`] wrapper enforces id
//! uniqueness at the boundary so the engine never has to re-check it.

pub mod category;
pub mod corpus;
pub mod error;
pub mod item;
pub mod sample;

pub use category::{Category, ItemCategory};
pub use corpus::{Corpus, CorpusProvider, JsonCorpus, StaticCorpus};
pub use error::CatalogError;
pub use item::{PriceTier, SearchItem, SearchResult};
pub use sample::sample_items;
