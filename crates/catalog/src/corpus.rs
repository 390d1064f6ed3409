use std::collections::HashSet;
use std::fs;
use std::ops::Deref;
use std::path::PathBuf;

use crate::error::CatalogError;
use crate::item::SearchItem;

/// Source of the searchable items for a session.
///
/// Providers are consulted once; the engine never polls for fresh data.
pub trait CorpusProvider {
	/// Return every searchable item.
	///
	/// # Errors
	///
	/// Returns an error when the provider cannot produce a well-formed list.
	fn load(&self) -> Result<Vec<SearchItem>, CatalogError>;
}

/// Provider backed by an in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticCorpus {
	items: Vec<SearchItem>,
}

impl StaticCorpus {
	#[must_use]
	pub fn new(items: Vec<SearchItem>) -> Self {
		Self { items }
	}
}

impl CorpusProvider for StaticCorpus {
	fn load(&self) -> Result<Vec<SearchItem>, CatalogError> {
		Ok(self.items.clone())
	}
}

/// Provider that reads a JSON array of items from disk.
#[derive(Debug, Clone)]
pub struct JsonCorpus {
	path: PathBuf,
}

impl JsonCorpus {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl CorpusProvider for JsonCorpus {
	fn load(&self) -> Result<Vec<SearchItem>, CatalogError> {
		let raw = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
			path: self.path.clone(),
			source,
		})?;
		serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
			path: self.path.clone(),
			source,
		})
	}
}

/// Read-only, validated set of items shared by the search engine.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
	items: Vec<SearchItem>,
}

impl Corpus {
	/// Validate `items` and wrap them.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::DuplicateId`] for the first repeated id.
	pub fn new(items: Vec<SearchItem>) -> Result<Self, CatalogError> {
		let mut seen = HashSet::with_capacity(items.len());
		for item in &items {
			if !seen.insert(item.id.as_str()) {
				return Err(CatalogError::DuplicateId {
					id: item.id.clone(),
				});
			}
		}
		Ok(Self { items })
	}

	/// Load and validate the items produced by `provider`.
	///
	/// # Errors
	///
	/// Propagates provider failures and duplicate ids.
	pub fn from_provider(provider: &dyn CorpusProvider) -> Result<Self, CatalogError> {
		Self::new(provider.load()?)
	}

	#[must_use]
	pub fn items(&self) -> &[SearchItem] {
		&self.items
	}

	/// Titles of every item, in corpus order.
	pub fn titles(&self) -> impl Iterator<Item = &str> {
		self.items.iter().map(|item| item.title.as_str())
	}
}

impl Deref for Corpus {
	type Target = [SearchItem];

	fn deref(&self) -> &Self::Target {
		&self.items
	}
}
