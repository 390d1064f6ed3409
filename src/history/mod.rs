//! Persisted search history and suggestion lists.
//!
//! History is the only session state that outlives the process. It is owned
//! here and written through to a [`KeyValueStore`] on every mutation; write
//! failures are logged and otherwise ignored.

mod store;
mod suggestions;

use tracing::{debug, warn};

pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
pub use suggestions::suggest;

use crate::search::tuning::HISTORY_LIMIT;

/// Key the history list is persisted under.
pub const HISTORY_KEY: &str = "carefind.search.history";

/// Most-recent-first list of committed queries.
pub struct SearchHistory {
	store: Box<dyn KeyValueStore>,
	entries: Vec<String>,
	limit: usize,
}

impl std::fmt::Debug for SearchHistory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SearchHistory")
			.field("entries", &self.entries)
			.field("limit", &self.limit)
			.finish_non_exhaustive()
	}
}

impl SearchHistory {
	/// Load history from `store` with the default limit.
	#[must_use]
	pub fn load(store: impl KeyValueStore + 'static) -> Self {
		Self::with_limit(store, HISTORY_LIMIT)
	}

	/// Load history from `store`, keeping at most `limit` entries.
	///
	/// Missing, malformed or non-array content yields an empty history.
	#[must_use]
	pub fn with_limit(store: impl KeyValueStore + 'static, limit: usize) -> Self {
		let entries = store
			.get(HISTORY_KEY)
			.map(|raw| parse_entries(&raw))
			.unwrap_or_default();
		let mut history = Self {
			store: Box::new(store),
			entries: Vec::new(),
			limit,
		};
		for entry in entries.into_iter().rev() {
			history.push_front(entry);
		}
		history
	}

	/// Entries, most recent first.
	#[must_use]
	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn limit(&self) -> usize {
		self.limit
	}

	/// The backing store.
	#[must_use]
	pub fn store(&self) -> &dyn KeyValueStore {
		self.store.as_ref()
	}

	/// Record a committed query.
	///
	/// The trimmed query moves to the front, replacing any entry that differs
	/// only by case. Blank queries are ignored and return `false`.
	pub fn commit(&mut self, query: &str) -> bool {
		let query = query.trim();
		if query.is_empty() {
			return false;
		}
		self.push_front(query.to_string());
		self.persist();
		true
	}

	/// Remove a single entry, compared case-insensitively.
	pub fn remove(&mut self, query: &str) -> bool {
		let before = self.entries.len();
		let needle = query.trim().to_lowercase();
		self.entries.retain(|entry| entry.to_lowercase() != needle);
		let removed = self.entries.len() != before;
		if removed {
			self.persist();
		}
		removed
	}

	/// Forget every entry, in memory and in the store.
	pub fn clear(&mut self) {
		self.entries.clear();
		if let Err(err) = self.store.remove(HISTORY_KEY) {
			warn!(error = %err, "failed to clear persisted search history");
		}
	}

	fn push_front(&mut self, entry: String) {
		let lowered = entry.to_lowercase();
		self.entries.retain(|existing| existing.to_lowercase() != lowered);
		self.entries.insert(0, entry);
		self.entries.truncate(self.limit);
	}

	fn persist(&mut self) {
		let encoded = match serde_json::to_string(&self.entries) {
			Ok(encoded) => encoded,
			Err(err) => {
				warn!(error = %err, "failed to encode search history");
				return;
			}
		};
		if let Err(err) = self.store.set(HISTORY_KEY, &encoded) {
			warn!(error = %err, "failed to persist search history");
		}
	}
}

fn parse_entries(raw: &str) -> Vec<String> {
	match serde_json::from_str::<Vec<String>>(raw) {
		Ok(entries) => entries
			.into_iter()
			.map(|entry| entry.trim().to_string())
			.filter(|entry| !entry.is_empty())
			.collect(),
		Err(err) => {
			debug!(%err, "ignoring malformed search history");
			Vec::new()
		}
	}
}

#[cfg(test)]
mod tests;
