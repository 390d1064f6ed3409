use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors raised by a [`KeyValueStore`] write.
#[derive(Debug, Error)]
pub enum StoreError {
	#[error("failed to access store file {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to encode store file {path}")]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Minimal string key-value persistence used for search history.
pub trait KeyValueStore {
	/// Return the value stored under `key`, or `None` when absent or unreadable.
	fn get(&self, key: &str) -> Option<String>;

	/// Store `value` under `key`.
	///
	/// # Errors
	///
	/// Returns an error when the backing storage cannot be written.
	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

	/// Delete `key`.
	///
	/// # Errors
	///
	/// Returns an error when the backing storage cannot be written.
	fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Volatile store for tests and sessions that opt out of persistence.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
	values: HashMap<String, String>,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Option<String> {
		self.values.get(key).cloned()
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
		self.values.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&mut self, key: &str) -> Result<(), StoreError> {
		self.values.remove(key);
		Ok(())
	}
}

/// Store backed by a single JSON object file mapping keys to strings.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_all(&self) -> BTreeMap<String, String> {
		let raw = match fs::read_to_string(&self.path) {
			Ok(raw) => raw,
			Err(err) => {
				debug!(path = %self.path.display(), %err, "store file not readable");
				return BTreeMap::new();
			}
		};
		serde_json::from_str(&raw).unwrap_or_else(|err| {
			debug!(path = %self.path.display(), %err, "store file is not a string map");
			BTreeMap::new()
		})
	}

	fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|source| StoreError::Io {
				path: parent.to_path_buf(),
				source,
			})?;
		}
		let encoded = serde_json::to_string_pretty(values).map_err(|source| StoreError::Json {
			path: self.path.clone(),
			source,
		})?;
		fs::write(&self.path, encoded).map_err(|source| StoreError::Io {
			path: self.path.clone(),
			source,
		})
	}
}

impl KeyValueStore for JsonFileStore {
	fn get(&self, key: &str) -> Option<String> {
		self.read_all().remove(key)
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
		let mut values = self.read_all();
		values.insert(key.to_string(), value.to_string());
		self.write_all(&values)
	}

	fn remove(&mut self, key: &str) -> Result<(), StoreError> {
		let mut values = self.read_all();
		if values.remove(key).is_none() {
			return Ok(());
		}
		self.write_all(&values)
	}
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn file_store_round_trips_and_removes_keys() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("nested").join("store.json");
		let mut store = JsonFileStore::new(&path);

		assert_eq!(store.get("history"), None);
		store.set("history", "[\"a\"]").unwrap();
		store.set("other", "x").unwrap();
		assert_eq!(store.get("history").as_deref(), Some("[\"a\"]"));

		let reopened = JsonFileStore::new(&path);
		assert_eq!(reopened.get("other").as_deref(), Some("x"));

		store.remove("history").unwrap();
		assert_eq!(store.get("history"), None);
		assert_eq!(store.get("other").as_deref(), Some("x"));
	}

	#[test]
	fn corrupted_file_reads_as_empty() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("store.json");
		fs::write(&path, "not json").unwrap();

		let mut store = JsonFileStore::new(&path);
		assert_eq!(store.get("history"), None);
		store.set("history", "[]").unwrap();
		assert_eq!(store.get("history").as_deref(), Some("[]"));
	}
}
