use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a corpus.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// Two records claimed the same identifier.
	#[error("item id '{id}' appears more than once in the corpus")]
	DuplicateId { id: String },

	#[error("failed to read corpus file {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("corpus file {path} is not a valid item list")]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}
