use std::path::PathBuf;
use std::time::Duration;

use carefind::SearchTuning;
use serde::Deserialize;

use crate::cli::CliArgs;
use crate::settings::util::sanitize_terms;

/// `[search]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) corpus: Option<PathBuf>,
	pub(super) debounce_ms: Option<u64>,
	pub(super) preview_limit: Option<usize>,
	pub(super) suggestion_limit: Option<usize>,
	pub(super) history_limit: Option<usize>,
	pub(super) popular_searches: Option<Vec<String>>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.corpus.clone() {
			self.corpus = Some(path);
		}
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(value) = cli.preview_limit {
			self.preview_limit = Some(value);
		}
	}

	/// Corpus path plus tuning with defaults filled in. Range checks happen
	/// during validation so that errors can name their origin.
	pub(super) fn finalize(self) -> (Option<PathBuf>, SearchTuning) {
		let defaults = SearchTuning::default();
		let tuning = SearchTuning {
			debounce: self
				.debounce_ms
				.map_or(defaults.debounce, Duration::from_millis),
			preview_limit: self.preview_limit.unwrap_or(defaults.preview_limit),
			suggestion_limit: self.suggestion_limit.unwrap_or(defaults.suggestion_limit),
			history_limit: self.history_limit.unwrap_or(defaults.history_limit),
			popular_searches: self
				.popular_searches
				.map(sanitize_terms)
				.unwrap_or(defaults.popular_searches),
		};
		(self.corpus, tuning)
	}
}
