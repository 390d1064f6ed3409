use std::path::PathBuf;

use carefind::{ActiveCategory, SearchFilters, SearchTuning};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Where and whether committed queries are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySettings {
	pub enabled: bool,
	/// Store location; `None` only when history is disabled.
	pub file: Option<PathBuf>,
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub corpus: Option<PathBuf>,
	pub query: String,
	pub tuning: SearchTuning,
	pub filters: SearchFilters,
	pub category: ActiveCategory,
	pub history: HistorySettings,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
