use std::time::Duration;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest accepted quiet period.
pub(super) const MAX_DEBOUNCE: Duration = Duration::from_secs(10);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let tuning = &config.tuning;

	if tuning.debounce > MAX_DEBOUNCE {
		return Err(ConfigError::DebounceTooLong {
			millis: tuning.debounce.as_millis(),
			max_millis: MAX_DEBOUNCE.as_millis(),
			origin: ConfigSources::source_for(&sources.debounce_ms, "search.debounce_ms"),
		});
	}

	let limits = [
		("search.preview_limit", tuning.preview_limit, &sources.preview_limit),
		(
			"search.suggestion_limit",
			tuning.suggestion_limit,
			&sources.suggestion_limit,
		),
		("search.history_limit", tuning.history_limit, &sources.history_limit),
	];
	if let Some((key, _, source)) = limits.into_iter().find(|(_, value, _)| *value == 0) {
		return Err(ConfigError::ZeroLimit {
			key,
			origin: ConfigSources::source_for(source, key),
		});
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use carefind::{ActiveCategory, SearchFilters, SearchTuning};

	use super::super::{HistorySettings, SettingSource};
	use super::*;

	fn config(tuning: SearchTuning) -> ResolvedConfig {
		ResolvedConfig {
			corpus: None,
			query: String::new(),
			tuning,
			filters: SearchFilters::default(),
			category: ActiveCategory::All,
			history: HistorySettings {
				enabled: false,
				file: None,
			},
		}
	}

	#[test]
	fn defaults_are_valid() {
		let config = config(SearchTuning::default());
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_preview_limit() {
		let config = config(SearchTuning {
			preview_limit: 0,
			..SearchTuning::default()
		});
		let sources = ConfigSources {
			preview_limit: Some(SettingSource::CliFlag("--preview-limit")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err, ConfigError::ZeroLimit { .. }));
		assert_eq!(err.key(), "search.preview_limit");
		assert!(err.to_string().contains("CLI flag `--preview-limit`"));
	}

	#[test]
	fn validation_rejects_long_debounce() {
		let config = config(SearchTuning {
			debounce: Duration::from_millis(10_001),
			..SearchTuning::default()
		});
		let sources = ConfigSources {
			debounce_ms: Some(SettingSource::Environment("CAREFIND__SEARCH__DEBOUNCE_MS")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key(), "search.debounce_ms");
		let message = err.to_string();
		assert!(message.contains("10001 ms"));
		assert!(message.contains("capped at 10000 ms"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn unattributed_errors_name_the_config_key() {
		let config = config(SearchTuning {
			history_limit: 0,
			..SearchTuning::default()
		});
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.origin(), &SettingSource::ConfigKey("search.history_limit"));
	}
}
