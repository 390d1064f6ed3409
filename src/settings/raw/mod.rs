use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod filters;
mod history;
mod search;

use filters::FiltersSection;
use history::HistorySection;
use search::SearchSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	filters: FiltersSection,
	history: HistorySection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.search.apply_cli_overrides(cli);
		self.filters.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			debounce_ms: detect_source(
				cli.debounce_ms.map(|_| "--debounce-ms"),
				self.search.debounce_ms.is_some(),
				"CAREFIND__SEARCH__DEBOUNCE_MS",
				"search.debounce_ms",
			),
			preview_limit: detect_source(
				cli.preview_limit.map(|_| "--preview-limit"),
				self.search.preview_limit.is_some(),
				"CAREFIND__SEARCH__PREVIEW_LIMIT",
				"search.preview_limit",
			),
			suggestion_limit: detect_source(
				None,
				self.search.suggestion_limit.is_some(),
				"CAREFIND__SEARCH__SUGGESTION_LIMIT",
				"search.suggestion_limit",
			),
			history_limit: detect_source(
				None,
				self.search.history_limit.is_some(),
				"CAREFIND__SEARCH__HISTORY_LIMIT",
				"search.history_limit",
			),
			date_range: detect_source(
				cli.date_range.map(|_| "--date-range"),
				self.filters.date_range.is_some(),
				"CAREFIND__FILTERS__DATE_RANGE",
				"filters.date_range",
			),
			sort_by: detect_source(
				cli.sort.map(|_| "--sort"),
				self.filters.sort_by.is_some(),
				"CAREFIND__FILTERS__SORT_BY",
				"filters.sort_by",
			),
			price_tier: detect_source(
				cli.price.map(|_| "--price"),
				self.filters.price_tier.is_some(),
				"CAREFIND__FILTERS__PRICE_TIER",
				"filters.price_tier",
			),
		};

		let (corpus, tuning) = self.search.finalize();
		let filters = self.filters.finalize(&sources).map_err(Error::new)?;
		let history = self.history.finalize()?;

		let config = ResolvedConfig {
			corpus,
			query: cli.query.clone().unwrap_or_default(),
			tuning,
			filters,
			category: cli.category.map(Into::into).unwrap_or_default(),
			history,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// Where a present value came from; `cli_flag` is set only when the flag was passed.
fn detect_source(
	cli_flag: Option<&'static str>,
	value_present: bool,
	env_var: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if let Some(flag) = cli_flag {
		return Some(SettingSource::CliFlag(flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
