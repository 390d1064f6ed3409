use std::str::FromStr;

use carefind::{DateRange, PriceFilter, SearchFilters, SortBy};
use serde::Deserialize;

use crate::cli::CliArgs;
use crate::settings::resolved::{ConfigError, ConfigSources, SettingSource};

/// `[filters]` as read from disk; facet identifiers stay strings until resolved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FiltersSection {
	pub(super) date_range: Option<String>,
	pub(super) sort_by: Option<String>,
	pub(super) price_tier: Option<String>,
}

impl FiltersSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.date_range {
			self.date_range = Some(value.as_str().to_string());
		}
		if let Some(value) = cli.sort {
			self.sort_by = Some(value.as_str().to_string());
		}
		if let Some(value) = cli.price {
			self.price_tier = Some(value.as_str().to_string());
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<SearchFilters, ConfigError> {
		let date_range = parse_facet::<DateRange>(
			self.date_range,
			"filters.date_range",
			"last-7-days, last-30-days, last-year, all-time",
			&sources.date_range,
		)?;
		let sort_by = parse_facet::<SortBy>(
			self.sort_by,
			"filters.sort_by",
			"relevance, newest, popularity",
			&sources.sort_by,
		)?;
		let price_tier = parse_facet::<PriceFilter>(
			self.price_tier,
			"filters.price_tier",
			"all, free, paid, premium",
			&sources.price_tier,
		)?;

		Ok(SearchFilters {
			date_range,
			sort_by,
			price_tier,
		})
	}
}

fn parse_facet<T>(
	value: Option<String>,
	key: &'static str,
	expected: &'static str,
	source: &Option<SettingSource>,
) -> Result<T, ConfigError>
where
	T: FromStr + Default,
{
	let Some(value) = value else {
		return Ok(T::default());
	};
	match value.parse() {
		Ok(facet) => Ok(facet),
		Err(_) => Err(ConfigError::UnknownFacet {
			key,
			value,
			expected,
			origin: ConfigSources::source_for(source, key),
		}),
	}
}
