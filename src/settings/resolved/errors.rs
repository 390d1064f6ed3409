use thiserror::Error;

use super::SettingSource;

/// A setting that parsed but cannot drive a search session.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("`{key}` from {origin} must be greater than zero")]
	ZeroLimit {
		key: &'static str,
		origin: SettingSource,
	},
	#[error("`search.debounce_ms` from {origin} is {millis} ms; the quiet period is capped at {max_millis} ms")]
	DebounceTooLong {
		millis: u128,
		max_millis: u128,
		origin: SettingSource,
	},
	#[error("`{key}` from {origin} has no facet named '{value}' (expected one of: {expected})")]
	UnknownFacet {
		key: &'static str,
		value: String,
		expected: &'static str,
		origin: SettingSource,
	},
}

impl ConfigError {
	/// Config key the rejected value belongs to.
	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::ZeroLimit { key, .. } | Self::UnknownFacet { key, .. } => key,
			Self::DebounceTooLong { .. } => "search.debounce_ms",
		}
	}

	pub(crate) fn origin(&self) -> &SettingSource {
		match self {
			Self::ZeroLimit { origin, .. }
			| Self::DebounceTooLong { origin, .. }
			| Self::UnknownFacet { origin, .. } => origin,
		}
	}
}
