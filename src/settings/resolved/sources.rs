use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origin of each validated setting, `None` when the default applies.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) debounce_ms: Option<SettingSource>,
	pub(crate) preview_limit: Option<SettingSource>,
	pub(crate) suggestion_limit: Option<SettingSource>,
	pub(crate) history_limit: Option<SettingSource>,
	pub(crate) date_range: Option<SettingSource>,
	pub(crate) sort_by: Option<SettingSource>,
	pub(crate) price_tier: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for(field: &Option<SettingSource>, key: &'static str) -> SettingSource {
		field.clone().unwrap_or(SettingSource::ConfigKey(key))
	}
}
