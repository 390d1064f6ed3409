//! Configuration loading and resolution.
//!
//! `load` layers the config directory file, the working directory files,
//! explicit `--config` files, `CAREFIND__*` environment variables and finally
//! CLI flags, then validates the result into a [`ResolvedConfig`].

mod raw;
mod resolved;
mod sources;
mod util;

use anyhow::{Context, Result};

use self::raw::RawConfig;
use self::sources::build_config;
use crate::cli::CliArgs;

pub use resolved::{HistorySettings, ResolvedConfig};

/// Resolve the settings for one carefind run from `cli` and every config layer.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = build_config(cli)?
		.try_deserialize()
		.context("failed to read carefind configuration")?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	fn cli_with(contents: &str) -> (tempfile::TempDir, CliArgs) {
		let dir = tempdir().unwrap();
		let path = dir.path().join("carefind.toml");
		fs::write(&path, contents).unwrap();
		let cli = CliArgs::parse_from(["carefind", "--no-config", "--config", path.to_str().unwrap()]);
		(dir, cli)
	}

	#[test]
	fn mistyped_setting_reports_the_configuration_read() {
		let (_dir, cli) = cli_with("[search]\npreview_limit = \"many\"\n");
		let err = load(&cli).unwrap_err();
		assert_eq!(err.to_string(), "failed to read carefind configuration");
	}

	#[test]
	fn file_values_flow_into_the_resolved_config() {
		let (_dir, cli) = cli_with("[search]\npreview_limit = 2\n[filters]\nsort_by = \"newest\"\n");
		let config = load(&cli).unwrap();
		assert_eq!(config.tuning.preview_limit, 2);
		assert_eq!(config.filters.sort_by, carefind::SortBy::Newest);
	}
}
