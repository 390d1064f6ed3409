use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use carefind::app_dirs;
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "carefind";

/// Build a [`Config`] from the default locations, explicit files and the environment.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("search.popular_searches"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration files, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".carefind.toml"));
		files.push(current_dir.join("carefind.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".carefind.toml")));
		assert!(files.iter().any(|path| path.ends_with("carefind.toml")));
	}

	#[test]
	fn explicit_files_are_merged_in_order() {
		let dir = tempdir().unwrap();
		let first = dir.path().join("first.toml");
		let second = dir.path().join("second.toml");
		fs::write(&first, "[search]\npreview_limit = 3\nsuggestion_limit = 4\n").unwrap();
		fs::write(&second, "[search]\npreview_limit = 7\n").unwrap();

		let cli = CliArgs::parse_from([
			"carefind",
			"--no-config",
			"--config",
			first.to_str().unwrap(),
			"--config",
			second.to_str().unwrap(),
		]);
		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_int("search.preview_limit").unwrap(), 7);
		assert_eq!(config.get_int("search.suggestion_limit").unwrap(), 4);
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from(["carefind", "-n", "-c", missing.to_str().unwrap()]);
		assert!(build_config(&cli).is_err());
	}
}
