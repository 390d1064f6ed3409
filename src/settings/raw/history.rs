use std::path::PathBuf;

use anyhow::{Context, Result};
use carefind::app_dirs;
use serde::Deserialize;

use crate::settings::resolved::HistorySettings;

/// `[history]` as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct HistorySection {
	pub(super) enabled: Option<bool>,
	pub(super) file: Option<PathBuf>,
}

impl HistorySection {
	pub(super) fn finalize(self) -> Result<HistorySettings> {
		let enabled = self.enabled.unwrap_or(true);
		let file = match self.file {
			Some(file) => Some(file),
			None if enabled => Some(
				app_dirs::history_file().context("failed to locate the search history file")?,
			),
			None => None,
		};
		Ok(HistorySettings { enabled, file })
	}
}
