use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use carefind::{
	ActiveCategory, Corpus, GroupedResults, JsonCorpus, JsonFileStore, MemoryStore, Phase,
	SearchEngine, SearchFilters, SearchHistory, SearchResult, SearchSession, SessionEvent,
	StaticCorpus, sample_items,
};
use chrono::Utc;
use tracing::{debug, info};

use crate::settings::{HistorySettings, ResolvedConfig};

/// What one non-interactive search produced.
#[derive(Debug)]
pub(crate) struct SearchReport {
	pub(crate) query: String,
	pub(crate) phase: Phase,
	pub(crate) filters: SearchFilters,
	pub(crate) category: ActiveCategory,
	pub(crate) grouped: GroupedResults,
	pub(crate) suggestions: Vec<String>,
	pub(crate) no_results: bool,
	/// Result chosen by `--commit`, if any.
	pub(crate) selected: Option<SearchResult>,
	pub(crate) committed: bool,
	pub(crate) history: Vec<String>,
}

/// Drives a [`SearchSession`] the way the interactive surface would.
pub(crate) struct SearchWorkflow {
	session: SearchSession,
	query: String,
	category: ActiveCategory,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			corpus,
			query,
			tuning,
			filters,
			category,
			history,
		} = config;

		let corpus = match corpus {
			Some(path) => Corpus::from_provider(&JsonCorpus::new(&path))
				.with_context(|| format!("failed to load corpus from {}", path.display()))?,
			None => Corpus::from_provider(&StaticCorpus::new(sample_items(Utc::now())))
				.context("failed to build the sample corpus")?,
		};
		info!(items = corpus.len(), "corpus loaded");

		let history = open_history(&history, tuning.history_limit);
		let engine = SearchEngine::new(Arc::new(corpus));
		let session = SearchSession::new(engine, history, tuning).with_filters(filters);

		Ok(Self {
			session,
			query,
			category,
		})
	}

	/// Type the configured query, wait out the debounce and report.
	///
	/// With `commit`, the query is recorded and the top visible result selected.
	pub(crate) fn run(mut self, commit: bool) -> SearchReport {
		let start = Instant::now();
		let settled = start + self.session.pipeline().debounce();

		self.session.open();
		self.session.set_active_category(self.category);
		self.session.set_query(&self.query, start);
		self.session.tick(settled);

		let view = self.session.view();
		let mut report = SearchReport {
			query: self.query.clone(),
			phase: view.phase,
			filters: self.session.filters(),
			category: view.active_category,
			grouped: view.groups.clone(),
			suggestions: view.suggestions,
			no_results: view.no_results,
			selected: None,
			committed: false,
			history: Vec::new(),
		};

		if commit {
			match self.session.commit(settled) {
				SessionEvent::Navigate { result, .. } => {
					report.selected = Some(result);
					report.committed = true;
				}
				SessionEvent::Committed { .. } => report.committed = true,
				other => debug!(?other, "nothing to commit"),
			}
		}
		report.history = self.session.history().entries().to_vec();
		report
	}

	pub(crate) fn history(&self) -> &[String] {
		self.session.history().entries()
	}

	/// Searches offered before anything is typed.
	pub(crate) fn popular_searches(&self) -> &[String] {
		&self.session.tuning().popular_searches
	}

	pub(crate) fn clear_history(&mut self) {
		self.session.history_mut().clear();
		info!("search history cleared");
	}
}

fn open_history(settings: &HistorySettings, limit: usize) -> SearchHistory {
	match (&settings.file, settings.enabled) {
		(Some(file), true) => {
			debug!(path = %file.display(), "using persistent search history");
			SearchHistory::with_limit(JsonFileStore::new(file), limit)
		}
		_ => SearchHistory::with_limit(MemoryStore::new(), limit),
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use carefind::{Category, SearchTuning, SortBy};
	use tempfile::tempdir;

	use super::*;

	fn config(query: &str, history_file: Option<std::path::PathBuf>) -> ResolvedConfig {
		ResolvedConfig {
			corpus: None,
			query: query.into(),
			tuning: SearchTuning::default(),
			filters: SearchFilters::default(),
			category: ActiveCategory::All,
			history: HistorySettings {
				enabled: history_file.is_some(),
				file: history_file,
			},
		}
	}

	#[test]
	fn run_settles_the_debounce_and_groups_results() {
		let workflow = SearchWorkflow::from_config(config("consultation", None)).unwrap();
		let report = workflow.run(false);

		assert_eq!(report.phase, Phase::Results);
		assert_eq!(report.grouped.total_for(Category::Service), 2);
		assert_eq!(report.grouped.total_for(Category::Article), 1);
		assert!(!report.committed);
		assert!(report.history.is_empty());
	}

	#[test]
	fn commit_selects_the_first_visible_result_and_persists_history() {
		let dir = tempdir().unwrap();
		let file = dir.path().join("history.json");

		let mut settings = config("Night", Some(file.clone()));
		settings.filters = SearchFilters::new().with_sort_by(SortBy::Popularity);
		let report = SearchWorkflow::from_config(settings).unwrap().run(true);

		let selected = report.selected.expect("selection");
		assert_eq!(selected.title, "Night Nurse Companion");
		assert_eq!(report.history, vec!["Night"]);
		assert!(fs::read_to_string(&file).unwrap().contains("Night"));

		let mut reopened = SearchWorkflow::from_config(config("x", Some(file))).unwrap();
		assert_eq!(reopened.history(), ["Night"]);
		reopened.clear_history();
		assert!(reopened.history().is_empty());
	}

	#[test]
	fn missing_corpus_file_is_reported() {
		let dir = tempdir().unwrap();
		let mut settings = config("care", None);
		settings.corpus = Some(dir.path().join("missing.json"));

		let err = SearchWorkflow::from_config(settings).err().expect("load error");
		assert!(err.to_string().contains("failed to load corpus"));
	}
}
