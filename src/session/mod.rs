//! Session-scoped search state.
//!
//! [`SearchSession`] bundles the read-only engine with the mutable state of
//! one search surface: the input pipeline, facet filters, navigation, and
//! history. Keyboard handling lives in `actions` and the render snapshot in
//! `view`, mirroring how the state is consumed.

mod actions;
mod view;

use std::time::Instant;

use carefind_catalog::SearchResult;
use chrono::{DateTime, Utc};
use tracing::debug;

pub use view::SessionView;

use crate::history::SearchHistory;
use crate::navigation::NavigationState;
use crate::pipeline::{Evaluation, QueryPipeline};
use crate::search::{
	ActiveCategory, GroupedResults, SearchEngine, SearchFilters, SearchOutput, SearchTuning,
};

/// Side effects the host should carry out after an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
	None,
	/// The surface opened; focus the input on the next tick.
	Opened,
	Closed,
	/// A result was chosen; hand `result.url` to the router.
	Navigate { result: SearchResult, query: String },
	/// Enter was pressed with nothing selected.
	Committed { query: String },
}

/// State container for one search surface.
pub struct SearchSession {
	engine: SearchEngine,
	tuning: SearchTuning,
	pipeline: QueryPipeline,
	filters: SearchFilters,
	navigation: NavigationState,
	history: SearchHistory,
	query: String,
	output: Option<SearchOutput>,
	grouped: GroupedResults,
	open: bool,
	clock: fn() -> DateTime<Utc>,
}

impl SearchSession {
	/// Create a closed session over `engine`.
	#[must_use]
	pub fn new(engine: SearchEngine, history: SearchHistory, tuning: SearchTuning) -> Self {
		Self {
			engine,
			pipeline: QueryPipeline::new(tuning.debounce),
			tuning,
			filters: SearchFilters::default(),
			navigation: NavigationState::default(),
			history,
			query: String::new(),
			output: None,
			grouped: GroupedResults::default(),
			open: false,
			clock: Utc::now,
		}
	}

	/// Start with `filters` instead of the defaults.
	#[must_use]
	pub fn with_filters(mut self, filters: SearchFilters) -> Self {
		self.filters = filters;
		self
	}

	/// Use `clock` as the reference time for date facets.
	#[must_use]
	pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
		self.clock = clock;
		self
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn filters(&self) -> SearchFilters {
		self.filters
	}

	#[must_use]
	pub fn navigation(&self) -> &NavigationState {
		&self.navigation
	}

	#[must_use]
	pub fn history(&self) -> &SearchHistory {
		&self.history
	}

	pub fn history_mut(&mut self) -> &mut SearchHistory {
		&mut self.history
	}

	#[must_use]
	pub fn engine(&self) -> &SearchEngine {
		&self.engine
	}

	#[must_use]
	pub fn pipeline(&self) -> &QueryPipeline {
		&self.pipeline
	}

	#[must_use]
	pub fn tuning(&self) -> &SearchTuning {
		&self.tuning
	}

	/// Latest committed evaluation, if any.
	#[must_use]
	pub fn output(&self) -> Option<&SearchOutput> {
		self.output.as_ref()
	}

	#[must_use]
	pub fn grouped(&self) -> &GroupedResults {
		&self.grouped
	}

	/// Open the surface with a fresh selection.
	pub fn open(&mut self) -> SessionEvent {
		if self.open {
			return SessionEvent::None;
		}
		self.open = true;
		self.navigation.reset();
		self.regroup();
		debug!("search surface opened");
		SessionEvent::Opened
	}

	/// Close the surface, dropping any pending evaluation and the query.
	pub fn close(&mut self) -> SessionEvent {
		if !self.open {
			return SessionEvent::None;
		}
		self.open = false;
		self.pipeline.cancel();
		self.query.clear();
		self.output = None;
		self.navigation.reset();
		self.regroup();
		debug!("search surface closed");
		SessionEvent::Closed
	}

	pub fn toggle(&mut self) -> SessionEvent {
		if self.open {
			self.close()
		} else {
			self.open()
		}
	}

	/// Replace the input text; evaluation happens on a later [`tick`](Self::tick).
	pub fn set_query(&mut self, raw: &str, now: Instant) {
		if self.query == raw {
			return;
		}
		self.query = raw.to_string();
		self.navigation.query_changed();
		if !self.pipeline.input(raw, now) {
			self.output = None;
			self.regroup();
		}
	}

	/// Replace the facet filters and re-run the active query immediately.
	pub fn set_filters(&mut self, filters: SearchFilters, now: Instant) {
		if self.filters == filters {
			return;
		}
		self.filters = filters;
		self.navigation.query_changed();
		if self.pipeline.refresh(now) {
			self.tick(now);
		}
	}

	/// Switch tabs; results are regrouped without re-evaluating.
	pub fn set_active_category(&mut self, category: ActiveCategory) {
		self.navigation.set_active_category(category);
		self.regroup();
	}

	/// Use a history entry or suggestion as the query and evaluate it now.
	pub fn apply_suggestion(&mut self, text: &str, now: Instant) {
		self.set_query(text, now);
		self.pipeline.flush(now);
		self.tick(now);
	}

	/// Hand out the evaluation whose quiet period has elapsed, if any.
	pub fn take_due(&mut self, now: Instant) -> Option<Evaluation> {
		self.pipeline.poll(now)
	}

	/// Run `evaluation` against the corpus with the current filters.
	#[must_use]
	pub fn evaluate(&self, evaluation: &Evaluation) -> SearchOutput {
		self.engine
			.search(&evaluation.query, &self.filters, (self.clock)())
	}

	/// Commit `output` for `evaluation` unless a newer input superseded it.
	pub fn apply(&mut self, evaluation: &Evaluation, output: SearchOutput) -> bool {
		if !self.pipeline.complete(evaluation) {
			return false;
		}
		let new_query = self
			.output
			.as_ref()
			.is_none_or(|previous| previous.query != output.query);
		if new_query {
			self.navigation.query_changed();
		}
		self.output = Some(output);
		self.regroup();
		true
	}

	/// Drive the debounce timer; returns `true` when new results were committed.
	pub fn tick(&mut self, now: Instant) -> bool {
		let Some(evaluation) = self.take_due(now) else {
			return false;
		};
		let output = self.evaluate(&evaluation);
		self.apply(&evaluation, output)
	}

	/// Result under the cursor, if the visible list is non-empty.
	#[must_use]
	pub fn selected_result(&self) -> Option<&SearchResult> {
		let results = self.grouped.flatten();
		let index = self.navigation.selected(results.len())?;
		results.get(index).copied()
	}

	/// Finalize the interaction: record the query and navigate to the selection.
	pub fn commit(&mut self, now: Instant) -> SessionEvent {
		self.pipeline.flush(now);
		self.tick(now);

		let query = self.query.trim().to_string();
		let selection = self.selected_result().cloned();
		self.history.commit(&query);
		debug!(query = %query, selected = selection.is_some(), "search committed");

		match selection {
			Some(result) => {
				self.close();
				SessionEvent::Navigate { result, query }
			}
			None if query.is_empty() => SessionEvent::None,
			None => SessionEvent::Committed { query },
		}
	}

	fn regroup(&mut self) {
		self.grouped = match &self.output {
			Some(output) => self.engine.group(
				output,
				self.navigation.active_category(),
				self.tuning.preview_limit,
			),
			None => GroupedResults::default(),
		};
		self.navigation.clamp(self.grouped.visible_len());
	}
}
