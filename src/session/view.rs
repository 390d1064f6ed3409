use carefind_catalog::SearchResult;

use super::SearchSession;
use crate::history::suggest;
use crate::pipeline::Phase;
use crate::search::{ActiveCategory, GroupedResults};

/// Everything a renderer needs for one frame.
#[derive(Debug)]
pub struct SessionView<'a> {
	pub open: bool,
	pub phase: Phase,
	pub loading: bool,
	pub query: &'a str,
	pub active_category: ActiveCategory,
	pub groups: &'a GroupedResults,
	/// Visible results in display order.
	pub results: Vec<&'a SearchResult>,
	pub selected: Option<usize>,
	pub history: &'a [String],
	pub suggestions: Vec<String>,
	/// The latest evaluation finished with nothing to show.
	pub no_results: bool,
}

impl SearchSession {
	/// Snapshot the state for rendering.
	#[must_use]
	pub fn view(&self) -> SessionView<'_> {
		let results = self.grouped.flatten();
		let selected = self.navigation.selected(results.len());
		let phase = self.pipeline.phase();
		let suggestions = suggest(
			self.pipeline.active_query(),
			&self.tuning.popular_searches,
			self.engine.corpus().titles(),
			self.tuning.suggestion_limit,
		);
		let no_results =
			phase == Phase::Results && self.output.is_some() && self.grouped.total() == 0;

		SessionView {
			open: self.open,
			phase,
			loading: self.pipeline.is_loading(),
			query: &self.query,
			active_category: self.navigation.active_category(),
			groups: &self.grouped,
			results,
			selected,
			history: self.history.entries(),
			suggestions,
			no_results,
		}
	}
}
