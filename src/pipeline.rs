//! Debounced, cancellable query scheduling.
//!
//! Every accepted keystroke stamps a new generation. An evaluation handed out
//! by [`QueryPipeline::poll`] may only be committed while its generation is
//! still the latest, so a superseded evaluation can never overwrite a newer
//! result. Time is supplied by the caller's event loop.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::search::NormalizedQuery;
use crate::search::tuning::DEBOUNCE;

/// Coarse state of the search surface derived from the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
	/// No active query; history and suggestions are shown.
	Idle,
	/// An evaluation is scheduled or running.
	Searching,
	/// The latest evaluation has been committed.
	Results,
}

/// A query ready to run, tagged with the generation that scheduled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
	pub generation: u64,
	pub query: NormalizedQuery,
}

#[derive(Debug)]
struct Pending {
	evaluation: Evaluation,
	due: Instant,
}

/// Debounce timer plus generation counter for the query input.
#[derive(Debug)]
pub struct QueryPipeline {
	debounce: Duration,
	next_generation: u64,
	latest: Option<u64>,
	pending: Option<Pending>,
	loading: bool,
	active: Option<NormalizedQuery>,
}

impl Default for QueryPipeline {
	fn default() -> Self {
		Self::new(DEBOUNCE)
	}
}

impl QueryPipeline {
	#[must_use]
	pub fn new(debounce: Duration) -> Self {
		Self {
			debounce,
			next_generation: 0,
			latest: None,
			pending: None,
			loading: false,
			active: None,
		}
	}

	#[must_use]
	pub fn debounce(&self) -> Duration {
		self.debounce
	}

	/// Record new input text, restarting the quiet period.
	///
	/// Returns `true` when the input is an active query. Short input cancels
	/// whatever was pending and clears the loading flag.
	pub fn input(&mut self, raw: &str, now: Instant) -> bool {
		match NormalizedQuery::parse(raw) {
			Some(query) => {
				self.schedule(query, now + self.debounce);
				true
			}
			None => {
				self.cancel();
				false
			}
		}
	}

	/// Re-run the active query without waiting for the quiet period.
	///
	/// Used when filters change. Returns `false` when there is no active query.
	pub fn refresh(&mut self, now: Instant) -> bool {
		let Some(query) = self.active.clone() else {
			return false;
		};
		self.schedule(query, now);
		true
	}

	/// Make any pending evaluation due immediately.
	pub fn flush(&mut self, now: Instant) {
		if let Some(pending) = self.pending.as_mut() {
			pending.due = now;
		}
	}

	fn schedule(&mut self, query: NormalizedQuery, due: Instant) {
		self.next_generation = self.next_generation.wrapping_add(1);
		let generation = self.next_generation;
		if let Some(stale) = self.pending.take() {
			debug!(
				generation = stale.evaluation.generation,
				"cancelled pending search evaluation"
			);
		}
		self.latest = Some(generation);
		self.active = Some(query.clone());
		self.loading = true;
		self.pending = Some(Pending {
			evaluation: Evaluation { generation, query },
			due,
		});
	}

	/// Hand out the pending evaluation once its quiet period has elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<Evaluation> {
		if self.pending.as_ref().is_some_and(|pending| pending.due <= now) {
			self.pending.take().map(|pending| pending.evaluation)
		} else {
			None
		}
	}

	/// Whether `evaluation` is still the most recent one scheduled.
	#[must_use]
	pub fn is_current(&self, evaluation: &Evaluation) -> bool {
		self.latest == Some(evaluation.generation)
	}

	/// Commit a finished evaluation.
	///
	/// Returns `false`, leaving the loading flag untouched, when a newer input
	/// has superseded it.
	pub fn complete(&mut self, evaluation: &Evaluation) -> bool {
		if !self.is_current(evaluation) {
			debug!(
				generation = evaluation.generation,
				latest = ?self.latest,
				"discarded stale search evaluation"
			);
			return false;
		}
		self.loading = false;
		true
	}

	/// Drop the pending timer and forget the active query.
	pub fn cancel(&mut self) {
		self.pending = None;
		self.latest = None;
		self.active = None;
		self.loading = false;
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	#[must_use]
	pub fn has_query(&self) -> bool {
		self.active.is_some()
	}

	/// The most recently accepted active query.
	#[must_use]
	pub fn active_query(&self) -> Option<&NormalizedQuery> {
		self.active.as_ref()
	}

	/// When the pending evaluation becomes due, for hosts that schedule wake-ups.
	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.due)
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		match (self.has_query(), self.loading) {
			(false, _) => Phase::Idle,
			(true, true) => Phase::Searching,
			(true, false) => Phase::Results,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ms(value: u64) -> Duration {
		Duration::from_millis(value)
	}

	#[test]
	fn evaluation_waits_for_the_quiet_period() {
		let start = Instant::now();
		let mut pipeline = QueryPipeline::new(ms(300));

		assert!(pipeline.input("tele", start));
		assert!(pipeline.is_loading());
		assert_eq!(pipeline.phase(), Phase::Searching);
		assert!(pipeline.poll(start + ms(299)).is_none());

		let evaluation = pipeline.poll(start + ms(300)).expect("due evaluation");
		assert_eq!(evaluation.query.text(), "tele");
		assert!(pipeline.complete(&evaluation));
		assert!(!pipeline.is_loading());
		assert_eq!(pipeline.phase(), Phase::Results);
	}

	#[test]
	fn new_input_restarts_the_timer_and_replaces_the_query() {
		let start = Instant::now();
		let mut pipeline = QueryPipeline::new(ms(300));

		pipeline.input("te", start);
		pipeline.input("tel", start + ms(200));
		assert!(pipeline.poll(start + ms(350)).is_none());

		let evaluation = pipeline.poll(start + ms(500)).expect("due evaluation");
		assert_eq!(evaluation.query.text(), "tel");
		assert!(pipeline.poll(start + ms(900)).is_none());
	}

	#[test]
	fn stale_completion_is_discarded_and_loading_stays_on() {
		let start = Instant::now();
		let mut pipeline = QueryPipeline::new(ms(300));

		pipeline.input("derm", start);
		let stale = pipeline.poll(start + ms(300)).expect("first evaluation");
		pipeline.input("dermatology", start + ms(310));

		assert!(!pipeline.complete(&stale));
		assert!(pipeline.is_loading());

		let fresh = pipeline.poll(start + ms(610)).expect("second evaluation");
		assert!(fresh.generation > stale.generation);
		assert!(pipeline.complete(&fresh));
		assert!(!pipeline.is_loading());
	}

	#[test]
	fn short_input_clears_query_and_loading() {
		let start = Instant::now();
		let mut pipeline = QueryPipeline::new(ms(300));

		pipeline.input("tele", start);
		let in_flight = pipeline.poll(start + ms(300)).expect("evaluation");
		assert!(!pipeline.input(" t ", start + ms(320)));

		assert!(!pipeline.has_query());
		assert!(!pipeline.is_loading());
		assert_eq!(pipeline.phase(), Phase::Idle);
		assert!(!pipeline.complete(&in_flight));
		assert!(pipeline.deadline().is_none());
	}

	#[test]
	fn refresh_and_flush_skip_the_quiet_period() {
		let start = Instant::now();
		let mut pipeline = QueryPipeline::new(ms(300));
		assert!(!pipeline.refresh(start));

		pipeline.input("care", start);
		pipeline.flush(start + ms(10));
		let first = pipeline.poll(start + ms(10)).expect("flushed evaluation");
		assert!(pipeline.complete(&first));

		assert!(pipeline.refresh(start + ms(20)));
		let again = pipeline.poll(start + ms(20)).expect("refreshed evaluation");
		assert_eq!(again.query, first.query);
		assert_ne!(again.generation, first.generation);
	}
}
