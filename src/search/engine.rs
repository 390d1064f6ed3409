use std::sync::Arc;

use carefind_catalog::{Corpus, SearchItem};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::filters::{SearchFilters, SortBy};
use super::grouping::{ActiveCategory, GroupedResults, group};
use super::query::NormalizedQuery;
use super::ranking::{RankedHit, rank};
use super::scoring::{ItemText, score};

/// Result of evaluating one query against the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutput {
	pub query: NormalizedQuery,
	pub filters: SearchFilters,
	/// Ranked survivors of filtering and scoring.
	pub hits: Vec<RankedHit>,
}

impl SearchOutput {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.hits.is_empty()
	}
}

/// Stateless evaluator over an injected, read-only corpus.
#[derive(Debug, Clone)]
pub struct SearchEngine {
	corpus: Arc<Corpus>,
	texts: Arc<[ItemText]>,
}

impl SearchEngine {
	/// Build an engine over `corpus`, pre-computing the lower-cased text of every item.
	#[must_use]
	pub fn new(corpus: Arc<Corpus>) -> Self {
		let texts = corpus
			.iter()
			.map(|item| ItemText::new(&item.title, &item.description))
			.collect();
		Self { corpus, texts }
	}

	#[must_use]
	pub fn corpus(&self) -> &Corpus {
		&self.corpus
	}

	#[must_use]
	pub fn items(&self) -> &[SearchItem] {
		self.corpus.items()
	}

	/// Filter, score and rank the corpus for `query`.
	///
	/// Items must contain every term, pass both facets, and, when sorting by
	/// relevance, score above zero.
	#[must_use]
	pub fn search(
		&self,
		query: &NormalizedQuery,
		filters: &SearchFilters,
		now: DateTime<Utc>,
	) -> SearchOutput {
		let items = self.items();
		let mut hits: Vec<RankedHit> = items
			.iter()
			.zip(self.texts.iter())
			.enumerate()
			.filter(|(_, (item, text))| {
				query.all_terms_in(&text.haystack) && filters.admits(item, now)
			})
			.filter_map(|(index, (_, text))| {
				let score = match filters.sort_by {
					SortBy::Relevance => score(query, text),
					SortBy::Newest | SortBy::Popularity => 0,
				};
				let keep = match filters.sort_by {
					SortBy::Relevance => score > 0,
					SortBy::Newest | SortBy::Popularity => true,
				};
				keep.then_some(RankedHit { index, score })
			})
			.collect();

		rank(&mut hits, filters.sort_by, items);
		debug!(
			query = query.text(),
			sort = %filters.sort_by,
			matches = hits.len(),
			"evaluated search query"
		);

		SearchOutput {
			query: query.clone(),
			filters: *filters,
			hits,
		}
	}

	/// Group a previous evaluation for display under `active`.
	#[must_use]
	pub fn group(
		&self,
		output: &SearchOutput,
		active: ActiveCategory,
		preview_limit: usize,
	) -> GroupedResults {
		group(self.items(), &output.hits, active, preview_limit)
	}

	/// Item behind a ranked hit.
	#[must_use]
	pub fn item(&self, hit: &RankedHit) -> Option<&SearchItem> {
		self.items().get(hit.index)
	}
}
