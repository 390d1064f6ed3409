use std::time::Duration;

/// Minimum number of characters (after trimming) that make a query active.
pub const MIN_QUERY_CHARS: usize = 2;

/// Quiet period the input must stay unchanged before a query is evaluated.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Results shown per category while every category is displayed.
pub const PREVIEW_LIMIT: usize = 5;

/// Maximum number of suggestions offered for an active query.
pub const SUGGESTION_LIMIT: usize = 6;

/// Maximum number of committed queries remembered.
pub const HISTORY_LIMIT: usize = 10;

/// Searches offered before the user has typed anything.
pub const POPULAR_SEARCHES: &[&str] = &[
	"Telemedicine",
	"Mental health",
	"Home care",
	"Physiotherapy",
	"Nutrition",
	"Dermatology",
];

/// Runtime-adjustable knobs for a search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTuning {
	pub debounce: Duration,
	pub preview_limit: usize,
	pub suggestion_limit: usize,
	pub history_limit: usize,
	pub popular_searches: Vec<String>,
}

impl Default for SearchTuning {
	fn default() -> Self {
		Self {
			debounce: DEBOUNCE,
			preview_limit: PREVIEW_LIMIT,
			suggestion_limit: SUGGESTION_LIMIT,
			history_limit: HISTORY_LIMIT,
			popular_searches: POPULAR_SEARCHES.iter().map(|term| (*term).to_string()).collect(),
		}
	}
}
