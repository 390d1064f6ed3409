use super::tuning::MIN_QUERY_CHARS;

/// A trimmed, lower-cased query split into whitespace-delimited terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
	text: String,
	terms: Vec<String>,
}

impl NormalizedQuery {
	/// Normalize `raw`, returning `None` when it is too short to be active.
	#[must_use]
	pub fn parse(raw: &str) -> Option<Self> {
		let query = Self::normalize(raw);
		(query.text.chars().count() >= MIN_QUERY_CHARS).then_some(query)
	}

	/// Normalize `raw` without applying the minimum length rule.
	#[must_use]
	pub fn normalize(raw: &str) -> Self {
		let text = raw.trim().to_lowercase();
		let terms = text.split_whitespace().map(str::to_string).collect();
		Self { text, terms }
	}

	/// The whole normalized query.
	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	#[must_use]
	pub fn terms(&self) -> &[String] {
		&self.terms
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	/// Whether every term occurs somewhere in `haystack`, which must already be lower-cased.
	#[must_use]
	pub fn all_terms_in(&self, haystack: &str) -> bool {
		self.terms.iter().all(|term| haystack.contains(term.as_str()))
	}
}

/// Whether `raw` counts as an active query.
#[must_use]
pub fn is_active(raw: &str) -> bool {
	raw.trim().chars().count() >= MIN_QUERY_CHARS
}
