use std::collections::HashSet;

use crate::search::NormalizedQuery;

/// Suggestions for the current input.
///
/// Without an active query the popular list is returned as-is. With one, the
/// union of popular searches and corpus titles (in that order, exact
/// duplicates removed) is filtered to entries containing the query and
/// truncated to `limit`. Nothing is scored.
#[must_use]
pub fn suggest<'a>(
	query: Option<&NormalizedQuery>,
	popular: &'a [String],
	titles: impl IntoIterator<Item = &'a str>,
	limit: usize,
) -> Vec<String> {
	let Some(query) = query else {
		return popular.to_vec();
	};

	let mut seen = HashSet::new();
	popular
		.iter()
		.map(String::as_str)
		.chain(titles)
		.filter(|candidate| seen.insert(*candidate))
		.filter(|candidate| candidate.to_lowercase().contains(query.text()))
		.take(limit)
		.map(str::to_string)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn popular() -> Vec<String> {
		vec!["Telemedicine".into(), "Mental health".into(), "Home care".into()]
	}

	#[test]
	fn inactive_query_returns_popular_searches() {
		let popular = popular();
		let suggestions = suggest(None, &popular, ["Anything"], 6);
		assert_eq!(suggestions, popular);
	}

	#[test]
	fn popular_terms_come_before_titles() {
		let popular = popular();
		let query = NormalizedQuery::parse("tele").unwrap();
		let titles = ["Telemedicine Consultation", "Telemedicine", "Sleep Basics"];

		let suggestions = suggest(Some(&query), &popular, titles, 6);
		assert_eq!(suggestions, vec!["Telemedicine", "Telemedicine Consultation"]);
	}

	#[test]
	fn suggestions_are_capped() {
		let popular = Vec::new();
		let titles: Vec<String> = (0..10).map(|n| format!("Care plan {n}")).collect();
		let query = NormalizedQuery::parse("care").unwrap();

		let suggestions = suggest(Some(&query), &popular, titles.iter().map(String::as_str), 6);
		assert_eq!(suggestions.len(), 6);
		assert_eq!(suggestions[0], "Care plan 0");
	}
}
