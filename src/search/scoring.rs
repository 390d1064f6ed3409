use super::query::NormalizedQuery;

/// Points for the whole query appearing in the title.
pub const TITLE_MATCH: u32 = 6;
/// Extra points when the title starts with the query.
pub const TITLE_PREFIX: u32 = 3;
/// Points for the whole query appearing in the description.
pub const DESCRIPTION_MATCH: u32 = 2;

/// Lower-cased searchable text of one item.
#[derive(Debug, Clone)]
pub struct ItemText {
	pub title: String,
	pub description: String,
	/// `title` and `description` joined by a space, used for term matching.
	pub haystack: String,
}

impl ItemText {
	#[must_use]
	pub fn new(title: &str, description: &str) -> Self {
		let title = title.to_lowercase();
		let description = description.to_lowercase();
		let haystack = format!("{title} {description}");
		Self {
			title,
			description,
			haystack,
		}
	}
}

/// Relevance of `text` for `query`; zero means no match.
///
/// Only the whole query string contributes, individual terms do not.
#[must_use]
pub fn score(query: &NormalizedQuery, text: &ItemText) -> u32 {
	let needle = query.text();
	if needle.is_empty() {
		return 0;
	}

	let mut score = 0;
	if text.title.contains(needle) {
		score += TITLE_MATCH;
		if text.title.starts_with(needle) {
			score += TITLE_PREFIX;
		}
	}
	if text.description.contains(needle) {
		score += DESCRIPTION_MATCH;
	}
	score
}

#[cfg(test)]
mod tests {
	use super::*;

	fn query(raw: &str) -> NormalizedQuery {
		NormalizedQuery::normalize(raw)
	}

	#[test]
	fn title_prefix_and_description_accumulate() {
		let text = ItemText::new("Telemedicine Consultation", "Telemedicine from home");
		assert_eq!(score(&query("telemedicine"), &text), 6 + 3 + 2);
		assert_eq!(score(&query("consultation"), &text), 6);
		assert_eq!(score(&query("home"), &text), 2);
	}

	#[test]
	fn whole_query_must_appear_contiguously() {
		let text = ItemText::new("Clinic Starter Kit", "Templates for a new practice");
		assert_eq!(score(&query("starter clinic"), &text), 0);
		assert_eq!(score(&query("clinic starter"), &text), 9);
	}

	#[test]
	fn matching_is_case_insensitive() {
		let text = ItemText::new("DERMATOLOGY Consultation", "");
		assert_eq!(score(&query("Dermatology"), &text), 9);
	}
}
