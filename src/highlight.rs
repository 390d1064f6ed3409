use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// A run of display text, flagged when it matched a query term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSegment<'a> {
	pub text: &'a str,
	pub emphasized: bool,
}

impl<'a> HighlightSegment<'a> {
	const fn plain(text: &'a str) -> Self {
		Self {
			text,
			emphasized: false,
		}
	}

	const fn emphasized(text: &'a str) -> Self {
		Self {
			text,
			emphasized: true,
		}
	}
}

/// Build a case-insensitive alternation of the escaped query terms.
///
/// Longer terms come first so they win over their own prefixes.
fn term_matcher(query: &str) -> Option<Regex> {
	let mut terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
	if terms.is_empty() {
		return None;
	}
	terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
	terms.dedup();

	let pattern = terms
		.iter()
		.map(|term| regex::escape(term))
		.collect::<Vec<_>>()
		.join("|");
	match RegexBuilder::new(&pattern).case_insensitive(true).build() {
		Ok(matcher) => Some(matcher),
		Err(err) => {
			debug!(%err, "highlight matcher rejected; showing plain text");
			None
		}
	}
}

/// Split `text` into alternating plain and emphasized segments for `query`.
#[must_use]
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<HighlightSegment<'a>> {
	let Some(matcher) = term_matcher(query) else {
		return vec![HighlightSegment::plain(text)];
	};

	let mut segments = Vec::new();
	let mut cursor = 0;
	for found in matcher.find_iter(text) {
		if found.is_empty() {
			continue;
		}
		if found.start() > cursor {
			segments.push(HighlightSegment::plain(&text[cursor..found.start()]));
		}
		segments.push(HighlightSegment::emphasized(found.as_str()));
		cursor = found.end();
	}
	if cursor < text.len() || segments.is_empty() {
		segments.push(HighlightSegment::plain(&text[cursor..]));
	}
	segments
}

/// Render `text` as a terminal line with query matches in bold.
#[must_use]
pub fn highlight_line<'a>(text: &'a str, query: &str, base: Style) -> Line<'a> {
	let emphasis = base.add_modifier(Modifier::BOLD);
	let spans: Vec<Span<'a>> = highlight(text, query)
		.into_iter()
		.map(|segment| {
			let style = if segment.emphasized { emphasis } else { base };
			Span::styled(segment.text, style)
		})
		.collect();
	Line::from(spans)
}
