use std::fmt::Write;

use anyhow::Result;
use carefind::{Phase, SearchResult, highlight};
use serde_json::{Value, json};

use crate::workflow::SearchReport;

/// Wrap matched query terms in brackets.
fn bracket_matches(text: &str, query: &str) -> String {
	highlight(text, query)
		.into_iter()
		.fold(String::with_capacity(text.len()), |mut out, segment| {
			if segment.emphasized {
				let _ = write!(out, "[{}]", segment.text);
			} else {
				out.push_str(segment.text);
			}
			out
		})
}

/// Render the report as plain text.
pub(crate) fn format_plain(report: &SearchReport) -> String {
	let mut out = String::new();

	match report.phase {
		Phase::Idle => {
			let _ = writeln!(out, "Type at least two characters to search.");
			write_list(&mut out, "Recent searches", &report.history);
			write_list(&mut out, "Popular searches", &report.suggestions);
			return out;
		}
		Phase::Searching => {
			let _ = writeln!(out, "Searching for '{}'...", report.query.trim());
			return out;
		}
		Phase::Results => {}
	}

	if report.no_results {
		let _ = writeln!(out, "No results for '{}'.", report.query.trim());
		write_list(&mut out, "Try", &report.suggestions);
	} else {
		for group in report.grouped.visible_groups() {
			let _ = writeln!(out, "{} ({})", group.category.label(), group.total);
			for result in &group.results {
				let _ = writeln!(
					out,
					"  {}  {}",
					bracket_matches(&result.title, &report.query),
					result.url
				);
			}
			if group.is_truncated() {
				let _ = writeln!(
					out,
					"  see all {} (--category {})",
					group.total, group.category
				);
			}
		}
	}

	if let Some(selected) = &report.selected {
		let _ = writeln!(out, "Opening {}", selected.url);
	} else if report.committed {
		let _ = writeln!(out, "Saved '{}' to recent searches.", report.query.trim());
	}
	out
}

fn write_list(out: &mut String, title: &str, entries: &[String]) {
	if entries.is_empty() {
		return;
	}
	let _ = writeln!(out, "{title}:");
	for entry in entries {
		let _ = writeln!(out, "  {entry}");
	}
}

/// Print a plain-text representation of the search report.
pub(crate) fn print_plain(report: &SearchReport) {
	print!("{}", format_plain(report));
}

fn result_json(result: &SearchResult) -> Value {
	json!({
		"id": result.id,
		"title": result.title,
		"description": result.description,
		"category": result.category,
		"url": result.url,
	})
}

/// Format the search report as a JSON string.
pub(crate) fn format_report_json(report: &SearchReport) -> Result<String> {
	let phase = match report.phase {
		Phase::Idle => "idle",
		Phase::Searching => "searching",
		Phase::Results => "results",
	};
	let groups: Vec<Value> = report
		.grouped
		.groups
		.iter()
		.map(|group| {
			json!({
				"category": group.category,
				"total": group.total,
				"results": group.results.iter().map(result_json).collect::<Vec<_>>(),
			})
		})
		.collect();

	let payload = json!({
		"query": report.query,
		"phase": phase,
		"filters": report.filters,
		"category": report.category.as_str(),
		"total": report.grouped.total(),
		"dropped": report.grouped.dropped,
		"groups": groups,
		"suggestions": report.suggestions,
		"selection": report.selected.as_ref().map(result_json),
		"committed": report.committed,
		"history": report.history,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search report.
pub(crate) fn print_json(report: &SearchReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}

/// Print recent searches followed by the popular list.
pub(crate) fn print_history(history: &[String], popular: &[String], json: bool) -> Result<()> {
	if json {
		let payload = json!({ "history": history, "popular": popular });
		println!("{}", serde_json::to_string_pretty(&payload)?);
		return Ok(());
	}

	let mut out = String::new();
	if history.is_empty() {
		let _ = writeln!(out, "No recent searches.");
	}
	write_list(&mut out, "Recent searches", history);
	write_list(&mut out, "Popular searches", popular);
	print!("{out}");
	Ok(())
}
