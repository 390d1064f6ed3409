use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let tuning = &config.tuning;
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!(
			"  Corpus: {}",
			config
				.corpus
				.as_ref()
				.map_or_else(|| "(built-in sample)".to_string(), |path| path.display().to_string())
		),
		format!("  Debounce: {} ms", tuning.debounce.as_millis()),
		format!("  Preview limit: {}", tuning.preview_limit),
		format!("  Suggestion limit: {}", tuning.suggestion_limit),
		format!("  History limit: {}", tuning.history_limit),
		format!("  Popular searches: {}", tuning.popular_searches.join(", ")),
		format!("  Date range: {}", config.filters.date_range),
		format!("  Sort by: {}", config.filters.sort_by),
		format!("  Price tier: {}", config.filters.price_tier),
		format!("  Category: {}", config.category),
		format!("  History: {}", bool_to_word(config.history.enabled)),
	];
	if let Some(file) = &config.history.file {
		lines.push(format!("  History file: {}", file.display()));
	}
	if !config.query.is_empty() {
		lines.push(format!("  Query: {}", config.query));
	}
	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
