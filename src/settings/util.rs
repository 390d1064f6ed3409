/// Trim entries and drop blanks and exact duplicates, keeping the first occurrence.
pub(super) fn sanitize_terms(values: Vec<String>) -> Vec<String> {
	let mut cleaned: Vec<String> = Vec::with_capacity(values.len());
	for value in values {
		let value = value.trim();
		if value.is_empty() || cleaned.iter().any(|existing| existing == value) {
			continue;
		}
		cleaned.push(value.to_string());
	}
	cleaned
}
