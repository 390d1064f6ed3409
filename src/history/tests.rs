use tempfile::tempdir;

use super::*;

fn persisted(history: &SearchHistory) -> Option<Vec<String>> {
	history
		.store()
		.get(HISTORY_KEY)
		.map(|raw| serde_json::from_str(&raw).expect("persisted history is a JSON array"))
}

#[test]
fn case_insensitive_duplicates_keep_the_latest_casing() {
	let mut history = SearchHistory::load(MemoryStore::new());
	history.commit("Telemedicine");
	history.commit("telemedicine");

	assert_eq!(history.entries(), ["telemedicine"]);
	assert_eq!(persisted(&history), Some(vec!["telemedicine".to_string()]));
}

#[test]
fn recommitting_moves_an_entry_to_the_front() {
	let mut history = SearchHistory::load(MemoryStore::new());
	history.commit("sleep");
	history.commit("nurse");
	history.commit("SLEEP");

	assert_eq!(history.entries(), ["SLEEP", "nurse"]);
}

#[test]
fn eleven_commits_keep_the_ten_most_recent() {
	let mut history = SearchHistory::load(MemoryStore::new());
	for n in 0..11 {
		history.commit(&format!("term {n}"));
	}

	assert_eq!(history.entries().len(), 10);
	assert_eq!(history.entries()[0], "term 10");
	assert_eq!(history.entries()[9], "term 1");
	assert!(!history.entries().iter().any(|entry| entry == "term 0"));
}

#[test]
fn blank_commits_are_ignored() {
	let mut history = SearchHistory::load(MemoryStore::new());
	assert!(!history.commit("   "));
	assert!(history.commit("  derm  "));
	assert_eq!(history.entries(), ["derm"]);
}

#[test]
fn malformed_or_non_array_content_loads_as_empty() {
	for raw in ["{\"a\":1}", "not json", "[1, 2]", "\"text\""] {
		let mut store = MemoryStore::new();
		store.set(HISTORY_KEY, raw).unwrap();
		let history = SearchHistory::load(store);
		assert!(history.is_empty(), "expected empty history for {raw}");
	}
}

#[test]
fn loading_normalizes_stored_entries() {
	let mut store = MemoryStore::new();
	store
		.set(HISTORY_KEY, r#"["Care", "care", " ", "Nurse"]"#)
		.unwrap();
	let history = SearchHistory::with_limit(store, 10);
	assert_eq!(history.entries(), ["Care", "Nurse"]);
}

#[test]
fn clear_removes_the_persisted_copy() {
	let mut history = SearchHistory::load(MemoryStore::new());
	history.commit("physio");
	history.clear();

	assert!(history.is_empty());
	assert_eq!(persisted(&history), None);
}

#[test]
fn remove_drops_a_single_entry() {
	let mut history = SearchHistory::load(MemoryStore::new());
	history.commit("physio");
	history.commit("nutrition");

	assert!(history.remove("PHYSIO"));
	assert!(!history.remove("missing"));
	assert_eq!(history.entries(), ["nutrition"]);
	assert_eq!(persisted(&history), Some(vec!["nutrition".to_string()]));
}

#[test]
fn history_survives_a_restart_through_the_file_store() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("history.json");

	let mut history = SearchHistory::load(JsonFileStore::new(&path));
	history.commit("elder care");
	history.commit("night nurse");
	drop(history);

	let reloaded = SearchHistory::load(JsonFileStore::new(&path));
	assert_eq!(reloaded.entries(), ["night nurse", "elder care"]);
}
