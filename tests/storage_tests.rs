//! Integration tests for the local key-value storage layer
//!
//! Covers the raw get/set/delete surface and the typed history helpers used
//! by the audio panels. Keys are unique per test so the suite can run in
//! parallel against the shared storage directory.

use nimbus::storage::{
    HISTORY_CAP, load_history, push_capped, save_history, storage_delete, storage_get,
    storage_keys, storage_set,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Entry {
    id: String,
    text: String,
}

fn entry(id: &str) -> Entry {
    Entry {
        id: id.to_string(),
        text: format!("text for {id}"),
    }
}

mod storage_tests {
    use super::*;

    #[test]
    fn test_storage_set_and_get() {
        let key = "test_set_get";
        let value = r#"{"name": "test", "count": 42}"#;

        storage_set(key, value).expect("Failed to set storage");
        assert_eq!(storage_get(key), Some(value.to_string()));

        storage_delete(key).expect("Failed to delete");
    }

    #[test]
    fn test_storage_get_nonexistent() {
        assert_eq!(storage_get("test_nonexistent_key"), None);
    }

    #[test]
    fn test_storage_delete() {
        let key = "test_to_delete";

        storage_set(key, "value").expect("Failed to set");
        assert!(storage_get(key).is_some());

        storage_delete(key).expect("Failed to delete");
        assert!(storage_get(key).is_none());
    }

    #[test]
    fn test_storage_keys_lists_written_keys() {
        storage_set("test_keys_a", "1").expect("Failed to set");
        storage_set("test_keys_b", "2").expect("Failed to set");

        let keys = storage_keys();
        assert!(keys.contains(&"test_keys_a".to_string()));
        assert!(keys.contains(&"test_keys_b".to_string()));

        storage_delete("test_keys_a").expect("Failed to delete");
        storage_delete("test_keys_b").expect("Failed to delete");
    }

    #[test]
    fn test_storage_key_sanitization() {
        // Colons are not filesystem-safe; the key round-trips regardless.
        let key = "test:sanitized:key";

        storage_set(key, "dark").expect("Failed to set");
        assert_eq!(storage_get(key), Some("dark".to_string()));
        assert!(storage_keys().contains(&"test_sanitized_key".to_string()));

        storage_delete(key).expect("Failed to delete");
    }
}

mod history_tests {
    use super::*;

    #[test]
    fn test_history_round_trip() {
        let key = "test_history_round_trip";
        let entries = vec![entry("a"), entry("b")];

        save_history(key, &entries).expect("Failed to save history");
        let loaded: Vec<Entry> = load_history(key);
        assert_eq!(loaded, entries);

        storage_delete(key).expect("Failed to delete");
    }

    #[test]
    fn test_missing_history_loads_empty() {
        let loaded: Vec<Entry> = load_history("test_history_missing");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_corrupt_history_loads_empty() {
        let key = "test_history_corrupt";
        storage_set(key, "not json at all").expect("Failed to set");

        let loaded: Vec<Entry> = load_history(key);
        assert!(loaded.is_empty());

        storage_delete(key).expect("Failed to delete");
    }

    #[test]
    fn test_history_caps_at_ten_entries() {
        let key = "test_history_cap";
        let mut entries: Vec<Entry> = Vec::new();
        for i in 0..(HISTORY_CAP + 5) {
            push_capped(&mut entries, entry(&format!("e{i}")));
        }
        save_history(key, &entries).expect("Failed to save history");

        let loaded: Vec<Entry> = load_history(key);
        assert_eq!(loaded.len(), HISTORY_CAP);
        // Newest first: the last push wins the top slot.
        assert_eq!(loaded[0].id, format!("e{}", HISTORY_CAP + 4));

        storage_delete(key).expect("Failed to delete");
    }

    #[test]
    fn test_delete_removes_id_from_persisted_blob() {
        let key = "test_history_delete_id";
        let entries = vec![entry("keep-1"), entry("drop"), entry("keep-2")];
        save_history(key, &entries).expect("Failed to save history");

        let mut loaded: Vec<Entry> = load_history(key);
        loaded.retain(|candidate| candidate.id != "drop");
        save_history(key, &loaded).expect("Failed to save history");

        let reloaded: Vec<Entry> = load_history(key);
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.iter().all(|candidate| candidate.id != "drop"));
        assert!(reloaded.iter().any(|candidate| candidate.id == "keep-1"));
        assert!(reloaded.iter().any(|candidate| candidate.id == "keep-2"));

        storage_delete(key).expect("Failed to delete");
    }
}
