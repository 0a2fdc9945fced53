//! Local key-value storage backing the audio history panels.
//!
//! Native targets write one JSON blob per key under the platform data
//! directory; wasm falls back to a process-lifetime in-memory map. There is
//! no schema versioning or migration: unreadable blobs load as empty.

use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

pub const TRANSCRIPTION_HISTORY_KEY: &str = "transcriptionHistory";
pub const AUDIO_HISTORY_KEY: &str = "audioHistory";

/// Histories keep only the most recent entries.
pub const HISTORY_CAP: usize = 10;

/// In-memory storage for WASM, file-based for native
#[allow(dead_code)]
static MEM_STORAGE: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

#[cfg(not(target_arch = "wasm32"))]
fn storage_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("nimbus").join("storage");
    }

    PathBuf::from("cache").join("storage")
}

/// Sanitize a storage key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn storage_get(key: &str) -> Option<String> {
    let file_path = storage_dir().join(format!("{}.json", sanitize_key(key)));
    fs::read_to_string(file_path).ok()
}

#[cfg(target_arch = "wasm32")]
pub fn storage_get(key: &str) -> Option<String> {
    let storage = MEM_STORAGE.lock().ok()?;
    storage.get(key).cloned()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn storage_set(key: &str, value: &str) -> Result<(), String> {
    let dir = storage_dir();
    fs::create_dir_all(&dir).map_err(|e| format!("Failed to create storage directory: {}", e))?;
    let file_path = dir.join(format!("{}.json", sanitize_key(key)));
    fs::write(file_path, value).map_err(|e| format!("Failed to write to storage: {}", e))
}

#[cfg(target_arch = "wasm32")]
pub fn storage_set(key: &str, value: &str) -> Result<(), String> {
    let mut storage = MEM_STORAGE.lock().map_err(|e| e.to_string())?;
    storage.insert(key.to_string(), value.to_string());
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn storage_delete(key: &str) -> Result<(), String> {
    let file_path = storage_dir().join(format!("{}.json", sanitize_key(key)));
    if file_path.exists() {
        fs::remove_file(file_path).map_err(|e| format!("Failed to delete from storage: {}", e))?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn storage_delete(key: &str) -> Result<(), String> {
    let mut storage = MEM_STORAGE.lock().map_err(|e| e.to_string())?;
    storage.remove(key);
    Ok(())
}

/// List all stored keys (sanitized form)
#[cfg(not(target_arch = "wasm32"))]
pub fn storage_keys() -> Vec<String> {
    let dir = storage_dir();
    if !dir.exists() {
        return Vec::new();
    }
    fs::read_dir(dir)
        .ok()
        .map(|entries| {
            entries
                .flatten()
                .filter_map(|entry| {
                    let path = entry.path();
                    if path.extension().and_then(|e| e.to_str()) == Some("json") {
                        path.file_stem()
                            .and_then(|s| s.to_str())
                            .map(|s| s.to_string())
                    } else {
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
pub fn storage_keys() -> Vec<String> {
    MEM_STORAGE
        .lock()
        .ok()
        .map(|storage| storage.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn storage_clear() -> Result<(), String> {
    let dir = storage_dir();
    if dir.exists() {
        fs::remove_dir_all(&dir).map_err(|e| format!("Failed to clear storage: {}", e))?;
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn storage_clear() -> Result<(), String> {
    let mut storage = MEM_STORAGE.lock().map_err(|e| e.to_string())?;
    storage.clear();
    Ok(())
}

// ============================================
// Typed history helpers
// ============================================

/// Load a serialized history list. Missing or unreadable blobs load as empty.
pub fn load_history<T: DeserializeOwned>(key: &str) -> Vec<T> {
    let Some(raw) = storage_get(key) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(key, %err, "discarding unreadable history blob");
            Vec::new()
        }
    }
}

pub fn save_history<T: Serialize>(key: &str, entries: &[T]) -> Result<(), String> {
    let raw = serde_json::to_string(entries).map_err(|e| e.to_string())?;
    storage_set(key, &raw)
}

/// Prepend an entry and drop everything past the cap.
pub fn push_capped<T>(entries: &mut Vec<T>, entry: T) {
    entries.insert(0, entry);
    entries.truncate(HISTORY_CAP);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("audioHistory"), "audioHistory");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
        assert_eq!(sanitize_key("a/b c"), "a_b_c");
    }

    #[test]
    fn test_push_capped_prepends_and_truncates() {
        let mut entries: Vec<u32> = (0..HISTORY_CAP as u32).collect();
        push_capped(&mut entries, 99);
        assert_eq!(entries.len(), HISTORY_CAP);
        assert_eq!(entries[0], 99);
        assert_eq!(*entries.last().unwrap(), HISTORY_CAP as u32 - 2);
    }

    #[test]
    fn test_push_capped_short_list() {
        let mut entries = vec![1u32];
        push_capped(&mut entries, 2);
        assert_eq!(entries, vec![2, 1]);
    }
}
