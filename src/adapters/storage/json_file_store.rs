//! JSON File Dataset Store Adapter
//!
//! Reads dataset documents from JSON files and writes them back
//! pretty-printed with object keys in sorted order. Writes go to a sibling
//! temporary file that is renamed over the destination, so a failed run never
//! leaves a partial document behind.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::corpus::Dataset;
use crate::ports::{DatasetStore, StoreError};

/// File-based storage for dataset documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileDatasetStore;

impl JsonFileDatasetStore {
    pub fn new() -> Self {
        Self
    }

    /// Get the temporary path used while writing `path`
    fn staging_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("dataset.json"));
        name.push(".tmp");
        path.with_file_name(name)
    }

    /// Render a dataset as pretty JSON with sorted keys
    pub fn render(dataset: &Dataset) -> Result<String, StoreError> {
        // Going through Value orders every object's keys.
        let value = serde_json::to_value(dataset)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))?;
        serde_json::to_string_pretty(&value)
            .map_err(|e| StoreError::SerializationFailed(e.to_string()))
    }
}

impl DatasetStore for JsonFileDatasetStore {
    fn load(&self, path: &Path) -> Result<Dataset, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path).map_err(|e| StoreError::Io(e.to_string()))?;

        serde_json::from_str(&raw)
            .map_err(|e| StoreError::Malformed(format!("{}: {}", path.display(), e)))
    }

    fn save(&self, path: &Path, dataset: &Dataset) -> Result<(), StoreError> {
        let json = Self::render(dataset)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }

        let staging = Self::staging_path(path);
        fs::write(&staging, json).map_err(|e| StoreError::Io(e.to_string()))?;

        if let Err(e) = fs::rename(&staging, path) {
            let _ = fs::remove_file(&staging);
            return Err(StoreError::Io(e.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        path
    }

    fn seed() -> Value {
        json!({
            "version": 2,
            "dialogs": [{
                "id": "7",
                "source": "call-center",
                "turns": [{
                    "turn-num": 0,
                    "speaker": "client",
                    "utterance_delex": "não consigo pagar",
                    "intent": "pay",
                    "emotion": "neutral"
                }]
            }]
        })
    }

    #[test]
    fn load_reads_dataset() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "dialogs.json", &seed());

        let dataset = JsonFileDatasetStore::new().load(&path).unwrap();
        assert_eq!(dataset.dialogs.len(), 1);
        assert_eq!(dataset.dialogs[0].turns[0].intent.as_deref(), Some("pay"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = JsonFileDatasetStore::new().load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn load_without_dialogs_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.json", &json!({"conversations": []}));
        let result = JsonFileDatasetStore::new().load(&path);
        assert!(matches!(result, Err(StoreError::Malformed(_))));
    }

    #[test]
    fn load_turn_without_speaker_is_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "bad.json",
            &json!({"dialogs": [{"id": 1, "turns": [{"turn-num": 0, "utterance_delex": "oi"}]}]}),
        );
        let result = JsonFileDatasetStore::new().load(&path);
        assert!(matches!(result, Err(StoreError::Malformed(_))));
    }

    #[test]
    fn save_writes_sorted_pretty_json() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileDatasetStore::new();
        let dataset = store.load(&write(&dir, "dialogs.json", &seed())).unwrap();

        let out = dir.path().join("out.dialogs.json");
        store.save(&out, &dataset).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.contains('\n'));
        assert!(text.contains("não consigo pagar"));
        assert!(text.find("\"dialogs\"").unwrap() < text.find("\"version\"").unwrap());
        assert!(text.find("\"speaker\"").unwrap() < text.find("\"turn-num\"").unwrap());
    }

    #[test]
    fn save_keeps_passthrough_and_drops_dialogue_extras() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileDatasetStore::new();
        let dataset = store.load(&write(&dir, "dialogs.json", &seed())).unwrap();

        let out = dir.path().join("out.json");
        store.save(&out, &dataset).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written["version"], json!(2));
        assert_eq!(written["dialogs"][0]["turns"][0]["emotion"], json!("neutral"));
        assert!(written["dialogs"][0].get("source").is_none());
    }

    #[test]
    fn save_leaves_no_staging_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileDatasetStore::new();
        let dataset = store.load(&write(&dir, "dialogs.json", &seed())).unwrap();

        let out = dir.path().join("out.json");
        store.save(&out, &dataset).unwrap();

        assert!(out.exists());
        assert!(!JsonFileDatasetStore::staging_path(&out).exists());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileDatasetStore::new();
        let dataset = store.load(&write(&dir, "dialogs.json", &seed())).unwrap();

        let out = dir.path().join("nested").join("out.json");
        store.save(&out, &dataset).unwrap();
        assert!(out.exists());
    }
}
