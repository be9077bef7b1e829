//! In-Memory Dataset Store Adapter
//!
//! Keeps dataset documents in memory, keyed by path.
//! Useful for testing the pipeline without touching the filesystem.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::domain::corpus::Dataset;
use crate::ports::{DatasetStore, StoreError};

/// In-memory storage for dataset documents
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatasetStore {
    documents: Arc<RwLock<HashMap<PathBuf, Dataset>>>,
    fail_saves: bool,
}

impl InMemoryDatasetStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `dataset` at `path`
    pub fn with_document(path: impl Into<PathBuf>, dataset: Dataset) -> Self {
        let store = Self::new();
        store
            .documents
            .write()
            .unwrap()
            .insert(path.into(), dataset);
        store
    }

    /// Make every save fail with an IO error
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Get a stored document
    pub fn get(&self, path: &Path) -> Option<Dataset> {
        self.documents.read().unwrap().get(path).cloned()
    }

    /// Get the number of stored documents
    pub fn document_count(&self) -> usize {
        self.documents.read().unwrap().len()
    }
}

impl DatasetStore for InMemoryDatasetStore {
    fn load(&self, path: &Path) -> Result<Dataset, StoreError> {
        self.get(path)
            .ok_or_else(|| StoreError::NotFound(path.display().to_string()))
    }

    fn save(&self, path: &Path, dataset: &Dataset) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Io("disk full".to_string()));
        }
        self.documents
            .write()
            .unwrap()
            .insert(path.to_path_buf(), dataset.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn empty() -> Dataset {
        Dataset {
            dialogs: vec![],
            extra: Map::new(),
        }
    }

    #[test]
    fn load_returns_stored_document() {
        let store = InMemoryDatasetStore::with_document("in.json", empty());
        assert!(store.load(Path::new("in.json")).is_ok());
        assert!(matches!(
            store.load(Path::new("other.json")),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn save_is_visible_through_clones() {
        let store = InMemoryDatasetStore::new();
        let clone = store.clone();
        clone.save(Path::new("out.json"), &empty()).unwrap();
        assert_eq!(store.document_count(), 1);
        assert!(store.get(Path::new("out.json")).is_some());
    }

    #[test]
    fn failing_saves_store_nothing() {
        let store = InMemoryDatasetStore::new().failing_saves();
        assert!(store.save(Path::new("out.json"), &empty()).is_err());
        assert_eq!(store.document_count(), 0);
    }
}
