//! Dataset Store Port - Interface for reading and writing dataset documents.

use std::path::Path;

use crate::domain::corpus::Dataset;

/// Errors that can occur during dataset storage operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("Malformed dataset: {0}")]
    Malformed(String),

    #[error("Failed to serialize dataset: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for loading the seed corpus and persisting the generated one
pub trait DatasetStore: Send + Sync {
    /// Load a dataset document
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if nothing exists at `path` and
    /// `StoreError::Malformed` if the document lacks required fields
    fn load(&self, path: &Path) -> Result<Dataset, StoreError>;

    /// Persist a dataset document
    ///
    /// The document is written completely or not at all.
    fn save(&self, path: &Path, dataset: &Dataset) -> Result<(), StoreError>;
}
