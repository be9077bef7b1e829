//! Storage Adapters
//!
//! Implementations of the DatasetStore port for reading the seed corpus and
//! writing the generated one.
//!
//! ## Available Adapters
//!
//! - **JsonFileDatasetStore** - JSON documents on disk
//! - **InMemoryDatasetStore** - Documents kept in memory (testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemoryDatasetStore, JsonFileDatasetStore};
//!
//! // Production: file-based storage
//! let dataset = JsonFileDatasetStore::new().load(Path::new("dialogs.json"))?;
//!
//! // Testing: in-memory storage
//! let store = InMemoryDatasetStore::with_document("dialogs.json", dataset);
//! ```

mod in_memory_store;
mod json_file_store;

pub use in_memory_store::InMemoryDatasetStore;
pub use json_file_store::JsonFileDatasetStore;
