//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to its collaborators:
//! - `augmentation` - Paraphrasers for client turns (EDA, mock)
//! - `identity` - Synthetic identity values (Brazilian formats, sequential)
//! - `storage` - Dataset documents (JSON files, in-memory)

pub mod augmentation;
pub mod identity;
pub mod storage;

pub use augmentation::{EdaAugmenter, EdaSettings, MockAugmenter, SynonymTable};
pub use identity::{BrazilianIdentitySynthesizer, SequentialIdentitySynthesizer};
pub use storage::{InMemoryDatasetStore, JsonFileDatasetStore};
