//! Augmentation Adapters
//!
//! Implementations of the Augmenter port used to paraphrase client turns.
//!
//! ## Available Adapters
//!
//! - **EdaAugmenter** - Word-level EDA operations driven by a synonym table
//! - **MockAugmenter** - Fixed variants and call tracking (testing)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::augmentation::{EdaAugmenter, EdaSettings, SynonymTable};
//!
//! let synonyms = SynonymTable::load(Path::new("synonyms.json"))?;
//! let augmenter = EdaAugmenter::new(EdaSettings::default(), synonyms);
//! ```

mod eda_augmenter;
mod mock_augmenter;
mod synonyms;

pub use eda_augmenter::{EdaAugmenter, EdaSettings};
pub use mock_augmenter::MockAugmenter;
pub use synonyms::SynonymTable;
