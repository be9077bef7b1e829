//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Synthesis Ports
//!
//! - `Augmenter` - Paraphrases a normalized sentence, keeping placeholder tokens
//! - `IdentitySynthesizer` - Produces synthetic values for identity fields
//!
//! ## Storage Ports
//!
//! - `DatasetStore` - Loads the seed corpus and writes the generated corpus

mod augmenter;
mod dataset_store;
mod identity_synthesizer;

pub use augmenter::{AugmentError, Augmenter};
pub use dataset_store::{DatasetStore, StoreError};
pub use identity_synthesizer::{IdentityError, IdentitySynthesizer};
