//! Corpus module - Seed and output dialogue records.
//!
//! # Components
//!
//! - `Turn` - One utterance record, with passthrough of unknown fields
//! - `Speaker` - Initiating (`client`) or responding participant
//! - `AgentRole` - Label field selected by turn-position parity
//! - `Dialogue` / `Dataset` - Dialogue collections and their document

mod dialogue;
mod turn;

pub use dialogue::{Dataset, Dialogue};
pub use turn::{AgentRole, SlotValues, Speaker, Turn};
