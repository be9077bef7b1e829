//! Synthesis Module - Turns sampled skeletons into output dialogues.
//!
//! # Components
//!
//! - `SynthesisState` - Per-dialogue identity values, set once and read many times
//! - `DialogSynthesizer` - Normalization, augmentation and placeholder substitution
//! - `OutputAssembler` - Batch ids and final shuffle
//!
//! Each dialogue draws from its own random stream, seeded from the base seed
//! and its batch position, so one dialogue can be regenerated in isolation.

mod assembler;
mod state;
mod synthesizer;

pub use assembler::{OutputAssembler, DEFAULT_ID_STRIDE};
pub use state::SynthesisState;
pub use synthesizer::{DialogSynthesizer, SynthesisSettings, DEFAULT_SEED};
