//! Flow Module - Flow enumeration and sampling.
//!
//! # Components
//!
//! - `Flow` / `FlowCatalog` - Label sequences of seed dialogues, deduplicated
//! - `TurnPools` - Original turns per `(role, label)`, insertion-ordered
//! - `FlowIndex` - Builds catalog and pools from a seed corpus
//! - `FlowSampler` - Breadth-first, probabilistically pruned expansion into skeletons
//!
//! # Design Philosophy
//!
//! Indexing and sampling never touch synthesis. Randomness is passed in as an
//! explicit `Rng`, so a seeded stream reproduces the same skeletons.

mod catalog;
mod index;
mod pools;
mod sampler;

pub use catalog::{Flow, FlowCatalog};
pub use index::FlowIndex;
pub use pools::{PoolKey, TurnPools};
pub use sampler::{
    FlowSampler, SamplerSettings, Skeleton, DEFAULT_BRANCH_WIDTH, DEFAULT_MIN_DEPTH,
};
