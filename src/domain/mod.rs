//! Domain layer containing the dialogue multiplication logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, identity fields, errors)
//! - `corpus` - Turn, dialogue and dataset records
//! - `flow` - Flow catalog, turn pools and the pruned breadth-first sampler
//! - `synthesis` - Per-dialogue rewrite and output assembly

pub mod corpus;
pub mod flow;
pub mod foundation;
pub mod synthesis;
