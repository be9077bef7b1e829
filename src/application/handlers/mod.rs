//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod multiply_dataset;

pub use multiply_dataset::{
    MultiplyDatasetCommand, MultiplyDatasetHandler, MultiplyDatasetResult,
};
