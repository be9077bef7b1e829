//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Pruning rate must be in (0, 1], got {0}")]
    InvalidPruningRate(f64),

    #[error("Augment probability must be in [0, 1], got {0}")]
    InvalidAugmentProbability(f64),

    #[error("Branch width must be at least 1")]
    InvalidBranchWidth,

    #[error("Id stride must be at least 1")]
    InvalidIdStride,

    #[error("Id stride must be at most {max}, got {stride}")]
    IdStrideTooLarge { stride: u64, max: u64 },

    #[error("Progress interval for {0} must be at least 1")]
    InvalidProgressInterval(&'static str),

    #[error("Invalid placeholder name '{0}'")]
    InvalidPlaceholder(String),
}
