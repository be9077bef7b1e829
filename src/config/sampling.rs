//! Flow sampling configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::flow::{SamplerSettings, DEFAULT_BRANCH_WIDTH, DEFAULT_MIN_DEPTH};
use crate::domain::synthesis::DEFAULT_SEED;

/// Flow sampling configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SamplingConfig {
    /// Pruning rate in (0, 1]; higher values keep fewer branches alive
    #[serde(default = "default_pruning_rate")]
    pub pruning_rate: f64,

    /// Number of dialogues drawn from the sampled skeletons
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// Seed of the run random stream
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_branch_width")]
    pub branch_width: usize,

    #[serde(default = "default_min_depth")]
    pub min_depth: usize,

    /// Shuffle seed dialogues before indexing
    #[serde(default = "default_true")]
    pub shuffle_corpus: bool,

    /// Log progress every this many skeletons
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl SamplingConfig {
    /// Get the sampler settings
    pub fn sampler_settings(&self) -> SamplerSettings {
        SamplerSettings {
            pruning_rate: self.pruning_rate,
            branch_width: self.branch_width,
            min_depth: self.min_depth,
            progress_interval: self.progress_interval,
        }
    }

    /// Validate sampling configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.pruning_rate > 0.0 && self.pruning_rate <= 1.0) {
            return Err(ValidationError::InvalidPruningRate(self.pruning_rate));
        }
        if self.branch_width == 0 {
            return Err(ValidationError::InvalidBranchWidth);
        }
        if self.progress_interval == 0 {
            return Err(ValidationError::InvalidProgressInterval("sampling"));
        }
        Ok(())
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            pruning_rate: default_pruning_rate(),
            sample_size: default_sample_size(),
            seed: default_seed(),
            branch_width: default_branch_width(),
            min_depth: default_min_depth(),
            shuffle_corpus: default_true(),
            progress_interval: default_progress_interval(),
        }
    }
}

fn default_pruning_rate() -> f64 {
    0.91
}

fn default_sample_size() -> usize {
    5000
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_branch_width() -> usize {
    DEFAULT_BRANCH_WIDTH
}

fn default_min_depth() -> usize {
    DEFAULT_MIN_DEPTH
}

fn default_true() -> bool {
    true
}

fn default_progress_interval() -> usize {
    1000
}
