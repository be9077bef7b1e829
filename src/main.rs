//! Dialog Multiplier CLI
//!
//! Reads a seed corpus, multiplies it and writes `out.<file name>` next to it.
//!
//! Usage:
//!   dialog-multiplier --filename dialogs.json --rate 0.91 --sample-size 5000
//!
//! Settings not given on the command line come from `DIALOG_MULTIPLIER__*`
//! environment variables (or a `.env` file), then from built-in defaults.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dialog_multiplier::adapters::{
    BrazilianIdentitySynthesizer, EdaAugmenter, EdaSettings, JsonFileDatasetStore, SynonymTable,
};
use dialog_multiplier::application::{MultiplyDatasetCommand, MultiplyDatasetHandler};
use dialog_multiplier::config::{AppConfig, LoggingConfig};
use dialog_multiplier::domain::flow::FlowSampler;
use dialog_multiplier::domain::synthesis::{DialogSynthesizer, OutputAssembler};

/// Multiply a labeled dialogue dataset by recombining its conversation flows
#[derive(Parser, Debug)]
#[command(name = "dialog-multiplier")]
#[command(version, about)]
struct Args {
    /// Path to dialogs dataset
    #[arg(long)]
    filename: Option<PathBuf>,

    /// Pruning probability in the tree of possible dialogues
    #[arg(long)]
    rate: Option<f64>,

    /// Number of dialogues to generate
    #[arg(long)]
    sample_size: Option<usize>,

    /// Do not paraphrase client turns
    #[arg(long)]
    no_augment: bool,

    /// Seed of the run random stream (corpus shuffle, sampling, batch draw, output shuffle)
    #[arg(long)]
    seed: Option<u64>,

    /// Base seed of the per-dialogue synthesis streams (augmentation, identities)
    #[arg(long)]
    base_seed: Option<u64>,

    /// Output path (default: out.<file name> next to the input)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// JSON synonym table for the augmenter
    #[arg(long)]
    synonyms: Option<PathBuf>,
}

impl Args {
    fn apply(self, config: &mut AppConfig) {
        if let Some(filename) = self.filename {
            config.input.path = filename;
        }
        if let Some(output) = self.output {
            config.input.output_path = Some(output);
        }
        if let Some(rate) = self.rate {
            config.sampling.pruning_rate = rate;
        }
        if let Some(sample_size) = self.sample_size {
            config.sampling.sample_size = sample_size;
        }
        if let Some(seed) = self.seed {
            config.sampling.seed = seed;
        }
        if let Some(base_seed) = self.base_seed {
            config.synthesis.base_seed = base_seed;
        }
        if self.no_augment {
            config.synthesis.augment = false;
        }
        if let Some(synonyms) = self.synonyms {
            config.synthesis.synonyms_path = Some(synonyms);
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.log_level));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging);

    let synonyms = match &config.synthesis.synonyms_path {
        Some(path) => SynonymTable::load(path)
            .with_context(|| format!("Failed to load synonyms from {}", path.display()))?,
        None => SynonymTable::builtin().clone(),
    };

    let synthesizer = DialogSynthesizer::new(
        Arc::new(EdaAugmenter::new(EdaSettings::default(), synonyms)),
        Arc::new(BrazilianIdentitySynthesizer::new()),
        config.synthesis.synthesis_settings()?,
    );

    let handler = MultiplyDatasetHandler::new(
        Arc::new(JsonFileDatasetStore::new()),
        FlowSampler::new(config.sampling.sampler_settings()),
        synthesizer,
        OutputAssembler::new(config.synthesis.id_stride),
    )
    .with_progress_interval(config.synthesis.progress_interval);

    let result = handler.handle(MultiplyDatasetCommand {
        input_path: config.input.path.clone(),
        output_path: config.input.resolved_output_path(),
        sample_size: config.sampling.sample_size,
        seed: config.sampling.seed,
        shuffle_corpus: config.sampling.shuffle_corpus,
    })?;

    tracing::info!(
        seed_dialogues = result.seed_dialogues,
        generated = result.dialogues_written,
        "Done: {}",
        result.output_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(argv: &[&str]) -> AppConfig {
        let mut config = AppConfig::default();
        Args::try_parse_from(argv).unwrap().apply(&mut config);
        config
    }

    #[test]
    fn seed_flags_set_separate_streams() {
        let config = applied(&["dialog-multiplier", "--seed", "7", "--base-seed", "42"]);
        assert_eq!(config.sampling.seed, 7);
        assert_eq!(config.synthesis.base_seed, 42);
    }

    #[test]
    fn run_seed_alone_keeps_synthesis_base_seed() {
        let defaults = AppConfig::default();
        let config = applied(&["dialog-multiplier", "--seed", "7"]);
        assert_eq!(config.sampling.seed, 7);
        assert_eq!(config.synthesis.base_seed, defaults.synthesis.base_seed);
    }
}
