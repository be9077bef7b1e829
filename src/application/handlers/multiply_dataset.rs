//! MultiplyDataset - Command handler that turns a seed corpus into a larger one.
//!
//! Runs the whole pipeline in one pass: load, index, sample, draw, synthesize,
//! assemble, save. The output document is written once, at the end, so a
//! failure at any stage leaves nothing behind.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::flow::{FlowIndex, FlowSampler};
use crate::domain::foundation::DomainError;
use crate::domain::synthesis::{DialogSynthesizer, OutputAssembler};
use crate::ports::DatasetStore;

/// Command to multiply a dataset.
#[derive(Debug, Clone)]
pub struct MultiplyDatasetCommand {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Number of dialogues to generate (fewer if fewer skeletons exist).
    pub sample_size: usize,
    /// Seed of the run random stream.
    pub seed: u64,
    /// Shuffle seed dialogues before indexing.
    pub shuffle_corpus: bool,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplyDatasetResult {
    pub output_path: PathBuf,
    pub seed_dialogues: usize,
    pub distinct_flows: usize,
    pub skeletons: usize,
    pub dialogues_written: usize,
}

/// Handler for multiplying datasets.
pub struct MultiplyDatasetHandler {
    store: Arc<dyn DatasetStore>,
    sampler: FlowSampler,
    synthesizer: DialogSynthesizer,
    assembler: OutputAssembler,
    progress_interval: usize,
}

impl MultiplyDatasetHandler {
    pub fn new(
        store: Arc<dyn DatasetStore>,
        sampler: FlowSampler,
        synthesizer: DialogSynthesizer,
        assembler: OutputAssembler,
    ) -> Self {
        Self {
            store,
            sampler,
            synthesizer,
            assembler,
            progress_interval: 500,
        }
    }

    /// Log synthesis progress every `interval` dialogues. Zero disables it.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn handle(&self, cmd: MultiplyDatasetCommand) -> Result<MultiplyDatasetResult, DomainError> {
        // 1. Load seed corpus
        let dataset = self.store.load(&cmd.input_path)?;
        let seed_dialogues = dataset.dialogs.len();
        info!(
            path = %cmd.input_path.display(),
            dialogues = seed_dialogues,
            "Loaded seed corpus"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(cmd.seed);

        // 2. Index flows
        let index = if cmd.shuffle_corpus {
            let mut dialogues = dataset.dialogs.clone();
            dialogues.shuffle(&mut rng);
            FlowIndex::build(&dialogues)?
        } else {
            FlowIndex::build(&dataset.dialogs)?
        };
        for (label, count) in index.label_frequencies() {
            debug!(label, count, "Label frequency");
        }
        let distinct_flows = index.catalog().len();

        // 3. Sample skeletons and draw the batch
        let skeletons = self.sampler.sample(&index, &mut rng);
        let skeleton_count = skeletons.len();
        let batch = FlowSampler::draw_batch(skeletons, cmd.sample_size, &mut rng);

        // 4. Synthesize each dialogue from its own stream
        let mut synthesized = Vec::with_capacity(batch.len());
        for (position, skeleton) in batch.iter().enumerate() {
            synthesized.push(self.synthesizer.synthesize(position, skeleton)?);
            let done = position + 1;
            if self.progress_interval > 0 && done % self.progress_interval == 0 {
                info!("Synthesized {} dialogues...", done);
            }
        }

        // 5. Assign ids, shuffle and persist
        let dialogues = self.assembler.assemble(synthesized, &mut rng);
        let dialogues_written = dialogues.len();
        self.store
            .save(&cmd.output_path, &dataset.with_dialogs(dialogues))?;

        info!(
            path = %cmd.output_path.display(),
            flows = distinct_flows,
            skeletons = skeleton_count,
            dialogues = dialogues_written,
            "Wrote multiplied dataset"
        );

        Ok(MultiplyDatasetResult {
            output_path: cmd.output_path,
            seed_dialogues,
            distinct_flows,
            skeletons: skeleton_count,
            dialogues_written,
        })
    }
}
