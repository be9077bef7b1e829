//! OutputAssembler - Ids and final ordering of generated dialogues.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::corpus::{Dialogue, Turn};
use crate::domain::foundation::DialogueId;

/// Default distance between consecutive generated ids.
pub const DEFAULT_ID_STRIDE: u64 = 1000;

/// Gives each synthesized dialogue an id from its batch position and shuffles the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputAssembler {
    id_stride: u64,
}

impl Default for OutputAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_ID_STRIDE)
    }
}

impl OutputAssembler {
    pub fn new(id_stride: u64) -> Self {
        Self { id_stride }
    }

    /// Dialogue `i` of `batch` becomes id `i * id_stride`; the result is shuffled.
    pub fn assemble<R: Rng + ?Sized>(&self, batch: Vec<Vec<Turn>>, rng: &mut R) -> Vec<Dialogue> {
        let mut dialogues: Vec<Dialogue> = batch
            .into_iter()
            .enumerate()
            .map(|(position, turns)| {
                Dialogue::new(DialogueId::from_batch_position(position, self.id_stride), turns)
            })
            .collect();
        dialogues.shuffle(rng);
        dialogues
    }
}
