//! DialogSynthesizer - Rehydrates a sampled skeleton into a concrete dialogue.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

use super::SynthesisState;
use crate::domain::corpus::Turn;
use crate::domain::flow::Skeleton;
use crate::domain::foundation::{DomainError, IdentityField};
use crate::ports::{AugmentError, Augmenter, IdentitySynthesizer};

/// Default seed, shared by sampling and synthesis.
pub const DEFAULT_SEED: u64 = 20211109;

/// Tuning of the synthesizer.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisSettings {
    /// Whether client turns may be paraphrased.
    pub augment: bool,
    /// Chance that an eligible client turn is paraphrased.
    pub augment_probability: f64,
    /// Dialogue at batch position `i` draws from a stream seeded with `base_seed + i`.
    pub base_seed: u64,
    /// Identity fields substituted in display text, in this order.
    pub fields: Vec<IdentityField>,
    /// Tokens the augmenter must leave untouched.
    pub protected_tokens: Vec<String>,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            augment: true,
            augment_probability: 0.5,
            base_seed: DEFAULT_SEED,
            fields: vec![IdentityField::cpf(), IdentityField::placa()],
            protected_tokens: vec!["[cpf]".into(), "[placa]".into(), "[valor]".into()],
        }
    }
}

/// Rewrites skeleton turns: normalization, augmentation, placeholder substitution.
pub struct DialogSynthesizer {
    augmenter: Arc<dyn Augmenter>,
    identities: Arc<dyn IdentitySynthesizer>,
    settings: SynthesisSettings,
    /// Configured protected tokens plus the token of every substituted field.
    protected: Vec<String>,
}

impl DialogSynthesizer {
    pub fn new(
        augmenter: Arc<dyn Augmenter>,
        identities: Arc<dyn IdentitySynthesizer>,
        settings: SynthesisSettings,
    ) -> Self {
        let mut protected = settings.protected_tokens.clone();
        for token in settings.fields.iter().map(IdentityField::token) {
            if !protected.contains(&token) {
                protected.push(token);
            }
        }

        Self {
            augmenter,
            identities,
            settings,
            protected,
        }
    }

    pub fn settings(&self) -> &SynthesisSettings {
        &self.settings
    }

    /// Random stream owned by the dialogue at `position`.
    pub fn dialogue_rng(&self, position: usize) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.settings.base_seed.wrapping_add(position as u64))
    }

    /// Produces the turns of the output dialogue for the skeleton at `position`.
    ///
    /// Re-running with the same position and skeleton gives the same turns.
    ///
    /// # Errors
    /// Any augmenter or identity synthesizer failure aborts the dialogue.
    pub fn synthesize(&self, position: usize, skeleton: &Skeleton) -> Result<Vec<Turn>, DomainError> {
        let mut rng = self.dialogue_rng(position);
        let mut state = SynthesisState::new();

        skeleton
            .turns()
            .iter()
            .enumerate()
            .map(|(num, turn)| self.rewrite_turn(num, turn, &mut state, &mut rng))
            .collect()
    }

    fn rewrite_turn(
        &self,
        num: usize,
        original: &Turn,
        state: &mut SynthesisState,
        rng: &mut ChaCha8Rng,
    ) -> Result<Turn, DomainError> {
        let mut turn = original.clone();
        turn.turn_num = num;

        let is_client = turn.speaker.is_client();
        if is_client {
            turn.utterance_delex = self.normalize_client_text(&original.utterance_delex, rng)?;
        }

        let mut display = turn.utterance_delex.clone();
        for field in &self.settings.fields {
            let token = field.token();
            if display.contains(&token) {
                let value = state.resolve(field, || self.identities.generate(field, &mut *rng))?;
                display = display.replace(&token, value);
            }
        }
        turn.utterance = Some(display);

        if is_client {
            turn.slot_values = Some(state.snapshot());
        }

        Ok(turn)
    }

    fn normalize_client_text(&self, text: &str, rng: &mut ChaCha8Rng) -> Result<String, DomainError> {
        let lowered = text.to_lowercase();

        if self.settings.augment && rng.gen_bool(self.settings.augment_probability) {
            let variants = self.augmenter.augment(&lowered, &self.protected, &mut *rng)?;
            let chosen = variants.choose(rng).ok_or(AugmentError::EmptyVariants)?;
            return Ok(chosen.clone());
        }

        Ok(lowered)
    }
}
