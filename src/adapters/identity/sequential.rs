//! Sequential Identity Synthesizer for testing.
//!
//! Returns `{field}-{n}` where `n` counts calls per field, starting at 1.
//! Clones share their counters and call history.

use rand::RngCore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::foundation::IdentityField;
use crate::ports::{IdentityError, IdentitySynthesizer};

#[derive(Debug, Default)]
struct SequentialState {
    counters: HashMap<String, usize>,
    calls: Vec<String>,
}

/// Deterministic identity synthesizer.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdentitySynthesizer {
    state: Arc<Mutex<SequentialState>>,
    error: Option<IdentityError>,
}

impl SequentialIdentitySynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails every call with `error`.
    pub fn failing_with(mut self, error: IdentityError) -> Self {
        self.error = Some(error);
        self
    }

    /// Field names requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }
}

impl IdentitySynthesizer for SequentialIdentitySynthesizer {
    fn generate(
        &self,
        field: &IdentityField,
        _rng: &mut dyn RngCore,
    ) -> Result<String, IdentityError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(field.name().to_string());

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let counter = state.counters.entry(field.name().to_string()).or_insert(0);
        *counter += 1;
        Ok(format!("{}-{}", field.name(), counter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn counts_per_field() {
        let synth = SequentialIdentitySynthesizer::new();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert_eq!(synth.generate(&IdentityField::cpf(), &mut rng).unwrap(), "cpf-1");
        assert_eq!(synth.generate(&IdentityField::placa(), &mut rng).unwrap(), "placa-1");
        assert_eq!(synth.generate(&IdentityField::cpf(), &mut rng).unwrap(), "cpf-2");
        assert_eq!(synth.calls(), vec!["cpf", "placa", "cpf"]);
    }

    #[test]
    fn clones_share_state() {
        let synth = SequentialIdentitySynthesizer::new();
        let clone = synth.clone();
        clone
            .generate(&IdentityField::cpf(), &mut ChaCha8Rng::seed_from_u64(0))
            .unwrap();
        assert_eq!(synth.calls().len(), 1);
    }

    #[test]
    fn failing_synthesizer_still_records_call() {
        let synth = SequentialIdentitySynthesizer::new()
            .failing_with(IdentityError::unsupported("cpf"));
        let result = synth.generate(&IdentityField::cpf(), &mut ChaCha8Rng::seed_from_u64(0));
        assert!(matches!(result, Err(IdentityError::UnsupportedField(_))));
        assert_eq!(synth.calls(), vec!["cpf"]);
    }
}
