//! Mock Augmenter for testing.
//!
//! Provides a configurable implementation of the Augmenter port so synthesis
//! can be tested without a real paraphraser.
//!
//! # Features
//!
//! - Fixed variant lists
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let augmenter = MockAugmenter::new().with_variants(vec!["quero o [cpf]"]);
//! let variants = augmenter.augment("meu cpf é [cpf]", &protected, &mut rng)?;
//! assert_eq!(variants, vec!["quero o [cpf]"]);
//! ```

use rand::RngCore;
use std::sync::{Arc, Mutex};

use crate::ports::{AugmentError, Augmenter};

/// Mock augmenter for testing.
///
/// Echoes the input sentence as its only variant unless configured otherwise.
#[derive(Debug, Clone, Default)]
pub struct MockAugmenter {
    /// Fixed variants returned for every sentence.
    variants: Option<Vec<String>>,
    /// Error returned for every call.
    error: Option<AugmentError>,
    /// Call history: sentence and protected tokens.
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl MockAugmenter {
    /// Creates a mock that echoes its input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns these variants for every sentence.
    pub fn with_variants<S: Into<String>>(mut self, variants: impl IntoIterator<Item = S>) -> Self {
        self.variants = Some(variants.into_iter().map(Into::into).collect());
        self
    }

    /// Fails every call with `error`.
    pub fn failing(mut self, error: AugmentError) -> Self {
        self.error = Some(error);
        self
    }

    /// Sentences received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(sentence, _)| sentence.clone())
            .collect()
    }

    /// Protected tokens passed with the most recent call.
    pub fn last_protected(&self) -> Option<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|(_, protected)| protected.clone())
    }
}

impl Augmenter for MockAugmenter {
    fn augment(
        &self,
        sentence: &str,
        protected: &[String],
        _rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, AugmentError> {
        self.calls
            .lock()
            .unwrap()
            .push((sentence.to_string(), protected.to_vec()));

        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        Ok(self
            .variants
            .clone()
            .unwrap_or_else(|| vec![sentence.to_string()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn echoes_input_by_default() {
        let augmenter = MockAugmenter::new();
        let variants = augmenter
            .augment("oi", &[], &mut ChaCha8Rng::seed_from_u64(0))
            .unwrap();
        assert_eq!(variants, vec!["oi".to_string()]);
    }

    #[test]
    fn records_calls_across_clones() {
        let augmenter = MockAugmenter::new();
        let clone = augmenter.clone();
        clone
            .augment("a", &["[cpf]".to_string()], &mut ChaCha8Rng::seed_from_u64(0))
            .unwrap();

        assert_eq!(augmenter.calls(), vec!["a".to_string()]);
        assert_eq!(augmenter.last_protected(), Some(vec!["[cpf]".to_string()]));
    }

    #[test]
    fn failing_mock_returns_error() {
        let augmenter = MockAugmenter::new().failing(AugmentError::EmptyVariants);
        let result = augmenter.augment("a", &[], &mut ChaCha8Rng::seed_from_u64(0));
        assert!(matches!(result, Err(AugmentError::EmptyVariants)));
    }
}
