//! Augmenter port - Paraphrase generation for client utterances.

use rand::RngCore;

/// Errors an augmenter can report.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AugmentError {
    #[error("Augmenter returned no variants")]
    EmptyVariants,

    #[error("Protected token '{token}' was altered in variant '{variant}'")]
    TokenAltered { token: String, variant: String },

    #[error("Augmenter unavailable: {0}")]
    Unavailable(String),
}

/// Produces paraphrases of a normalized sentence.
pub trait Augmenter: Send + Sync {
    /// Returns paraphrase variants of `sentence`.
    ///
    /// Every token in `protected` that occurs in `sentence` must occur
    /// verbatim in each variant. Implementations draw any randomness from
    /// `rng` so callers control reproducibility.
    ///
    /// # Errors
    /// Returns `AugmentError` if no variant could be produced. An empty list
    /// is never a valid success value.
    fn augment(
        &self,
        sentence: &str,
        protected: &[String],
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, AugmentError>;
}
