//! IdentitySynthesizer port - Synthetic values for identity fields.

use rand::RngCore;

use crate::domain::foundation::IdentityField;

/// Errors an identity synthesizer can report.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityError {
    #[error("No generator for identity field '{0}'")]
    UnsupportedField(String),

    #[error("Identity generation failed: {0}")]
    GenerationFailed(String),
}

impl IdentityError {
    pub fn unsupported(field: impl Into<String>) -> Self {
        IdentityError::UnsupportedField(field.into())
    }
}

/// Generates synthetic values for named identity fields.
///
/// No uniqueness is required across calls.
pub trait IdentitySynthesizer: Send + Sync {
    /// Generates one value for `field`.
    ///
    /// # Errors
    /// Returns `IdentityError::UnsupportedField` for field types the
    /// implementation has no generator for.
    fn generate(&self, field: &IdentityField, rng: &mut dyn RngCore)
        -> Result<String, IdentityError>;
}
