//! Dialogue synthesis configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::foundation::IdentityField;
use crate::domain::synthesis::{SynthesisSettings, DEFAULT_ID_STRIDE, DEFAULT_SEED};

/// Largest accepted id stride; keeps generated ids within `u64` for any realistic batch.
pub const MAX_ID_STRIDE: u64 = 1_000_000_000;

/// Dialogue synthesis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// Paraphrase client turns
    #[serde(default = "default_true")]
    pub augment: bool,

    #[serde(default = "default_augment_probability")]
    pub augment_probability: f64,

    /// Base seed of the per-dialogue random streams
    #[serde(default = "default_seed")]
    pub base_seed: u64,

    /// Identity fields substituted in display text (comma-separated)
    #[serde(default = "default_placeholders")]
    pub placeholders: String,

    /// Tokens the augmenter must keep verbatim (comma-separated)
    #[serde(default = "default_protected_tokens")]
    pub protected_tokens: String,

    /// Dialogue at batch position `i` gets id `i * id_stride`
    #[serde(default = "default_id_stride")]
    pub id_stride: u64,

    /// JSON synonym table for the augmenter
    pub synonyms_path: Option<PathBuf>,

    /// Log progress every this many dialogues
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

impl SynthesisConfig {
    /// Get the configured identity fields
    pub fn fields(&self) -> Result<Vec<IdentityField>, ValidationError> {
        split_list(&self.placeholders)
            .map(|name| {
                IdentityField::new(name.clone())
                    .map_err(|_| ValidationError::InvalidPlaceholder(name))
            })
            .collect()
    }

    /// Get the protected tokens as a vector
    pub fn protected_token_list(&self) -> Vec<String> {
        split_list(&self.protected_tokens).collect()
    }

    /// Get the synthesizer settings
    pub fn synthesis_settings(&self) -> Result<SynthesisSettings, ValidationError> {
        Ok(SynthesisSettings {
            augment: self.augment,
            augment_probability: self.augment_probability,
            base_seed: self.base_seed,
            fields: self.fields()?,
            protected_tokens: self.protected_token_list(),
        })
    }

    /// Validate synthesis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.augment_probability) {
            return Err(ValidationError::InvalidAugmentProbability(
                self.augment_probability,
            ));
        }
        if self.id_stride == 0 {
            return Err(ValidationError::InvalidIdStride);
        }
        if self.id_stride > MAX_ID_STRIDE {
            return Err(ValidationError::IdStrideTooLarge {
                stride: self.id_stride,
                max: MAX_ID_STRIDE,
            });
        }
        if self.progress_interval == 0 {
            return Err(ValidationError::InvalidProgressInterval("synthesis"));
        }
        if self.placeholders.split(',').any(|p| p.trim().is_empty())
            && !self.placeholders.trim().is_empty()
        {
            return Err(ValidationError::InvalidPlaceholder(self.placeholders.clone()));
        }
        self.fields()?;
        Ok(())
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            augment: default_true(),
            augment_probability: default_augment_probability(),
            base_seed: default_seed(),
            placeholders: default_placeholders(),
            protected_tokens: default_protected_tokens(),
            id_stride: default_id_stride(),
            synonyms_path: None,
            progress_interval: default_progress_interval(),
        }
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn default_true() -> bool {
    true
}

fn default_augment_probability() -> f64 {
    0.5
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_placeholders() -> String {
    "cpf,placa".to_string()
}

fn default_protected_tokens() -> String {
    "[cpf],[placa],[valor]".to_string()
}

fn default_id_stride() -> u64 {
    DEFAULT_ID_STRIDE
}

fn default_progress_interval() -> usize {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_synthesizer_defaults() {
        assert_eq!(
            SynthesisConfig::default().synthesis_settings().unwrap(),
            SynthesisSettings::default()
        );
    }

    #[test]
    fn lists_are_trimmed() {
        let config = SynthesisConfig {
            placeholders: " cpf , [nome] ".to_string(),
            protected_tokens: "[cpf], [nome]".to_string(),
            ..SynthesisConfig::default()
        };
        let names: Vec<String> = config
            .fields()
            .unwrap()
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        assert_eq!(names, vec!["cpf", "nome"]);
        assert_eq!(config.protected_token_list(), vec!["[cpf]", "[nome]"]);
    }

    #[test]
    fn empty_placeholder_list_disables_substitution() {
        let config = SynthesisConfig {
            placeholders: String::new(),
            ..SynthesisConfig::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.fields().unwrap().is_empty());
    }

    #[test]
    fn blank_placeholder_entry_is_rejected() {
        let config = SynthesisConfig {
            placeholders: "cpf,,placa".to_string(),
            ..SynthesisConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPlaceholder(_))
        ));
    }

    #[test]
    fn placeholder_with_space_is_rejected() {
        let config = SynthesisConfig {
            placeholders: "cpf,numero da placa".to_string(),
            ..SynthesisConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidPlaceholder("numero da placa".to_string()))
        );
    }

    #[test]
    fn augment_probability_bounds() {
        let config = SynthesisConfig {
            augment_probability: 1.5,
            ..SynthesisConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidAugmentProbability(1.5))
        );
    }

    #[test]
    fn zero_id_stride_is_rejected() {
        let config = SynthesisConfig {
            id_stride: 0,
            ..SynthesisConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidIdStride));
    }

    #[test]
    fn oversized_id_stride_is_rejected() {
        let config = SynthesisConfig {
            id_stride: u64::MAX,
            ..SynthesisConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::IdStrideTooLarge {
                stride: u64::MAX,
                max: MAX_ID_STRIDE,
            })
        );

        let config = SynthesisConfig {
            id_stride: MAX_ID_STRIDE,
            ..SynthesisConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
