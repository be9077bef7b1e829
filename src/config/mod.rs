//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DIALOG_MULTIPLIER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use dialog_multiplier::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reading {}", config.input.path.display());
//! ```

mod error;
mod input;
mod logging;
mod sampling;
mod synthesis;

pub use error::{ConfigError, ValidationError};
pub use input::InputConfig;
pub use logging::LoggingConfig;
pub use sampling::SamplingConfig;
pub use synthesis::SynthesisConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Seed corpus and output locations
    #[serde(default)]
    pub input: InputConfig,

    /// Flow sampling (pruning rate, sample size, seed)
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Dialogue synthesis (augmentation, placeholders, ids)
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `DIALOG_MULTIPLIER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DIALOG_MULTIPLIER__SAMPLING__PRUNING_RATE=0.8` -> `sampling.pruning_rate = 0.8`
    /// - `DIALOG_MULTIPLIER__INPUT__PATH=data/dialogs.json` -> `input.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DIALOG_MULTIPLIER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for out-of-range rates and probabilities,
    /// zero widths, strides or intervals, and malformed placeholder names.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.input.validate()?;
        self.sampling.validate()?;
        self.synthesis.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("DIALOG_MULTIPLIER__INPUT__PATH");
        env::remove_var("DIALOG_MULTIPLIER__SAMPLING__PRUNING_RATE");
        env::remove_var("DIALOG_MULTIPLIER__SAMPLING__SAMPLE_SIZE");
        env::remove_var("DIALOG_MULTIPLIER__SYNTHESIS__AUGMENT");
        env::remove_var("DIALOG_MULTIPLIER__SYNTHESIS__PLACEHOLDERS");
        env::remove_var("DIALOG_MULTIPLIER__LOGGING__JSON");
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.input.path, PathBuf::from("dialogs.json"));
        assert_eq!(config.sampling.sample_size, 5000);
        assert!(config.synthesis.augment);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DIALOG_MULTIPLIER__INPUT__PATH", "data/seed.json");
        env::set_var("DIALOG_MULTIPLIER__SAMPLING__PRUNING_RATE", "0.8");
        env::set_var("DIALOG_MULTIPLIER__SAMPLING__SAMPLE_SIZE", "120");
        env::set_var("DIALOG_MULTIPLIER__SYNTHESIS__AUGMENT", "false");
        env::set_var("DIALOG_MULTIPLIER__SYNTHESIS__PLACEHOLDERS", "cpf,nome");
        env::set_var("DIALOG_MULTIPLIER__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.input.path, PathBuf::from("data/seed.json"));
        assert_eq!(config.sampling.pruning_rate, 0.8);
        assert_eq!(config.sampling.sample_size, 120);
        assert!(!config.synthesis.augment);
        assert_eq!(config.synthesis.fields().unwrap().len(), 2);
        assert!(config.logging.json);
    }

    #[test]
    fn test_invalid_rate_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DIALOG_MULTIPLIER__SAMPLING__PRUNING_RATE", "1.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidPruningRate(1.5))
        );
    }
}
