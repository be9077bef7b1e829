//! Input/output file configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Location of the seed corpus and of the generated document
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Seed corpus document
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Output document; defaults to `out.<file name>` next to the input
    pub output_path: Option<PathBuf>,
}

impl InputConfig {
    /// Get the path the generated document is written to
    pub fn resolved_output_path(&self) -> PathBuf {
        if let Some(path) = &self.output_path {
            return path.clone();
        }
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dialogs.json".to_string());
        self.path.with_file_name(format!("out.{}", name))
    }

    /// Validate input configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("input.path"));
        }
        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            output_path: None,
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("dialogs.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_next_to_input() {
        let config = InputConfig {
            path: PathBuf::from("data/dialogs.json"),
            output_path: None,
        };
        assert_eq!(
            config.resolved_output_path(),
            PathBuf::from("data/out.dialogs.json")
        );
    }

    #[test]
    fn bare_file_name_gets_prefix() {
        assert_eq!(
            InputConfig::default().resolved_output_path(),
            PathBuf::from("out.dialogs.json")
        );
    }

    #[test]
    fn explicit_output_wins() {
        let config = InputConfig {
            path: PathBuf::from("dialogs.json"),
            output_path: Some(PathBuf::from("/tmp/generated.json")),
        };
        assert_eq!(
            config.resolved_output_path(),
            PathBuf::from("/tmp/generated.json")
        );
    }

    #[test]
    fn empty_path_is_rejected() {
        let config = InputConfig {
            path: PathBuf::new(),
            output_path: None,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("input.path"))
        );
    }
}
