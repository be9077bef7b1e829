//! Per-dialogue synthesis state.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::corpus::SlotValues;
use crate::domain::foundation::IdentityField;

/// Synthetic value chosen for each identity field within one dialogue.
///
/// A value is generated the first time its field is met and reused for the
/// rest of the dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisState {
    values: BTreeMap<String, String>,
}

impl SynthesisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `field`, calling `generate` only if none is set yet.
    ///
    /// # Errors
    /// Propagates the generator's error; the state is left unchanged.
    pub fn resolve<E, F>(&mut self, field: &IdentityField, generate: F) -> Result<&str, E>
    where
        F: FnOnce() -> Result<String, E>,
    {
        if !self.values.contains_key(field.name()) {
            let value = generate()?;
            self.values.insert(field.name().to_string(), value);
        }
        Ok(self.values[field.name()].as_str())
    }

    /// Copy of the current values, shaped as a turn's `slot-values`.
    pub fn snapshot(&self) -> SlotValues {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
