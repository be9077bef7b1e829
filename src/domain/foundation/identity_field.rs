//! Identity field types and their placeholder tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A named identity-field type, e.g. a tax id (`cpf`) or a license plate (`placa`).
///
/// In delexicalized text each field appears as its placeholder token, the
/// field name wrapped in square brackets: `[cpf]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityField(String);

impl IdentityField {
    pub const CPF: &'static str = "cpf";
    pub const PLACA: &'static str = "placa";
    pub const NOME: &'static str = "nome";
    pub const VALOR: &'static str = "valor";

    /// Creates a field from its name. Surrounding brackets are stripped.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim().trim_start_matches('[').trim_end_matches(']');
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("identity_field"));
        }
        if trimmed.chars().any(|c| c.is_whitespace() || c == '[' || c == ']') {
            return Err(ValidationError::invalid_format(
                "identity_field",
                format!("'{}' is not a valid field name", name),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Tax-id field.
    pub fn cpf() -> Self {
        Self(Self::CPF.to_string())
    }

    /// License-plate field.
    pub fn placa() -> Self {
        Self(Self::PLACA.to_string())
    }

    /// Field name, used as key in slot-values.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Placeholder token as it appears in delexicalized text.
    pub fn token(&self) -> String {
        format!("[{}]", self.0)
    }

    /// Returns true if the text references this field.
    pub fn occurs_in(&self, text: &str) -> bool {
        text.contains(&self.token())
    }
}

impl fmt::Display for IdentityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for IdentityField {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<IdentityField> for String {
    fn from(field: IdentityField) -> Self {
        field.0
    }
}
