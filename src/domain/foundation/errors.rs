//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

use crate::ports::{AugmentError, IdentityError, StoreError};

/// Errors that occur while reading seed corpus records.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Turn {turn_num} of dialogue '{dialogue}' is missing field '{field}'")]
    MissingField {
        dialogue: String,
        turn_num: usize,
        field: String,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a missing field validation error for a specific turn.
    pub fn missing_field(
        dialogue: impl Into<String>,
        turn_num: usize,
        field: impl Into<String>,
    ) -> Self {
        ValidationError::MissingField {
            dialogue: dialogue.into(),
            turn_num,
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input format errors
    ValidationFailed,
    MissingField,
    InvalidFormat,

    // Collaborator errors
    AugmentationFailed,
    IdentitySynthesisFailed,

    // Infrastructure errors
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::MissingField => "MISSING_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::AugmentationFailed => "AUGMENTATION_FAILED",
            ErrorCode::IdentitySynthesisFailed => "IDENTITY_SYNTHESIS_FAILED",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns true if the error comes from malformed seed corpus input.
    pub fn is_input_format(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ValidationFailed | ErrorCode::MissingField | ErrorCode::InvalidFormat
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::ValidationFailed,
            ValidationError::MissingField { .. } => ErrorCode::MissingField,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::MissingField { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}

impl From<AugmentError> for DomainError {
    fn from(err: AugmentError) -> Self {
        DomainError::new(ErrorCode::AugmentationFailed, err.to_string())
    }
}

impl From<IdentityError> for DomainError {
    fn from(err: IdentityError) -> Self {
        DomainError::new(ErrorCode::IdentitySynthesisFailed, err.to_string())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Malformed(reason) => DomainError::new(ErrorCode::InvalidFormat, reason),
            other => DomainError::new(ErrorCode::StorageError, other.to_string()),
        }
    }
}
