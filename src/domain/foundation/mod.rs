//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the dialogue multiplier domain.

mod errors;
mod identity_field;
mod ids;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use identity_field::IdentityField;
pub use ids::DialogueId;
