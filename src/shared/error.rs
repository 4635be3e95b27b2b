//! Shared Error Types
//!
//! Errors that describe a bad request body independent of the server stack.
//!
//! # Error Categories
//!
//! - `SerializationError` - The body could not be decoded as the expected JSON
//! - `ValidationError` - A required field was missing or empty
//!
//! # Usage
//!
//! ```rust
//! use gatehouse::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Please enter all fields");
//! ```
use thiserror::Error;

/// Message used for every missing or empty required field
pub const MISSING_FIELDS: &str = "Please enter all fields";

/// Shared error types for request body handling
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Validation error for a required field that was missing or empty
    pub fn missing(field: impl Into<String>) -> Self {
        Self::validation(field, MISSING_FIELDS)
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Check that every `(field, value)` pair is non-empty.
///
/// Returns the first offending field.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), SharedError> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((field, _)) => Err(SharedError::missing(*field)),
        None => Ok(()),
    }
}
