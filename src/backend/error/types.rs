/**
 * Backend Error Types
 *
 * Every failure a handler can hit is one of these variants. Each variant
 * knows its HTTP status and the message shown to the client; internal
 * details stay in the logs.
 *
 * # Error Categories
 *
 * ## Client input faults (400)
 *
 * - `Validation` - Missing/empty fields or an undecodable body
 * - `Conflict` - Email already registered
 * - `NotFound` - No user with the given email
 * - `InvalidCredentials` - Password did not match
 *
 * ## Auth faults (401)
 *
 * - `MissingToken` - No bearer header and no token cookie
 * - `InvalidToken` - Bad signature, malformed token or bad claims
 * - `ExpiredToken` - Token past its `exp`
 *
 * ## Infrastructure faults (500)
 *
 * - `Internal` - Database, hashing or signing failure
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

pub const INTERNAL_MESSAGE: &str = "Server Error";
pub const AUTH_INTERNAL_MESSAGE: &str = "Server error in authentication";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use gatehouse::backend::error::BackendError;
///
/// let err = BackendError::validation("Please enter all fields");
/// assert_eq!(err.status_code().as_u16(), 400);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    ExpiredToken,

    /// Unexpected failure; `message` is the public text
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Generic internal error with the default public message
    pub fn internal() -> Self {
        Self::Internal {
            message: INTERNAL_MESSAGE.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `Conflict`, `NotFound`, `InvalidCredentials` - 400 Bad Request
    /// - `MissingToken`, `InvalidToken`, `ExpiredToken` - 401 Unauthorized
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. }
            | Self::Conflict { .. }
            | Self::NotFound { .. }
            | Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::MissingToken | Self::InvalidToken | Self::ExpiredToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message rendered into the `{ "msg": ... }` body
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::NotFound { message }
            | Self::Internal { message } => message.clone(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::MissingToken => "No token provided, authorization denied".to_string(),
            Self::InvalidToken => "Invalid token".to_string(),
            Self::ExpiredToken => "Token expired".to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { message, .. } => Self::validation(message),
            SharedError::SerializationError { .. } => Self::validation("Invalid request body"),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::conflict("User already exists"),
            other => {
                tracing::error!("Credential store error: {}", other);
                Self::internal()
            }
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::ExpiredToken,
            TokenError::Invalid(reason) => {
                tracing::warn!("Rejected token: {}", reason);
                Self::InvalidToken
            }
            other => {
                tracing::error!("Token processing failed: {}", other);
                Self::Internal {
                    message: AUTH_INTERNAL_MESSAGE.to_string(),
                }
            }
        }
    }
}
