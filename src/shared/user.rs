/**
 * User Wire Types
 *
 * Request bodies for registration and login, and the public projection of
 * a stored user. The password hash never appears in any of these types.
 *
 * Missing request fields deserialize to empty strings so that "absent" and
 * "empty" are rejected by the same validation path.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::{require_fields, SharedError};

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address, stored exactly as given
    #[serde(default)]
    pub email: String,
    /// Plaintext password, hashed before storage
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_fields(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
        ])
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_fields(&[("email", self.email.as_str()), ("password", self.password.as_str())])
    }
}

/// User fields that are safe to return to clients
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    /// Opaque unique identifier
    pub id: String,
    pub name: String,
    pub email: String,
    /// Omitted from registration responses
    #[serde(rename = "isAdmin", skip_serializing_if = "Option::is_none", default)]
    pub is_admin: Option<bool>,
}
