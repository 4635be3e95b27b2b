/**
 * User Model
 *
 * The stored shape of a user record. Records are created on registration
 * and only read afterwards.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::PublicUser;

/// User struct representing a user in the store
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: uuid::Uuid,
    /// Display name
    pub name: String,
    /// User email address (unique, case-sensitive)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Admin flag carried into token claims
    pub is_admin: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// Already hashed
    pub password_hash: String,
}

impl User {
    /// Public projection including the admin flag
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            is_admin: Some(self.is_admin),
        }
    }

    /// Public projection returned by registration (no admin flag)
    pub fn to_registered(&self) -> PublicUser {
        PublicUser {
            is_admin: None,
            ..self.to_public()
        }
    }
}
