//! Credential Store
//!
//! The narrow interface the auth flow uses to read and write user records,
//! plus its two implementations.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - CredentialStore trait and StoreError
//! ├── users.rs    - Stored user model
//! ├── postgres.rs - sqlx/Postgres implementation
//! └── memory.rs   - In-process implementation
//! ```
//!
//! # Uniqueness
//!
//! Email uniqueness is enforced by the store at insert time, atomically:
//! the Postgres table carries a unique index and the in-memory store holds
//! its write lock across check and insert. Handlers may still look up the
//! email first to produce the friendly conflict message, but correctness
//! never relies on that read.

use async_trait::async_trait;
use thiserror::Error;

/// Stored user model
pub mod users;

/// Postgres-backed store
pub mod postgres;

/// In-memory store
pub mod memory;

pub use memory::MemoryCredentialStore;
pub use postgres::PgCredentialStore;
pub use users::{NewUser, User};

/// Errors raised by a credential store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email already exists
    #[error("email already registered")]
    DuplicateEmail,

    /// The backing database could not be reached or is not configured
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Query failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persisted user records
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a user by exact (case-sensitive) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user, failing with `DuplicateEmail` if the email is taken
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    /// All users, oldest first
    async fn list(&self) -> Result<Vec<User>, StoreError>;
}
