//! Backend Module
//!
//! All server-side code: the Axum router, the auth flow and its
//! collaborators.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, database handle, application state, startup
//! - **`routes`** - Route configuration and router assembly
//! - **`store`** - Credential store trait with Postgres and in-memory backends
//! - **`auth`** - Password hashing, JWT sessions, cookies, auth handlers
//! - **`middleware`** - The auth guard for protected routes
//! - **`content`** - Dashboard, users listing, jokes
//! - **`error`** - Backend error taxonomy
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── store/          - Credential store
//! ├── auth/           - Authentication
//! ├── middleware/     - Auth guard
//! ├── content/        - Read routes
//! └── error/          - Error types
//! ```
//!
//! # Control Flow
//!
//! Register and login call the store, the password hasher and (for login)
//! the token issuer. The auth guard runs ahead of protected handlers and
//! only needs the token keys.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Credential store
pub mod store;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Non-auth read routes
pub mod content;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
