//! Authentication Module
//!
//! Registration, password login, token issuance and logout.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── passwords.rs    - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - JWT issuance and verification
//! ├── cookies.rs      - `token` cookie construction and lookup
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password → user stored → public fields returned
//! 2. **Login**: email, password → hash compared → token in cookie and body
//! 3. **Protected routes**: token verified by the auth guard → claims attached
//! 4. **Logout**: cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10) before storage
//! - Tokens are stateless HS256 JWTs that expire after one hour
//! - Passwords and password hashes are never returned in responses

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Auth cookie helpers
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout, register};
pub use sessions::{Claims, TokenKeys};
