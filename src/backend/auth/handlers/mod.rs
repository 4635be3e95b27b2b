//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Response types
//! ├── register.rs  - POST /api/register
//! ├── login.rs     - POST /api/login
//! └── logout.rs    - GET|POST /api/logout
//! ```

/// Response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

pub use types::{LoginResponse, RegisterResponse};

pub use login::login;
pub use logout::logout;
pub use register::register;
