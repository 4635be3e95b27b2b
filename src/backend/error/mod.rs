//! Backend Error Module
//!
//! Error taxonomy for the HTTP surface and its conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and conversions from lower layers
//! └── conversion.rs - IntoResponse and extractor rejection handling
//! ```
//!
//! Nothing escapes a handler uncaught: every failure becomes a status code
//! plus a `{ "msg": ... }` body, with no internals in the message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
