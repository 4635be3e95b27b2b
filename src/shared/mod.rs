//! Shared Module
//!
//! This module contains the wire types exchanged between clients and the
//! backend: request bodies, the public user representation and the plain
//! message envelope used for errors and notices.
//!
//! Everything here is plain serde data so client crates can depend on it
//! without pulling in the server stack.

/// Public user representation and auth request bodies
pub mod user;

/// Message envelope
pub mod message;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use message::MessageResponse;
pub use user::{LoginRequest, PublicUser, RegisterRequest};
