//! Gatehouse - Main Library
//!
//! Gatehouse is a small authenticated JSON backend built on Axum. It covers
//! user registration, password login with JWT issuance, a bearer/cookie auth
//! guard for protected routes, and a couple of public read routes.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared with clients
//!   - Public user shape, request bodies, message envelopes
//!   - Field validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum router, CORS and tracing layers
//!   - Credential store (Postgres or in-memory)
//!   - Password hashing, token issuance and verification
//!   - Auth guard middleware and request handlers
//!
//! # Usage
//!
//! ```rust,no_run
//! use gatehouse::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let (app, _state) = create_app(config).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! Handlers share nothing mutable except the credential store, which brings
//! its own concurrency control (a Postgres pool, or a `RwLock` for the
//! in-memory store). Token verification is a pure function of the token,
//! the secret and the current time.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
