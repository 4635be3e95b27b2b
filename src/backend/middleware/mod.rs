//! Middleware Module
//!
//! - **`auth`** - The auth guard for protected routes and the `AuthUser` extractor
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use gatehouse::backend::middleware::auth_middleware;
//! use gatehouse::backend::server::AppState;
//!
//! fn protect(state: AppState, router: Router<AppState>) -> Router<AppState> {
//!     router.route_layer(middleware::from_fn_with_state(state, auth_middleware))
//! }
//! ```

pub mod auth;

pub use auth::{auth_middleware, extract_token, AuthUser, AuthenticatedUser};
