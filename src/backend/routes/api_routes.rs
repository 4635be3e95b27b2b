/**
 * API Routes
 *
 * | Method   | Path             | Auth  |
 * |----------|------------------|-------|
 * | POST     | `/api/register`  | none  |
 * | POST     | `/api/login`     | none  |
 * | GET/POST | `/api/logout`    | none  |
 * | GET      | `/api/dashboard` | guard |
 * | GET      | `/api/users`     | none  |
 * | GET      | `/api/jokes`     | none  |
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, logout, register};
use crate::backend::content::{dashboard, list_jokes, list_users};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Protected routes are grouped in their own router so the auth guard runs
/// only for them.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/dashboard", get(dashboard))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router
        // Authentication endpoints
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/logout", get(logout).post(logout))
        // Public reads
        .route("/api/users", get(list_users))
        .route("/api/jokes", get(list_jokes))
        .merge(protected)
}
