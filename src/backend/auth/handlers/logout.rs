/**
 * Logout Handler
 *
 * GET|POST /api/logout
 *
 * Clears the `token` cookie. Tokens already handed out stay valid until
 * they expire; there is no server-side revocation.
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::cookies::clear_auth_cookie;
use crate::backend::server::config::ServerConfig;
use crate::shared::MessageResponse;

pub async fn logout(State(config): State<Arc<ServerConfig>>) -> (HeaderMap, Json<MessageResponse>) {
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, clear_auth_cookie(config.secure_cookies()));

    (headers, Json(MessageResponse::new("Logged out successfully")))
}
