/**
 * Login Handler
 *
 * POST /api/login
 *
 * # Authentication Process
 *
 * 1. Require non-empty email and password
 * 2. Look up the user by email
 * 3. Compare the password against the stored bcrypt hash
 * 4. Issue a one-hour token carrying id, email and admin flag
 * 5. Set it as the `token` cookie and return it in the body
 *
 * Unknown email and wrong password are reported separately
 * (`User does not exist` / `Invalid credentials`), both as 400.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header::SET_COOKIE, HeaderMap},
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::cookies::auth_cookie;
use crate::backend::auth::handlers::types::LoginResponse;
use crate::backend::auth::passwords::verify_password;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::BackendError;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::SharedStore;
use crate::shared::LoginRequest;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, unknown email, or wrong password
/// * `500 Internal Server Error` - Store, hashing or signing failure
///
/// # Security Notes
///
/// - Password comparison is constant-time (via bcrypt)
/// - Passwords and tokens are never logged
/// - No cookie is set on any failure path
pub async fn login(
    State(store): State<SharedStore>,
    State(tokens): State<TokenKeys>,
    State(config): State<Arc<ServerConfig>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(HeaderMap, Json<LoginResponse>), BackendError> {
    let Json(request) = payload?;
    request.validate().map_err(|e| {
        tracing::warn!("Rejected login: {}", e);
        BackendError::from(e)
    })?;

    tracing::info!("Login request for: {}", request.email);

    let user = store.find_by_email(&request.email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", request.email);
        BackendError::not_found("User does not exist")
    })?;

    let valid = verify_password(request.password, user.password_hash.clone())
        .await
        .map_err(|e| {
            tracing::error!("Password verification error: {}", e);
            BackendError::internal()
        })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(BackendError::InvalidCredentials);
    }

    let (token, _claims) = tokens.issue(&user).map_err(|e| {
        tracing::error!("Failed to create token: {}", e);
        BackendError::internal()
    })?;

    let cookie = auth_cookie(&token, tokens.ttl_secs(), config.secure_cookies()).map_err(|e| {
        tracing::error!("Failed to build auth cookie: {}", e);
        BackendError::internal()
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);

    tracing::info!("User logged in successfully: {} ({})", user.name, user.email);

    Ok((
        headers,
        Json(LoginResponse {
            msg: "Login successful".to_string(),
            user: user.to_public(),
            token,
        }),
    ))
}
