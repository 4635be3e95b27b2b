/**
 * Register Handler
 *
 * POST /api/register
 *
 * # Registration Process
 *
 * 1. Require non-empty name, email and password
 * 2. Reject an email that is already registered
 * 3. Hash the password (bcrypt, cost 10)
 * 4. Insert the user; the store's unique constraint settles races
 * 5. Return id, name and email
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};

use crate::backend::auth::handlers::types::RegisterResponse;
use crate::backend::auth::passwords::hash_password;
use crate::backend::error::BackendError;
use crate::backend::server::state::SharedStore;
use crate::backend::store::NewUser;
use crate::shared::RegisterRequest;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing/empty fields, undecodable body, or email already registered
/// * `500 Internal Server Error` - Hashing or store failure
///
/// # Example Request
///
/// ```http
/// POST /api/register HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "A", "email": "a@x.com", "password": "pw1" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "user": { "id": "123e4567-e89b-12d3-a456-426614174000", "name": "A", "email": "a@x.com" } }
/// ```
pub async fn register(
    State(store): State<SharedStore>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, BackendError> {
    let Json(request) = payload?;
    request.validate().map_err(|e| {
        tracing::warn!("Rejected registration: {}", e);
        BackendError::from(e)
    })?;

    tracing::info!("Registration request for: {}", request.email);

    if store.find_by_email(&request.email).await?.is_some() {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(BackendError::conflict("User already exists"));
    }

    let password_hash = hash_password(request.password).await.map_err(|e| {
        tracing::error!("Failed to hash password: {}", e);
        BackendError::internal()
    })?;

    let user = store
        .insert(NewUser {
            name: request.name,
            email: request.email,
            password_hash,
        })
        .await?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok(Json(RegisterResponse {
        user: user.to_registered(),
    }))
}
