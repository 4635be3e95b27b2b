/**
 * Users Listing
 *
 * GET /api/users returns every stored user as its public projection.
 * Password hashes are never included.
 */

use axum::{extract::State, response::Json};

use crate::backend::error::BackendError;
use crate::backend::server::state::SharedStore;
use crate::shared::PublicUser;

pub async fn list_users(State(store): State<SharedStore>) -> Result<Json<Vec<PublicUser>>, BackendError> {
    let users = store.list().await.map_err(|e| {
        tracing::error!("Error fetching users: {}", e);
        BackendError::internal()
    })?;

    Ok(Json(users.iter().map(|user| user.to_public()).collect()))
}
