use axum::response::Json;

use crate::backend::middleware::AuthUser;
use crate::shared::MessageResponse;

/// Greets the authenticated caller by email
pub async fn dashboard(AuthUser(claims): AuthUser) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!(
        "Welcome {}, you are in the dashboard 🚀",
        claims.email
    )))
}
