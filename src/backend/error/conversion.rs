/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and the auth guard
 * can return it directly. The body is always the message envelope:
 *
 * ```json
 * { "msg": "Invalid credentials" }
 * ```
 *
 * Request body rejections from Axum's `Json` extractor are folded into the
 * same taxonomy so that malformed input never produces a non-JSON body.
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::{MessageResponse, SharedError};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(MessageResponse::new(self.message()))).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        SharedError::serialization(rejection.body_text()).into()
    }
}
