/**
 * Authentication Middleware
 *
 * The auth guard for protected routes. It finds the request's token,
 * verifies it, and attaches the decoded claims to the request extensions
 * for downstream handlers.
 *
 * # Token Sources
 *
 * 1. `Authorization: Bearer <token>`
 * 2. The `token` cookie set by login
 *
 * A header that does not start with `Bearer ` counts as absent, so the
 * cookie is still consulted.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::cookies::token_from_cookies;
use crate::backend::auth::sessions::{Claims, TokenKeys};
use crate::backend::error::BackendError;

/// Claims of the authenticated caller, stored in request extensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser(pub Claims);

/// Authentication middleware
///
/// Returns 401 for a missing, invalid or expired token and 500 when
/// verification fails for any other reason.
pub async fn auth_middleware(
    State(tokens): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = extract_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Request without token: {}", request.uri().path());
        BackendError::MissingToken
    })?;

    let claims = tokens.verify(&token)?;

    tracing::debug!("Authenticated request for {}", claims.email);
    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}

/// Bearer token from the Authorization header, else the `token` cookie
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    bearer_token(headers).or_else(|| token_from_cookies(headers))
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Axum extractor for the claims attached by [`auth_middleware`]
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .map(|user| AuthUser(user.0.clone()))
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::MissingToken
            })
    }
}
