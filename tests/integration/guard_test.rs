//! Auth guard integration tests
//!
//! GET /api/dashboard with missing, tampered, expired and valid tokens.

use axum::http::{header::COOKIE, HeaderValue, StatusCode};
use gatehouse::backend::auth::sessions::{now_secs, TokenKeys, TOKEN_TTL_SECS};
use gatehouse::backend::store::CredentialStore;
use serde_json::Value;

use crate::common::{bearer, login_token, register_user, TestApp};

#[tokio::test]
async fn test_valid_bearer_token_is_accepted() {
    let app = TestApp::new();
    register_user(&app, "A", "a@x.com", "pw1").await;
    let token = login_token(&app, "a@x.com", "pw1").await;

    let (name, value) = bearer(&token);
    let response = app.server.get("/api/dashboard").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    crate::assert_msg!(
        response.json::<Value>(),
        "Welcome a@x.com, you are in the dashboard 🚀"
    );
}

#[tokio::test]
async fn test_token_cookie_is_accepted() {
    let app = TestApp::new();
    register_user(&app, "A", "a@x.com", "pw1").await;
    let token = login_token(&app, "a@x.com", "pw1").await;

    let cookie = HeaderValue::from_str(&format!("token={}", token)).unwrap();
    let response = app.server.get("/api/dashboard").add_header(COOKIE, cookie).await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let app = TestApp::new();

    let response = app.server.get("/api/dashboard").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    crate::assert_msg!(response.json::<Value>(), "No token provided, authorization denied");
}

#[tokio::test]
async fn test_non_bearer_scheme_is_missing_token() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/dashboard")
        .add_header(
            axum::http::header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwdw=="),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    crate::assert_msg!(response.json::<Value>(), "No token provided, authorization denied");
}

#[tokio::test]
async fn test_tampered_signature_is_invalid() {
    let app = TestApp::new();
    register_user(&app, "A", "a@x.com", "pw1").await;
    let token = login_token(&app, "a@x.com", "pw1").await;

    let signature_start = token.rfind('.').unwrap() + 1;
    let mut bytes = token.into_bytes();
    bytes[signature_start] = if bytes[signature_start] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(bytes).unwrap();

    let (name, value) = bearer(&tampered);
    let response = app.server.get("/api/dashboard").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    crate::assert_msg!(response.json::<Value>(), "Invalid token");
}

#[tokio::test]
async fn test_token_from_other_secret_is_invalid() {
    let app = TestApp::new();
    let user = register_user(&app, "A", "a@x.com", "pw1").await;
    let stored = app.store.find_by_email(&user.email).await.unwrap().unwrap();

    let (token, _) = TokenKeys::new("some-other-secret").issue(&stored).unwrap();

    let (name, value) = bearer(&token);
    let response = app.server.get("/api/dashboard").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    crate::assert_msg!(response.json::<Value>(), "Invalid token");
}

#[tokio::test]
async fn test_garbage_token_is_invalid() {
    let app = TestApp::new();

    let (name, value) = bearer("not-a-jwt");
    let response = app.server.get("/api/dashboard").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    crate::assert_msg!(response.json::<Value>(), "Invalid token");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::new();
    let user = register_user(&app, "A", "a@x.com", "pw1").await;
    let stored = app.store.find_by_email(&user.email).await.unwrap().unwrap();

    // Issued just over an hour ago.
    let issued_at = now_secs().unwrap() - TOKEN_TTL_SECS - 1;
    let (token, _) = app.tokens.issue_at(&stored, issued_at).unwrap();

    let (name, value) = bearer(&token);
    let response = app.server.get("/api/dashboard").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    crate::assert_msg!(response.json::<Value>(), "Token expired");
}
