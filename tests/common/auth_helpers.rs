//! Authentication test helpers
//!
//! Register and log in through the public API so tests exercise the same
//! code paths as real clients.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use serde_json::{json, Value};

use super::server::TestApp;

/// Credentials of a user created through `/api/register`
pub struct TestUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register a user and return its credentials
pub async fn register_user(app: &TestApp, name: &str, email: &str, password: &str) -> TestUser {
    let response = app
        .server
        .post("/api/register")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "registration failed: {}", response.text());

    let body: Value = response.json();
    TestUser {
        id: body["user"]["id"].as_str().expect("user id").to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Log in and return the token from the response body
pub async fn login_token(app: &TestApp, email: &str, password: &str) -> String {
    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "login failed: {}", response.text());

    let body: Value = response.json();
    body["token"].as_str().expect("token").to_string()
}

/// Authorization header value for a bearer token
pub fn bearer(token: &str) -> (axum::http::HeaderName, HeaderValue) {
    (
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value"),
    )
}
