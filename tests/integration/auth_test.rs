//! Authentication API integration tests
//!
//! Register, login and logout through the HTTP surface.

use axum::http::{header::SET_COOKIE, StatusCode};
use gatehouse::backend::store::CredentialStore;
use serde_json::{json, Value};

use crate::common::{login_token, register_user, TestApp};

#[tokio::test]
async fn test_register_returns_public_fields_only() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/register")
        .json(&json!({ "name": "A", "email": "a@x.com", "password": "pw1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["user"]["name"], "A");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["user"]["id"].is_string());
    assert!(body["user"].get("password").is_none());
    assert!(body.get("token").is_none());
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_register_then_login_yields_matching_claims() {
    let app = TestApp::new();
    let user = register_user(&app, "A", "a@x.com", "pw1").await;

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "a@x.com", "password": "pw1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Login successful");
    assert_eq!(body["user"]["id"], user.id.as_str());
    assert_eq!(body["user"]["isAdmin"], false);

    let token = body["token"].as_str().unwrap();
    let claims = app.tokens.verify(token).unwrap();
    assert_eq!(claims.id, user.id);
    assert_eq!(claims.email, "a@x.com");
    assert!(!claims.is_admin);
}

#[tokio::test]
async fn test_login_sets_strict_http_only_cookie() {
    let app = TestApp::new();
    register_user(&app, "A", "a@x.com", "pw1").await;

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "a@x.com", "password": "pw1" }))
        .await;

    let body: Value = response.json();
    let token = body["token"].as_str().unwrap();
    let cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();

    crate::assert_contains!(cookie, &format!("token={};", token));
    crate::assert_contains!(cookie, "HttpOnly");
    crate::assert_contains!(cookie, "SameSite=Strict");
    crate::assert_contains!(cookie, "Max-Age=3600");
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_production_cookie_is_secure() {
    let mut config = gatehouse::backend::server::ServerConfig::development(crate::common::TEST_SECRET);
    config.environment = gatehouse::backend::server::config::Environment::Production;
    let app = TestApp::with_config(config);
    register_user(&app, "A", "a@x.com", "pw1").await;

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "a@x.com", "password": "pw1" }))
        .await;

    let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap().to_string();
    crate::assert_contains!(cookie, "; Secure");
}

#[tokio::test]
async fn test_register_duplicate_email_is_conflict() {
    let app = TestApp::new();
    register_user(&app, "A", "a@x.com", "pw1").await;

    let response = app
        .server
        .post("/api/register")
        .json(&json!({ "name": "B", "email": "a@x.com", "password": "pw2" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_msg!(response.json::<Value>(), "User already exists");
    assert_eq!(app.store.len().await, 1);

    // The first registration is untouched.
    let stored = app.store.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(stored.name, "A");
}

#[tokio::test]
async fn test_register_requires_all_fields() {
    let app = TestApp::new();

    for body in [
        json!({ "email": "a@x.com", "password": "pw1" }),
        json!({ "name": "A", "password": "pw1" }),
        json!({ "name": "A", "email": "a@x.com", "password": "" }),
    ] {
        let response = app.server.post("/api/register").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        crate::assert_msg!(response.json::<Value>(), "Please enter all fields");
    }

    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/register")
        .text("{ not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_msg!(response.json::<Value>(), "Invalid request body");
}

#[tokio::test]
async fn test_login_unknown_email_issues_nothing() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "nobody@x.com", "password": "pw1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_msg!(response.json::<Value>(), "User does not exist");
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_wrong_password_issues_nothing() {
    let app = TestApp::new();
    register_user(&app, "A", "a@x.com", "pw1").await;

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "a@x.com", "password": "wrong" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_msg!(response.json::<Value>(), "Invalid credentials");
    assert!(response.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_login_email_is_case_sensitive() {
    let app = TestApp::new();
    register_user(&app, "A", "a@x.com", "pw1").await;

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "A@X.COM", "password": "pw1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_msg!(response.json::<Value>(), "User does not exist");
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/login")
        .json(&json!({ "email": "a@x.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    crate::assert_msg!(response.json::<Value>(), "Please enter all fields");
}

#[tokio::test]
async fn test_admin_flag_reaches_claims() {
    let app = TestApp::new();
    register_user(&app, "Root", "root@x.com", "pw1").await;
    assert!(app.store.set_admin("root@x.com", true).await);

    let token = login_token(&app, "root@x.com", "pw1").await;
    assert!(app.tokens.verify(&token).unwrap().is_admin);
}

#[tokio::test]
async fn test_logout_clears_cookie_on_get_and_post() {
    let app = TestApp::new();

    for response in [app.server.get("/api/logout").await, app.server.post("/api/logout").await] {
        assert_eq!(response.status_code(), StatusCode::OK);
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap().to_string();
        crate::assert_contains!(cookie, "token=;");
        crate::assert_contains!(cookie, "Max-Age=0");
        crate::assert_msg!(response.json::<Value>(), "Logged out successfully");
    }
}

#[tokio::test]
async fn test_logout_does_not_revoke_issued_tokens() {
    let app = TestApp::new();
    register_user(&app, "A", "a@x.com", "pw1").await;
    let token = login_token(&app, "a@x.com", "pw1").await;

    app.server.post("/api/logout").await;

    let (name, value) = crate::common::bearer(&token);
    let response = app.server.get("/api/dashboard").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
