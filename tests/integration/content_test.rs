//! Public read route tests

use axum::http::{header, HeaderValue, StatusCode};
use serde_json::Value;

use crate::common::{register_user, TestApp};

#[tokio::test]
async fn test_root_reports_running() {
    let app = TestApp::new();

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "API is running...");
}

#[tokio::test]
async fn test_users_listing_hides_password_hashes() {
    let app = TestApp::new();
    register_user(&app, "A", "a@x.com", "pw1").await;
    register_user(&app, "B", "b@x.com", "pw2").await;

    let response = app.server.get("/api/users").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let users: Vec<Value> = response.json();
    let emails: Vec<&str> = users.iter().map(|u| u["email"].as_str().unwrap()).collect();
    assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    for user in &users {
        assert!(user.get("password").is_none());
        assert!(user.get("password_hash").is_none());
        assert_eq!(user["isAdmin"], false);
    }
}

#[tokio::test]
async fn test_jokes_listing() {
    let app = TestApp::new();

    let response = app.server.get("/api/jokes").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let jokes: Vec<Value> = response.json();
    assert_eq!(jokes.len(), 5);
    assert_eq!(jokes[3]["punchline"], "An impasta!");
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = TestApp::new();

    let response = app.server.get("/api/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    crate::assert_msg!(response.json::<Value>(), "Not Found");
}

#[tokio::test]
async fn test_cors_allows_configured_origin_with_credentials() {
    let app = TestApp::new();

    let response = app
        .server
        .get("/api/jokes")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:5174"))
        .await;

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5174"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}
