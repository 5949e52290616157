//! Shared helpers for integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use taskhub::{
    api::routes::create_router,
    db::TursoClient,
    utils::config::{Config, ServerConfig, SessionConfig},
    AppState,
};

pub const TEST_PASSWORD: &str = "O6AvLIQL1cbzrre";
pub const TEST_SIGNING_KEY: &str = "integration-test-signing-key-32-chars!";

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        session: SessionConfig {
            secret: TEST_SIGNING_KEY.to_string(),
            ttl_secs: 3600,
        },
    }
}

/// Boots a server over a fresh in-memory database.
pub async fn test_server() -> TestServer {
    let store = TursoClient::new_memory()
        .await
        .expect("should open in-memory db");
    let state = AppState::new(test_config(), Arc::new(store));
    TestServer::new(create_router(state)).expect("should start test server")
}

/// Registers a user and returns their id.
pub async fn register_user(server: &TestServer, email: &str) -> i64 {
    let response = server
        .post("/api/users")
        .json(&json!({
            "first_name": "Test",
            "last_name": "User",
            "email": email,
            "password": TEST_PASSWORD,
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("registered user should have an id")
}

/// Logs a user in and returns the session token.
pub async fn login(server: &TestServer, email: &str) -> String {
    let response = server
        .post("/api/session")
        .json(&json!({
            "email": email,
            "password": TEST_PASSWORD,
        }))
        .await;
    response.assert_status_ok();
    response.json::<serde_json::Value>()["token"]
        .as_str()
        .expect("login should return a token")
        .to_string()
}

/// Registers a user, logs them in, and returns (id, token).
pub async fn signed_in_user(server: &TestServer, email: &str) -> (i64, String) {
    let id = register_user(server, email).await;
    let token = login(server, email).await;
    (id, token)
}

/// Creates a status and returns its id.
pub async fn create_status(server: &TestServer, token: &str, name: &str) -> i64 {
    let response = server
        .post("/api/statuses")
        .authorization_bearer(token)
        .json(&json!({ "name": name }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("status should have an id")
}

/// Creates a task owned by the token's user and returns its id.
pub async fn create_task(server: &TestServer, token: &str, status_id: i64, name: &str) -> i64 {
    let response = server
        .post("/api/tasks")
        .authorization_bearer(token)
        .json(&json!({ "name": name, "status_id": status_id }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<serde_json::Value>()["id"]
        .as_i64()
        .expect("task should have an id")
}
