#![allow(dead_code)]

use axum::http::HeaderName;
use axum_test::TestServer;
use photo_api::AppState;
use photo_api::auth::{CredentialHasher, TokenService};
use photo_api::core::ManualClock;
use serde_json::{Value, json};
use std::sync::Arc;

pub const TEST_SECRET: &str = "ilmiobellissimosegretochevaassolutamentecambiato";

/// bcrypt minimum cost, the production default would make the suite crawl
pub const TEST_BCRYPT_COST: u32 = 4;

pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub clock: Arc<ManualClock>,
}

/// Crea server e stato per i test, con clock virtuale e secret fissa
pub fn create_test_app() -> TestApp {
    create_test_app_with_hasher(CredentialHasher::new(TEST_BCRYPT_COST))
}

pub fn create_test_app_with_hasher(hasher: CredentialHasher) -> TestApp {
    let clock = Arc::new(ManualClock::starting_now());
    let tokens = TokenService::with_clock(TEST_SECRET, clock.clone());
    let state = Arc::new(AppState::with_components(tokens, hasher));
    let server = create_test_server(state.clone());
    TestApp {
        server,
        state,
        clock,
    }
}

/// Crea un TestServer per i test
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = photo_api::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

pub fn authorization() -> HeaderName {
    HeaderName::from_static("authorization")
}

/// Registers a user and returns the response body.
pub async fn register(server: &TestServer, username: &str, email: &str, password: &str) -> Value {
    let response = server
        .post("/users/register")
        .json(&json!({
            "username": username,
            "email": email,
            "password": password
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Logs in and returns the issued token.
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/users/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}

/// Registers and logs in, returning `(user_id, token)`.
pub async fn register_and_login(
    server: &TestServer,
    username: &str,
    email: &str,
    password: &str,
) -> (String, String) {
    let user = register(server, username, email, password).await;
    let token = login(server, email, password).await;
    (
        user["id"].as_str().expect("id in register response").to_string(),
        token,
    )
}

pub fn photo_body(title: &str) -> Value {
    json!({
        "title": title,
        "caption": "a caption",
        "photo_url": "https://img.example/p.png"
    })
}
