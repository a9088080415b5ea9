#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use pawconnect::api::handlers::health_handler;
use pawconnect::application::services::AuthSettings;
use pawconnect::domain::region_picker::Location;
use pawconnect::infrastructure::seed::SeedData;
use pawconnect::routes::api_router;
use pawconnect::state::AppState;
use serde_json::json;
use std::time::Duration;

pub const VOLUNTEER_EMAIL: &str = "volunteer@pawconnect.kr";
pub const ADMIN_EMAIL: &str = "admin@pawconnect.kr";
pub const PASSWORD: &str = "paw1234";

pub fn test_settings() -> AuthSettings {
    AuthSettings {
        signing_secret: "test-signing-secret".to_string(),
        latency: Duration::ZERO,
        timeout: Duration::from_secs(5),
        session_ttl: Duration::from_secs(3600),
        default_location: Location {
            province: "서울".to_string(),
            district: "강남구".to_string(),
        },
    }
}

/// Settings with a simulated backend round-trip, for overlapping requests.
pub fn slow_settings(latency: Duration) -> AuthSettings {
    AuthSettings {
        latency,
        ..test_settings()
    }
}

pub fn create_test_state() -> AppState {
    create_test_state_with(test_settings())
}

pub fn create_test_state_with(settings: AuthSettings) -> AppState {
    let seed = SeedData::embedded().unwrap();
    AppState::from_seed(seed, settings)
}

/// `/health` plus every `/api` route behind the auth middleware.
pub fn make_server() -> TestServer {
    make_server_with(test_settings())
}

pub fn make_server_with(settings: AuthSettings) -> TestServer {
    let state = create_test_state_with(settings);
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router(state.clone()))
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub async fn login(server: &TestServer, email: &str) -> String {
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": PASSWORD }))
        .await;

    response.assert_status_ok();
    response.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}
