//! Shared helpers for the HTTP integration tests.
//!
//! Every test builds its own app over the in-memory store, so tests are
//! independent and need no database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use hrportal_api::{AppState, build_app};
use hrportal_core::config::AppConfig;
use hrportal_core::config::auth::BootstrapAdmin;
use hrportal_core::config::database::StoreBackend;
use hrportal_database::Stores;
use hrportal_realtime::NotificationBus;

/// Admin credentials seeded into every test app.
pub const ADMIN_EMAIL: &str = "admin@hrportal.test";
/// Password shared by every seeded principal.
pub const PASSWORD: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for reaching the bus and services directly
    pub state: AppState,
}

/// Status and parsed JSON body of a test request.
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// JSON body, `Null` when empty
    pub body: Value,
}

/// Configuration for a fast, self-contained app.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.backend = StoreBackend::Memory;
    config.auth.signing_secret = "integration-test-secret".to_string();
    config.auth.hash_memory_kib = 1024;
    config.auth.hash_iterations = 1;
    config
}

impl TestApp {
    /// Create a new test application with a bootstrap admin account.
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    /// Create a test application over `config`.
    pub async fn with_config(config: AppConfig) -> Self {
        let bus = Arc::new(NotificationBus::new(&config.realtime));
        let state =
            AppState::new(config, Stores::memory(), bus).expect("Failed to build app state");

        state
            .auth_service
            .ensure_bootstrap_admin(&BootstrapAdmin {
                username: "admin".to_string(),
                email: ADMIN_EMAIL.to_string(),
                password: PASSWORD.to_string(),
            })
            .await
            .expect("Failed to seed admin");

        let router = build_app(state.clone());
        Self { router, state }
    }

    /// Send a request and parse the JSON response.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let req = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send(req).await
    }

    /// Send a prepared request.
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Login and return the token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "login failed: {}",
            response.body
        );
        token_of(&response.body)
    }

    /// Token of the seeded admin account.
    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, PASSWORD).await
    }

    /// Self-register a staff member with `role` and return `(token, id)`.
    pub async fn register_staff(&self, first: &str, last: &str, role: &str) -> (String, Uuid) {
        let email = format!("{}.{}@hrportal.test", first.to_lowercase(), last.to_lowercase());
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(json!({
                    "firstName": first,
                    "lastName": last,
                    "email": email,
                    "password": PASSWORD,
                    "role": role,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "register failed: {}",
            response.body
        );
        (token_of(&response.body), user_id_of(&response.body))
    }
}

/// Extracts `token` from an auth session body.
pub fn token_of(body: &Value) -> String {
    body["token"].as_str().expect("missing token").to_string()
}

/// Extracts `user.id` from an auth session body.
pub fn user_id_of(body: &Value) -> Uuid {
    body["user"]["id"]
        .as_str()
        .and_then(|s| s.parse().ok())
        .expect("missing user id")
}
