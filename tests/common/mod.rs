//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use planner_api::{AppState, build_app};
use planner_core::config::AppConfig;
use planner_database::DataStore;
use planner_service::mail::MemoryMailer;

/// Test application context backed by the in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store, for seeding and inspecting records directly
    pub store: DataStore,
    /// Recorder for outbound mail
    pub mailer: MemoryMailer,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with default configuration.
    pub fn new() -> Self {
        let config = AppConfig::default();
        let store = DataStore::memory();
        let mailer = MemoryMailer::new();
        let state = AppState::new(config.clone(), store.clone(), Arc::new(mailer.clone()))
            .expect("Failed to build state");
        let router = build_app(state, &config.server.cors);

        Self {
            router,
            store,
            mailer,
            config,
        }
    }

    /// Make a JSON request to the router.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str).await
    }

    /// Make a request with a literal body.
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a to-do through the API and return its JSON.
    pub async fn create_todo(&self, title: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/todos",
                Some(serde_json::json!({ "title": title })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body
    }

    /// Create a share through the API and return its token.
    pub async fn create_share(&self, body: Value) -> String {
        let response = self.request("POST", "/api/shares", Some(body)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("token missing")
            .to_string()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
