//! Helpers for driving the HTTP router in integration tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use konoha::server::{model::app::AppState, router::routes};
use konoha_test_utils::TestContext;
use serde_json::Value;
use tower::ServiceExt;

/// Extension trait for TestContext to build the application state and router
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// Full application router backed by the test database
    fn app(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn app(&self) -> Router {
        routes().with_state(self.into_app_state())
    }
}

/// Sends a request with an optional JSON body, returning the status and the parsed body
///
/// Empty bodies are returned as `Value::Null`.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    read(app, request).await
}

/// Sends a request with a raw JSON body, for bodies that are not valid JSON
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    read(app, request).await
}

async fn read(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
