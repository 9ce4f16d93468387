//! Integration tests for Tavag.
//!
//! The API binary is exercised in-process: tests build the real router over
//! fresh in-memory stores and drive it with `tower::ServiceExt::oneshot`,
//! so every test starts from an empty marketplace and no network or
//! external service is involved.
//!
//! # Test Categories
//!
//! - `order_aggregate` - order + items creation unit and role-scoped reads
//! - `order_lifecycle` - the status state machine, `completed_at`, and the
//!   driver-claim race
//! - `recommendations` - personalization ordering and favorite toggles
//! - `api_routes` - HTTP status codes and payload shapes end to end

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use tavag_api::config::ApiConfig;
use tavag_api::routes;
use tavag_api::state::AppState;

/// Configuration for tests: default everything, no payment provider.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn test_config() -> ApiConfig {
    ApiConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:5000".to_string(),
        delivery_fee: tavag_core::Money::new(2490).unwrap(),
        stripe_secret_key: None,
        static_checkout_url: None,
        sentry_dsn: None,
    }
}

/// The real router over fresh in-memory stores.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Build an app with an empty marketplace.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Build an app with a caller-supplied configuration.
    #[must_use]
    pub fn with_config(config: ApiConfig) -> Self {
        let state = AppState::new(config);
        Self {
            router: Router::new()
                .nest("/api", routes::api_routes())
                .with_state(state),
        }
    }

    /// Send a GET request.
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).expect("request"))
            .await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::delete(uri).body(Body::empty()).expect("request"))
            .await
    }

    /// Send a POST request with a JSON body.
    pub async fn post(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
    }

    /// Send a PATCH request with a JSON body.
    pub async fn patch(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::patch(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
