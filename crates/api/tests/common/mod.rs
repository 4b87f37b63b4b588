#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use courseinsight_api::config::ServerConfig;
use courseinsight_api::router::build_app_router;
use courseinsight_api::state::AppState;
use courseinsight_core::catalog::Catalog;

/// The sample catalog shipped with the server.
pub const FIXTURE_JSON: &str = include_str!("../../fixtures/catalog.json");

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        catalog_path: "fixtures/catalog.json".into(),
        json_logs: false,
    }
}

pub fn fixture_catalog() -> Catalog {
    Catalog::from_json_str(FIXTURE_JSON).expect("bundled fixture must be valid")
}

/// Build the full application router over the bundled fixture.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery).
pub fn build_test_app() -> Router {
    build_test_app_with(fixture_catalog())
}

/// Build the application router over a custom catalog.
pub fn build_test_app_with(catalog: Catalog) -> Router {
    build_app_router(AppState::new(catalog), &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, json.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect the `id` field of every object in a JSON array.
pub fn ids(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}
