#![allow(dead_code)]

use std::sync::Arc;

use aisow_api::config::{ServerConfig, StoreBackend};
use aisow_api::router::build_app_router;
use aisow_api::state::AppState;
use aisow_db::{MemoryProjectStore, ProjectStore};
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
    }
}

/// A fresh, empty store shared across the requests of one test.
pub fn test_store() -> Arc<MemoryProjectStore> {
    Arc::new(MemoryProjectStore::new())
}

/// Build the full application router over the given store.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery).
pub fn build_test_app(store: Arc<MemoryProjectStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

/// Build the application router with a caller-supplied configuration.
pub fn build_test_app_with_config(store: Arc<MemoryProjectStore>, config: ServerConfig) -> Router {
    let store: Arc<dyn ProjectStore> = store;
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config).expect("test router must build")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a project through the API and return its JSON representation.
pub async fn create_project(
    store: &Arc<MemoryProjectStore>,
    name: &str,
    description: &str,
) -> serde_json::Value {
    let app = build_test_app(Arc::clone(store));
    let response = post_json(
        app,
        "/api/projects",
        serde_json::json!({ "name": name, "description": description }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
