#![allow(dead_code, clippy::panic)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use medicine_registry::api;
use medicine_registry::app_state::AppState;
use medicine_registry::config::RegistryConfig;
use medicine_registry::domain::MatchPolicy;
use medicine_registry::persistence::{SqliteStore, seed};
use medicine_registry::service::AssociationService;

/// Build the full application router over a freshly migrated and seeded
/// in-memory database.
///
/// Mirrors the startup sequence in `main.rs` so tests exercise the same
/// middleware stack production uses.
pub async fn build_test_app(match_policy: MatchPolicy) -> Router {
    let Ok(store) = SqliteStore::in_memory().await else {
        panic!("in-memory store");
    };
    let Ok(()) = store.migrate().await else {
        panic!("migration failed");
    };
    let Ok(_) = seed(&store).await else {
        panic!("seed failed");
    };

    let config = RegistryConfig {
        match_policy,
        static_dir: PathBuf::from("tests/no-static-dir"),
        ..RegistryConfig::default()
    };
    let state = AppState {
        association_service: Arc::new(AssociationService::new(store, match_policy)),
        config: Arc::new(config),
    };
    api::build_app(state)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
        panic!("request build failed");
    };
    send(app, request).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let Ok(request) = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
    else {
        panic!("request build failed");
    };
    send(app, request).await
}

/// Send a POST request with a raw body and no content type.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let Ok(request) = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body))
    else {
        panic!("request build failed");
    };
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    let Ok(response) = app.oneshot(request).await else {
        panic!("router call failed");
    };
    response
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let Ok(collected) = response.into_body().collect().await else {
        panic!("body read failed");
    };
    let Ok(json) = serde_json::from_slice(&collected.to_bytes()) else {
        panic!("body is not JSON");
    };
    json
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let Ok(collected) = response.into_body().collect().await else {
        panic!("body read failed");
    };
    String::from_utf8_lossy(&collected.to_bytes()).into_owned()
}
