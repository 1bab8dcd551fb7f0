mod save;

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
};
use tower::ServiceExt;
use tracing::level_filters::LevelFilter;

use crate::{
    app,
    common::app_state::AppState,
    config::config::{AppConfig, QuizConfig, ScoringConfig, ServerConfig, UnsplashConfig},
};

pub const TEST_ACCESS_KEY: &str = "test-access-key";

pub fn setup_logging() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn test_config(
    unsplash_base_url: &str,
    access_key: Option<&str>,
    scoring_endpoint: Option<String>,
) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            address: "127.0.0.1".into(),
            port: 0,
            log_level: "debug".into(),
        },
        unsplash: UnsplashConfig {
            base_url: unsplash_base_url.to_string(),
            access_key: access_key.map(String::from),
        },
        scoring: ScoringConfig {
            endpoint: scoring_endpoint,
        },
        quiz: QuizConfig {
            image_ttl_hours: 12,
            cache_sweep_secs: 3600,
            rng_seed: Some(7),
        },
    }
}

/// State with no image credential and no scoring endpoint.
pub fn offline_state() -> Arc<AppState> {
    AppState::from_config(&test_config("http://127.0.0.1:1", None, None))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body was not json")
    }
}

pub async fn send(state: Arc<AppState>, request: Request<Body>) -> TestResponse {
    let router: Router = app(state);
    let response = router.oneshot(request).await.expect("Router failed");
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(state: Arc<AppState>, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");

    send(state, request).await
}
