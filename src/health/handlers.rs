use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::json;

use crate::common::app_state::AppState;

pub fn health_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/detailed", get(health_detailed))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    "OK".into_response()
}

async fn health_detailed(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let json = json!({
        "platform": true,
        "unsplash": state.get_unsplash_client().has_access_key(),
        "scoring": state.get_scoring_client().endpoint().is_some(),
        "cached_images": state.get_image_cache().len(),
    });

    (StatusCode::OK, Json(json))
}
