use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::any,
};
use tracing::info;

use crate::{
    common::{app_state::AppState, server_error::ServerError},
    mw::headers_mw::cors_mw,
    save::models::{SaveResponse, validate_payload},
};

pub fn save_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", any(save_result))
        .layer(from_fn(cors_mw))
        .with_state(state)
}

async fn save_result(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Result<Response, ServerError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    if method != Method::POST {
        return Err(ServerError::MethodNotAllowed);
    }

    let scoring_client = state.get_scoring_client();
    if scoring_client.endpoint().is_none() {
        return Err(ServerError::EndpointMissing);
    }

    let payload: serde_json::Value =
        serde_json::from_slice(&body).map_err(|e| ServerError::BadJsonBody(e.to_string()))?;
    validate_payload(&payload)?;

    let response = scoring_client
        .submit(state.get_client(), &payload)
        .await?;
    info!("Scoring endpoint answered with {}", response.status);

    Ok((StatusCode::OK, Json(SaveResponse::from(response))).into_response())
}
