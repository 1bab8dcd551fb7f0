use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::client::scoring_client::ScoringClientError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Scoring endpoint is not configured")]
    EndpointMissing,

    #[error("Bad json body: {0}")]
    BadJsonBody(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Save failed: {0}")]
    Save(#[from] ScoringClientError),

    #[error("{0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidCategory(_)
            | ServerError::BadJsonBody(_)
            | ServerError::MissingField(_) => StatusCode::BAD_REQUEST,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::EndpointMissing | ServerError::Save(_) | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ServerError::InvalidCategory(received) => {
                json!({ "ok": false, "error": "INVALID_CATEGORY", "received": received })
            }
            ServerError::MethodNotAllowed => json!({ "ok": false, "error": "METHOD_NOT_ALLOWED" }),
            ServerError::EndpointMissing => json!({ "ok": false, "error": "GS_ENDPOINT_MISSING" }),
            ServerError::BadJsonBody(detail) => {
                json!({ "ok": false, "error": "BAD_JSON_BODY", "detail": detail })
            }
            ServerError::MissingField(field) => {
                json!({ "ok": false, "error": format!("MISSING_{}", field) })
            }
            ServerError::Save(e) => {
                error!("Save handler failed: {}", e);
                json!({ "ok": false, "error": "SAVE_HANDLER_ERROR", "detail": e.to_string() })
            }
            ServerError::Internal(msg) => {
                error!("Internal server error: {}", msg);
                json!({ "ok": false, "error": msg })
            }
        };

        (status, Json(body)).into_response()
    }
}
