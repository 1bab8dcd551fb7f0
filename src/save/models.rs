use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{client::scoring_client::ScoringResponse, common::server_error::ServerError};

pub const REQUIRED_FIELDS: [&str; 10] = [
    "playerName",
    "category",
    "totalTimeMs",
    "perQuestionTimes",
    "perQuestionCorrect",
    "questionWords",
    "questionShown",
    "correctCount",
    "wrongCount",
    "accuracy",
];

/// Presence only; an explicit `null` counts as present.
pub fn validate_payload(payload: &Value) -> Result<(), ServerError> {
    let fields = payload.as_object();
    for field in REQUIRED_FIELDS {
        let present = fields.is_some_and(|map| map.contains_key(field));
        if !present {
            return Err(ServerError::MissingField(field));
        }
    }

    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub ok: bool,
    pub gs_status: u16,
    pub gs_raw: String,
}

/// The scoring endpoint answered; callers judge success from `gs_status`.
impl From<ScoringResponse> for SaveResponse {
    fn from(response: ScoringResponse) -> Self {
        Self {
            ok: true,
            gs_status: response.status.as_u16(),
            gs_raw: response.raw,
        }
    }
}
