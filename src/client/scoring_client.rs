use reqwest::{Client, StatusCode};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum ScoringClientError {
    #[error("Scoring endpoint is not configured")]
    MissingEndpoint,

    #[error("Http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct ScoringResponse {
    pub status: StatusCode,
    pub raw: String,
}

/// Forwards results to the spreadsheet web app. The payload travels as a
/// single urlencoded form field since the endpoint rejects preflighted
/// content types.
#[derive(Debug, Clone)]
pub struct ScoringClient {
    endpoint: Option<String>,
}

impl ScoringClient {
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint.filter(|url| !url.trim().is_empty());
        Self { endpoint }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub async fn submit(
        &self,
        client: &Client,
        payload: &serde_json::Value,
    ) -> Result<ScoringResponse, ScoringClientError> {
        let Some(endpoint) = self.endpoint() else {
            return Err(ScoringClientError::MissingEndpoint);
        };

        let encoded = serde_json::to_string(payload)?;
        info!("ScoringClient forwarding {} bytes", encoded.len());

        let response = client
            .post(endpoint)
            .form(&[("payload", encoded)])
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        if !status.is_success() {
            error!("Scoring endpoint answered: {} - {}", status, raw);
        }

        Ok(ScoringResponse { status, raw })
    }
}
