use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::client::unsplash_client_error::UnsplashClientError;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Photo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Photo {
    #[serde(default)]
    pub urls: PhotoUrls,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PhotoUrls {
    pub small: Option<String>,
    pub regular: Option<String>,
}

impl Photo {
    pub fn preferred_url(&self) -> Option<&str> {
        self.urls
            .small
            .as_deref()
            .or(self.urls.regular.as_deref())
    }
}

#[derive(Debug, Clone)]
pub struct UnsplashClient {
    base_url: String,
    access_key: Option<String>,
}

impl UnsplashClient {
    pub fn new(base_url: impl Into<String>, access_key: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let access_key = access_key.filter(|key| !key.trim().is_empty());

        Self {
            base_url,
            access_key,
        }
    }

    pub fn has_access_key(&self) -> bool {
        self.access_key.is_some()
    }

    pub async fn search_photos(
        &self,
        client: &Client,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Photo>, UnsplashClientError> {
        let Some(access_key) = &self.access_key else {
            return Err(UnsplashClientError::MissingAccessKey);
        };

        let url = format!("{}/search/photos", self.base_url);
        debug!("UnsplashClient searching '{}' on page {}", query, page);

        let response = client
            .get(&url)
            .query(&[
                ("query", query.to_string()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
                ("content_filter", "high".to_string()),
            ])
            .header("authorization", format!("Client-ID {}", access_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or("No body".into());
            error!("Unsplash request failed: {} - {}", status, body);
            return Err(UnsplashClientError::ApiError(status, body));
        }

        let search = response.json::<SearchResponse>().await?;
        Ok(search.results)
    }
}
