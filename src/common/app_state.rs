use std::sync::Arc;

use reqwest::Client;

use crate::{
    client::{scoring_client::ScoringClient, unsplash_client::UnsplashClient},
    common::{image_cache::ImageCache, random::QuizRng},
    config::config::AppConfig,
};

pub struct AppState {
    client: Client,
    unsplash_client: UnsplashClient,
    scoring_client: ScoringClient,
    image_cache: ImageCache,
    rng: QuizRng,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Arc<Self> {
        let client = Client::new();
        let unsplash_client = UnsplashClient::new(
            &config.unsplash.base_url,
            config.unsplash.access_key.clone(),
        );
        let scoring_client = ScoringClient::new(config.scoring.endpoint.clone());
        let image_cache =
            ImageCache::from_ttl(chrono::Duration::hours(config.quiz.image_ttl_hours));
        let rng = QuizRng::from_seed_option(config.quiz.rng_seed);

        Arc::new(Self {
            client,
            unsplash_client,
            scoring_client,
            image_cache,
            rng,
        })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }

    pub fn get_unsplash_client(&self) -> &UnsplashClient {
        &self.unsplash_client
    }

    pub fn get_scoring_client(&self) -> &ScoringClient {
        &self.scoring_client
    }

    pub fn get_image_cache(&self) -> &ImageCache {
        &self.image_cache
    }

    pub fn get_rng(&self) -> &QuizRng {
        &self.rng
    }
}
