use std::env;

use ::config::{Config, ConfigError, Environment};
use once_cell::sync::Lazy;
use serde::Deserialize;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("Failed to load config: {}", e)));

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub unsplash: UnsplashConfig,
    pub scoring: ScoringConfig,
    pub quiz: QuizConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UnsplashConfig {
    pub base_url: String,
    pub access_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScoringConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuizConfig {
    pub image_ttl_hours: i64,
    pub cache_sweep_secs: u64,
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    /// Defaults, then `WORDQUIZ__SECTION__KEY` variables, then the legacy
    /// `UNSPLASH_ACCESS_KEY` and `GS_ENDPOINT` variables.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.address", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.log_level", "debug")?
            .set_default("unsplash.base_url", "https://api.unsplash.com")?
            .set_default("quiz.image_ttl_hours", 12)?
            .set_default("quiz.cache_sweep_secs", 3600)?
            .add_source(
                Environment::with_prefix("WORDQUIZ")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("unsplash.access_key", non_empty_var("UNSPLASH_ACCESS_KEY"))?
            .set_override_option("scoring.endpoint", non_empty_var("GS_ENDPOINT"))?
            .build()?
            .try_deserialize()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
