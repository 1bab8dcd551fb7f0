use std::{str::FromStr, sync::Arc, time::Duration};

use axum::{Router, middleware::from_fn};
use dotenv::dotenv;
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

use crate::{
    common::app_state::AppState, config::config::CONFIG, health::handlers::health_routes,
    mw::request_mw::request_mw, quiz::handlers::quiz_routes, save::handlers::save_routes,
};

mod client;
mod common;
mod config;
mod health;
mod mw;
mod quiz;
mod save;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    // Initialize logging
    let level = LevelFilter::from_str(&CONFIG.server.log_level).unwrap_or(LevelFilter::DEBUG);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global tracing");

    // Initialize state
    let state = AppState::from_config(&CONFIG);
    spawn_cache_sweep(state.clone(), Duration::from_secs(CONFIG.quiz.cache_sweep_secs));

    // Initialize webserver
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", CONFIG.server.address, CONFIG.server.port))
            .await
            .unwrap_or_else(|e| panic!("Failed to bind listener: {}", e));

    info!(
        "Server listening on address: {}",
        listener
            .local_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_default()
    );
    axum::serve(listener, app(state))
        .await
        .unwrap_or_else(|e| panic!("Server error: {}", e));
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/health", health_routes(state.clone()))
        .nest("/api/quiz", quiz_routes(state.clone()))
        .nest("/api/save", save_routes(state))
        .layer(from_fn(request_mw))
}

fn spawn_cache_sweep(state: Arc<AppState>, period: Duration) {
    let mut interval = tokio::time::interval(period.max(Duration::from_secs(1)));

    tokio::spawn(async move {
        loop {
            interval.tick().await;
            let purged = state.get_image_cache().purge_expired(chrono::Utc::now());
            debug!("Image cache sweep removed {} entries", purged);
        }
    });
}
