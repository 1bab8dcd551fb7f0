use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
};
use futures::future::join_all;
use tracing::info;

use crate::{
    common::{app_state::AppState, server_error::ServerError},
    mw::headers_mw::no_store_mw,
    quiz::{
        image::resolve_image,
        models::{
            QuizItem, QuizQuery, QuizResponse, fallback_img, generate_choices, mask_word,
            pick_words,
        },
        word_bank::{Category, find_category},
    },
};

pub fn quiz_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_quiz))
        .layer(from_fn(no_store_mw))
        .with_state(state)
}

async fn get_quiz(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuizQuery>,
) -> Result<impl IntoResponse, ServerError> {
    let raw_category = query.raw_category();
    let Some(category) = find_category(raw_category) else {
        return Err(ServerError::InvalidCategory(raw_category.to_string()));
    };

    let requested = query.requested_count();
    let words = state
        .get_rng()
        .with(|rng| pick_words(category, requested, rng));

    let futures = words
        .into_iter()
        .map(|word| build_item(&state, category, word));

    let items = join_all(futures)
        .await
        .into_iter()
        .collect::<Result<Vec<QuizItem>, ServerError>>()?;

    info!(
        "Generated {} quiz items for category {}",
        items.len(),
        category.key
    );

    Ok((StatusCode::OK, Json(QuizResponse::new(category.key, items))))
}

async fn build_item(
    state: &AppState,
    category: &Category,
    word: &str,
) -> Result<QuizItem, ServerError> {
    let shown = mask_word(word)?;
    let choices = state.get_rng().with(|rng| generate_choices(word, rng))?;
    let img = resolve_image(state, category, word)
        .await
        .unwrap_or_else(|| fallback_img(category, word));

    Ok(QuizItem {
        word: word.to_string(),
        shown,
        img,
        choices,
    })
}
