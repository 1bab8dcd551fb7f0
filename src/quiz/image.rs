use rand::{Rng, seq::IndexedRandom};
use tracing::{debug, warn};

use crate::{common::app_state::AppState, quiz::word_bank::Category};

const MAX_PAGE: u32 = 5;
const PER_PAGE: u32 = 10;

/// Cached url, or a fresh pick from a random result page. Failures are
/// logged and read as no image.
pub async fn resolve_image(state: &AppState, category: &Category, word: &str) -> Option<String> {
    let cache = state.get_image_cache();
    if let Some(url) = cache.get(category.key, word) {
        debug!("Image cache hit for {}:{}", category.key, word);
        return Some(url);
    }

    let query = format!("{} {}", word, category.hint());
    let page = state.get_rng().with(|rng| rng.random_range(1..=MAX_PAGE));

    let photos = match state
        .get_unsplash_client()
        .search_photos(state.get_client(), &query, page, PER_PAGE)
        .await
    {
        Ok(photos) => photos,
        Err(e) => {
            warn!("Image lookup failed for {}:{}: {}", category.key, word, e);
            return None;
        }
    };

    let Some(chosen) = state.get_rng().with(|rng| photos.choose(rng).cloned()) else {
        warn!("No image results for '{}' on page {}", query, page);
        return None;
    };

    let url = chosen.preferred_url()?.to_string();
    cache.insert(category.key, word, url.clone());

    Some(url)
}
