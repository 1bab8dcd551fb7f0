use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CachedImage {
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

/// Resolved image urls keyed by `(category, word)`.
///
/// Expired entries read as absent and get overwritten by the next successful
/// lookup. `purge_expired` only reclaims memory.
pub struct ImageCache {
    ttl: Duration,
    entries: DashMap<(String, String), CachedImage>,
}

impl ImageCache {
    pub fn from_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, category: &str, word: &str) -> Option<String> {
        self.get_at(category, word, Utc::now())
    }

    pub fn get_at(&self, category: &str, word: &str, now: DateTime<Utc>) -> Option<String> {
        let key = (category.to_string(), word.to_string());
        self.entries
            .get(&key)
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.url.clone())
    }

    pub fn insert(&self, category: &str, word: &str, url: String) {
        self.insert_at(category, word, url, Utc::now());
    }

    pub fn insert_at(&self, category: &str, word: &str, url: String, resolved_at: DateTime<Utc>) {
        let entry = CachedImage {
            url,
            expires_at: resolved_at + self.ttl,
        };
        self.entries
            .insert((category.to_string(), word.to_string()), entry);
    }

    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        let purged = before.saturating_sub(self.entries.len());
        if purged > 0 {
            debug!("ImageCache purged {} expired entries", purged);
        }

        purged
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
