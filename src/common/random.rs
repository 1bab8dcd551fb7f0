use std::sync::Mutex;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Shared random source. Seeded in tests so selection is reproducible.
pub struct QuizRng {
    inner: Mutex<ChaCha8Rng>,
}

impl QuizRng {
    pub fn from_os_rng() -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::from_os_rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }

    /// Never hold across an await point.
    pub fn with<T>(&self, f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        let mut rng = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}
