//! Best score tracking
//!
//! Persisted under [`BEST_SCORE_KEY`] as a plain integer string. Read once at
//! startup, written whenever a run beats it.
//!
//! [`BEST_SCORE_KEY`]: crate::consts::BEST_SCORE_KEY

use crate::consts::BEST_SCORE_KEY;
use crate::persistence::KeyValueStore;

/// The best score ever achieved, backed by a key-value store
#[derive(Debug)]
pub struct BestScore<S> {
    store: S,
    value: u64,
}

impl<S: KeyValueStore> BestScore<S> {
    /// Read the stored best (0 if absent, unreadable or malformed)
    pub fn load(store: S) -> Self {
        let value = match store.get(BEST_SCORE_KEY) {
            Ok(Some(raw)) => match parse_best(&raw) {
                Some(value) => {
                    log::info!("Loaded best score {}", value);
                    value
                }
                None => {
                    log::warn!("Ignoring malformed best score {:?}", raw);
                    0
                }
            },
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Could not read best score: {}", e);
                0
            }
        };
        Self { store, value }
    }

    pub fn get(&self) -> u64 {
        self.value
    }

    /// Fold a finished run's score in. Persists and returns true on a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if score <= self.value {
            return false;
        }
        self.value = score;
        match self.store.set(BEST_SCORE_KEY, &score.to_string()) {
            Ok(()) => log::info!("New best score {} saved", score),
            Err(e) => log::warn!("New best score {} not saved: {}", score, e),
        }
        true
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Parse a stored best score; surrounding whitespace is tolerated
pub fn parse_best(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
