//! Best score tracking
//!
//! Persisted to a key-value store (LocalStorage on web) as a bare integer.
//! Loaded once at startup, written through only when beaten.

use crate::persistence::KeyValueStore;

/// Best score seen across runs, backed by a store
#[derive(Debug)]
pub struct HighScore<S> {
    best: u64,
    store: S,
    key: String,
}

impl<S: KeyValueStore> HighScore<S> {
    /// Load the stored best score. Missing, unparsable or unreadable values count as 0.
    pub fn load(store: S, key: &str) -> Self {
        let best = match store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<u64>(raw.trim()) {
                Ok(best) => {
                    log::info!("Loaded high score {}", best);
                    best
                }
                Err(e) => {
                    log::warn!("Ignoring malformed high score {:?}: {}", raw, e);
                    0
                }
            },
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("High score unavailable, keeping it in memory: {:#}", e);
                0
            }
        };

        Self {
            best,
            store,
            key: key.to_string(),
        }
    }

    /// Current best score
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Offer a score. Raises and persists the best only on a strict increase.
    /// Returns the best score afterwards.
    pub fn record(&mut self, score: u64) -> u64 {
        if score > self.best {
            self.best = score;
            self.save();
        }
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn save(&mut self) {
        let encoded = match serde_json::to_string(&self.best) {
            Ok(encoded) => encoded,
            Err(e) => {
                log::warn!("Could not encode high score: {}", e);
                return;
            }
        };
        match self.store.set(&self.key, &encoded) {
            Ok(()) => log::info!("New high score saved: {}", self.best),
            Err(e) => log::warn!("High score {} kept in memory only: {:#}", self.best, e),
        }
    }
}
