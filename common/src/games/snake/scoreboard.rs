use std::sync::Arc;

use crate::storage::KeyValueStore;
use crate::{debug_log, log};

pub const HIGH_SCORE_KEY: &str = "highScore";

/// Session score plus the best score kept in the store.
pub struct ScoreTracker<S: KeyValueStore> {
    score: u32,
    high_score: u32,
    store: Arc<S>,
}

impl<S: KeyValueStore> ScoreTracker<S> {
    /// Starts at zero and loads the stored best; anything missing or non-numeric counts as 0.
    pub fn new(store: Arc<S>) -> Self {
        let high_score = store
            .get(HIGH_SCORE_KEY)
            .and_then(|value| value.trim().parse::<u32>().ok())
            .unwrap_or(0);

        Self {
            score: 0,
            high_score,
            store,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn increment_score(&mut self) {
        self.score += 1;

        if self.score > self.high_score {
            self.high_score = self.score;
            self.persist_high_score();
        }
    }

    fn persist_high_score(&self) {
        match self.store.set(HIGH_SCORE_KEY, &self.high_score.to_string()) {
            Ok(()) => debug_log!("New high score {} saved", self.high_score),
            Err(e) => log!("Failed to save high score {}: {}", self.high_score, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_starts_from_zero_without_stored_value() {
        let tracker = ScoreTracker::new(Arc::new(MemoryStore::new()));
        assert_eq!(tracker.score(), 0);
        assert_eq!(tracker.high_score(), 0);
    }

    #[test]
    fn test_loads_stored_high_score() {
        let tracker = ScoreTracker::new(Arc::new(MemoryStore::with_value(HIGH_SCORE_KEY, "17")));
        assert_eq!(tracker.high_score(), 17);
        assert_eq!(tracker.score(), 0);
    }

    #[test]
    fn test_malformed_stored_value_counts_as_zero() {
        for raw in ["abc", "", "-4", "1.5"] {
            let tracker = ScoreTracker::new(Arc::new(MemoryStore::with_value(HIGH_SCORE_KEY, raw)));
            assert_eq!(tracker.high_score(), 0, "value {:?}", raw);
        }
    }

    #[test]
    fn test_increment_writes_through_only_when_beaten() {
        let store = Arc::new(MemoryStore::with_value(HIGH_SCORE_KEY, "2"));
        let mut tracker = ScoreTracker::new(store.clone());

        tracker.increment_score();
        tracker.increment_score();
        assert_eq!(tracker.score(), 2);
        assert_eq!(tracker.high_score(), 2);
        assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("2"));

        tracker.increment_score();
        assert_eq!(tracker.high_score(), 3);
        assert_eq!(store.get(HIGH_SCORE_KEY).as_deref(), Some("3"));
    }
}
