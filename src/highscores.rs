//! Last/best score tracking
//!
//! Persisted as two scalar slots. The last score is written after every run;
//! the best only when beaten.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, KeyValueStore, keys};

/// Scores shown on the menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBook {
    /// Score of the most recent finished run
    pub last_score: u64,
    /// Highest score ever finished
    pub best_score: u64,
}

impl ScoreBook {
    /// Create empty score book
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score would set a new best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best_score
    }

    /// Load from the store; missing or unreadable slots count as 0
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let book = Self {
            last_score: persistence::read_or(store, keys::LAST_SCORE, 0),
            best_score: persistence::read_or(store, keys::BEST_SCORE, 0),
        };
        log::info!(
            "Loaded scores (last {}, best {})",
            book.last_score,
            book.best_score
        );
        book
    }

    /// Record a finished run. Returns true if it is a new best.
    ///
    /// The in-memory book is updated even when the store rejects the write.
    pub fn record(&mut self, store: &mut dyn KeyValueStore, score: u64) -> bool {
        self.last_score = score;
        persistence::write(store, keys::LAST_SCORE, score);

        if !self.qualifies(score) {
            return false;
        }
        self.best_score = score;
        persistence::write(store, keys::BEST_SCORE, score);
        log::info!("New best score: {}", score);
        true
    }
}
