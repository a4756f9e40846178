//! Score and best score

use serde::{Deserialize, Serialize};

/// Current-session score plus the best across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    pub score: u32,
    /// Never decreases
    pub best: u32,
}

impl ScoreTracker {
    pub fn new(best: u32) -> Self {
        Self { score: 0, best }
    }

    /// New session
    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// One obstacle passed; returns the new score
    pub fn on_pass(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    /// Fold the session score into the best. Returns true on a new best,
    /// which the caller is expected to persist.
    pub fn on_session_end(&mut self) -> bool {
        if self.score > self.best {
            self.best = self.score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_only_moves_up() {
        let mut tracker = ScoreTracker::new(5);
        for _ in 0..3 {
            tracker.on_pass();
        }
        assert!(!tracker.on_session_end());
        assert_eq!(tracker.best, 5);

        tracker.reset();
        assert_eq!(tracker.score, 0);
        for _ in 0..7 {
            tracker.on_pass();
        }
        assert!(tracker.on_session_end());
        assert_eq!(tracker.best, 7);
    }

    #[test]
    fn test_tie_is_not_a_new_best() {
        let mut tracker = ScoreTracker::new(2);
        tracker.on_pass();
        tracker.on_pass();
        assert!(!tracker.on_session_end());
    }
}
