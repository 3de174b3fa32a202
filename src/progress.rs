use serde::{Deserialize, Serialize};
use tracing::debug;

/// Player progress across level attempts: current level, unlock high-water mark, and
/// the hint budget.
///
/// This is the in-memory state machine only. Persisting it across app sessions is the
/// caller's concern; the serde derives exist so a persistence layer can store it
/// however it likes.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Progress {
    current_level: u32,
    highest_unlocked: u32,
    hints_remaining: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self { current_level: 1, highest_unlocked: 1, hints_remaining: 3 }
    }
}

impl Progress {
    /// The level the player is currently on.
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    /// The highest level ever unlocked. Never decreases.
    pub fn highest_unlocked(&self) -> u32 {
        self.highest_unlocked
    }

    /// Hints left in the budget.
    pub fn hints_remaining(&self) -> u32 {
        self.hints_remaining
    }

    /// Record that `level` was solved: move to the next level and raise the unlock
    /// high-water mark if needed.
    pub fn complete_level(&mut self, level: u32) {
        let next = level + 1;
        self.current_level = next;
        self.highest_unlocked = self.highest_unlocked.max(next);
        debug!(level, next, "level completed");
    }

    /// Spend a hint. Returns whether one was actually spent; at zero this is a no-op
    /// and the caller should not show a hint.
    pub fn use_hint(&mut self) -> bool {
        if self.hints_remaining > 0 {
            self.hints_remaining -= 1;
            true
        } else {
            false
        }
    }

    /// Grant an extra hint, e.g. as an external reward.
    pub fn add_hint(&mut self) {
        self.hints_remaining += 1;
    }

    /// Jump to an already-unlocked level. Returns whether the jump was allowed.
    pub fn select_level(&mut self, level: u32) -> bool {
        if (1..=self.highest_unlocked).contains(&level) {
            self.current_level = level;
            true
        } else {
            false
        }
    }
}
