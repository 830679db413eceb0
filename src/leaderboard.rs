//! In-memory leaderboard of completed puzzles.
//!
//! Entries are append-only and always sorted by completion time, fastest
//! first. Equal times keep their insertion order.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Name recorded when the player leaves the name blank.
pub const ANONYMOUS: &str = "Anonymous";

/// One completed puzzle: who and how fast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Player name, never blank.
    name: String,
    /// Completion time in milliseconds.
    time_ms: u64,
}

impl LeaderboardEntry {
    /// Creates an entry, substituting [`ANONYMOUS`] for a blank name.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, time_ms: u64) -> Self {
        let name = name.into();
        let name = if name.trim().is_empty() {
            ANONYMOUS.to_string()
        } else {
            name
        };
        Self { name, time_ms }
    }
}

/// Ranked list of completions, fastest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry in rank order and returns its 0-based rank.
    ///
    /// The entry lands after every existing entry with the same or a lower
    /// time, so ties rank by arrival.
    #[instrument(skip(self), fields(name = %entry.name, time_ms = entry.time_ms))]
    pub fn record(&mut self, entry: LeaderboardEntry) -> usize {
        let rank = self
            .entries
            .partition_point(|existing| existing.time_ms <= entry.time_ms);
        self.entries.insert(rank, entry);
        info!(rank, total = self.entries.len(), "Recorded leaderboard entry");
        rank
    }

    /// The first `k` entries (fewer if the board is shorter).
    pub fn top(&self, k: usize) -> &[LeaderboardEntry] {
        &self.entries[..k.min(self.entries.len())]
    }

    /// All entries, fastest first.
    pub fn all(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// The fastest entry, if any.
    pub fn best(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_become_anonymous() {
        assert_eq!(LeaderboardEntry::new("", 1).name(), ANONYMOUS);
        assert_eq!(LeaderboardEntry::new("   \t", 1).name(), ANONYMOUS);
        assert_eq!(LeaderboardEntry::new(" Ada ", 1).name(), " Ada ");
    }

    #[test]
    fn test_record_returns_rank() {
        let mut board = Leaderboard::new();
        assert_eq!(board.record(LeaderboardEntry::new("a", 500)), 0);
        assert_eq!(board.record(LeaderboardEntry::new("b", 100)), 0);
        assert_eq!(board.record(LeaderboardEntry::new("c", 300)), 1);
        assert_eq!(board.record(LeaderboardEntry::new("d", 900)), 3);
    }

    #[test]
    fn test_top_is_clamped() {
        let mut board = Leaderboard::new();
        board.record(LeaderboardEntry::new("a", 1));
        board.record(LeaderboardEntry::new("b", 2));
        assert_eq!(board.top(5).len(), 2);
        assert_eq!(board.top(1)[0].name(), "a");
        assert!(board.top(0).is_empty());
    }

    #[test]
    fn test_empty_board() {
        let board = Leaderboard::new();
        assert!(board.is_empty());
        assert!(board.best().is_none());
        assert!(board.all().is_empty());
    }
}
