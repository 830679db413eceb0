//! View-state snapshot consumed by presentation layers.

use serde::Serialize;
use strictly_hanoi::PegId;

use crate::LeaderboardEntry;

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, strum::Display)]
pub enum ViewMode {
    /// The puzzle board.
    #[default]
    Playing,
    /// The congratulations screen after a solve.
    Solved,
    /// The full leaderboard.
    ViewingLeaderboard,
}

/// Lifecycle of the current attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum Phase {
    /// Timer stopped and puzzle unsolved; moves do not register.
    Idle,
    /// Timer running; moves register.
    Playing,
    /// Puzzle solved; moves do not register.
    Solved,
}

/// Everything a renderer needs, captured after an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Disk sizes on each peg, bottom to top.
    pub pegs: [Vec<u32>; 3],
    /// Total number of disks.
    pub disk_count: u32,
    /// The picked-up peg, if any.
    pub selection: Option<PegId>,
    /// Pegs the selected disk may legally move to.
    pub legal_targets: Vec<PegId>,
    /// Whether the puzzle is solved.
    pub solved: bool,
    /// Whether the timer is running.
    pub timer_running: bool,
    /// Elapsed time of the current attempt in milliseconds.
    pub elapsed_ms: u64,
    /// Current screen.
    pub mode: ViewMode,
    /// Current attempt lifecycle.
    pub phase: Phase,
    /// Name typed so far for the pending leaderboard entry.
    pub player_name: String,
    /// The fastest entries, up to the configured preview length.
    pub leaderboard_top: Vec<LeaderboardEntry>,
    /// Leaderboard entries, fastest first.
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl ViewState {
    /// Disk sizes on the given peg.
    pub fn peg(&self, id: PegId) -> &[u32] {
        &self.pegs[id.to_index()]
    }
}
