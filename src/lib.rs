//! Strictly Tower - a Tower of Hanoi session engine.
//!
//! Wraps the pure puzzle from [`strictly_hanoi`] with everything a played
//! session needs: a start/stop timer, an in-memory ranked leaderboard, and a
//! controller that turns discrete user intents into state transitions.
//!
//! # Architecture
//!
//! - **Timer**: [`SessionTimer`] over an injectable [`Clock`]
//! - **Leaderboard**: [`Leaderboard`] keeps completions sorted, fastest first
//! - **Controller**: [`GameController`] owns one session and exposes a
//!   pull-based [`ViewState`]
//! - **Config**: [`GameConfig`] from TOML with validated defaults
//! - **TUI**: a thin terminal front end (see [`run_tui`])
//!
//! # Example
//!
//! ```
//! use strictly_tower::{GameConfig, GameController, ManualClock, PegId, ViewMode};
//!
//! let config = GameConfig::default().with_disk_count(1);
//! let mut game = GameController::with_clock(config, ManualClock::new())?;
//! game.start_or_stop();
//! game.select_peg(PegId::Left);
//! game.select_peg(PegId::Right);
//! assert_eq!(game.mode(), ViewMode::Solved);
//! # Ok::<(), strictly_tower::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod controller;
mod format;
mod leaderboard;
mod ticker;
mod timer;
mod tui;
mod view;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ColorParseError, ConfigError, GameConfig, Palette, Rgb};

// Crate-level exports - Session control
pub use controller::{GameController, Intent, IntentOutcome, SelectOutcome};
pub use view::{Phase, ViewMode, ViewState};

// Crate-level exports - Timer and leaderboard
pub use leaderboard::{ANONYMOUS, Leaderboard, LeaderboardEntry};
pub use ticker::Ticker;
pub use timer::{Clock, ManualClock, SessionTimer, SystemClock};

// Crate-level exports - Display helpers
pub use format::format_time;

// Crate-level exports - Terminal front end
pub use tui::run_tui;

// Crate-level exports - Puzzle types
pub use strictly_hanoi::{Disk, Move, MoveError, Peg, PegId, PuzzleError, Towers};
