//! Game controller: the state machine driving one puzzle session.
//!
//! The controller exclusively owns the puzzle, the timer, the selection and
//! the leaderboard. Every user action is a discrete [`Intent`] handled to
//! completion; presentation layers read a [`ViewState`] afterwards.
//!
//! Invalid actions (clicking an empty peg, moving while the timer is
//! stopped, an illegal move) are absorbed as no-ops. They are normal
//! interaction, not faults.

use strictly_hanoi::rules::{can_move, legal_moves};
use strictly_hanoi::{Disk, Move, PegId, Towers};
use tracing::{debug, info, instrument, warn};

use crate::view::{Phase, ViewMode, ViewState};
use crate::{
    Clock, ConfigError, GameConfig, Leaderboard, LeaderboardEntry, SessionTimer, SystemClock,
};

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Click on a peg.
    SelectPeg(PegId),
    /// Return to a fresh puzzle, recording a score if coming from a solve.
    Reset,
    /// Toggle the timer.
    StartOrStop,
    /// Replace the pending leaderboard name.
    SetPlayerName(String),
    /// Show the full leaderboard.
    GoToLeaderboard,
    /// Leave the leaderboard screen.
    ReturnFromLeaderboard,
}

/// What a peg click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Timer stopped, puzzle solved, or an empty peg clicked with nothing held.
    Ignored,
    /// The peg was picked up.
    Selected(PegId),
    /// The held peg was clicked again and put back.
    Deselected(PegId),
    /// A disk moved.
    Moved {
        /// The disk that moved.
        disk: Disk,
        /// The move made.
        action: Move,
    },
    /// The move was illegal; the pick is dropped.
    Rejected(Move),
    /// A disk moved and completed the puzzle.
    Solved {
        /// The final move.
        action: Move,
        /// Completion time in milliseconds.
        elapsed_ms: u64,
    },
}

/// What handling an intent did, for front-end feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    /// Result of a peg click.
    Select(SelectOutcome),
    /// The session was reset; `rank` is set when a score was recorded.
    Reset {
        /// 0-based leaderboard rank of the recorded entry.
        rank: Option<usize>,
    },
    /// The timer was toggled.
    Timer {
        /// Whether the timer now runs.
        running: bool,
    },
    /// The name or screen changed.
    Updated,
}

/// Orchestrates one Tower of Hanoi session.
#[derive(Debug)]
pub struct GameController<C: Clock = SystemClock> {
    config: GameConfig,
    initial: Towers,
    towers: Towers,
    timer: SessionTimer<C>,
    selection: Option<PegId>,
    solved: bool,
    mode: ViewMode,
    player_name: String,
    leaderboard: Leaderboard,
}

impl GameController<SystemClock> {
    /// Creates a controller on the wall clock.
    ///
    /// Fails if the configuration is invalid (for example zero disks).
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> GameController<C> {
    /// Creates a controller with an explicit clock.
    #[instrument(skip(clock))]
    pub fn with_clock(config: GameConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let initial = Towers::new(*config.disk_count())?;
        info!(disk_count = config.disk_count(), "Creating GameController");

        Ok(Self {
            towers: initial.clone(),
            initial,
            timer: SessionTimer::new(clock),
            selection: None,
            solved: false,
            mode: ViewMode::Playing,
            player_name: String::new(),
            leaderboard: Leaderboard::new(),
            config,
        })
    }

    /// Dispatches an intent to its handler.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: Intent) -> IntentOutcome {
        match intent {
            Intent::SelectPeg(peg) => IntentOutcome::Select(self.select_peg(peg)),
            Intent::Reset => IntentOutcome::Reset { rank: self.reset() },
            Intent::StartOrStop => IntentOutcome::Timer {
                running: self.start_or_stop(),
            },
            Intent::SetPlayerName(name) => {
                self.set_player_name(name);
                IntentOutcome::Updated
            }
            Intent::GoToLeaderboard => {
                self.go_to_leaderboard_view();
                IntentOutcome::Updated
            }
            Intent::ReturnFromLeaderboard => {
                self.return_from_leaderboard_view();
                IntentOutcome::Updated
            }
        }
    }

    /// Handles a click on a peg.
    ///
    /// With nothing held, picks up a non-empty peg. With a peg held,
    /// clicking it again puts it back; clicking another peg attempts the
    /// move and drops the pick whether or not the move was legal.
    #[instrument(skip(self))]
    pub fn select_peg(&mut self, peg: PegId) -> SelectOutcome {
        if self.solved || !self.timer.is_running() {
            debug!(solved = self.solved, "Peg selection ignored");
            return SelectOutcome::Ignored;
        }

        let Some(from) = self.selection else {
            if self.towers.peg(peg).is_empty() {
                debug!(%peg, "Empty peg cannot be picked up");
                return SelectOutcome::Ignored;
            }
            self.selection = Some(peg);
            debug!(%peg, "Peg selected");
            return SelectOutcome::Selected(peg);
        };

        self.selection = None;
        if from == peg {
            debug!(%peg, "Peg deselected");
            return SelectOutcome::Deselected(peg);
        }

        let action = Move::new(from, peg);
        if !can_move(&self.towers, from, peg) {
            debug!(%action, "Illegal move rejected");
            return SelectOutcome::Rejected(action);
        }

        let disk = match self.towers.apply(action) {
            Ok(disk) => disk,
            Err(e) => {
                warn!(%action, error = %e, "Validated move failed to apply");
                return SelectOutcome::Rejected(action);
            }
        };

        if self.towers.is_solved() {
            self.timer.stop();
            self.solved = true;
            self.mode = ViewMode::Solved;
            let elapsed_ms = self.timer.elapsed_ms();
            info!(elapsed_ms, "Puzzle solved");
            return SelectOutcome::Solved { action, elapsed_ms };
        }

        SelectOutcome::Moved { disk, action }
    }

    /// Starts a fresh puzzle.
    ///
    /// Coming from the congratulations screen, first records the pending
    /// name and time on the leaderboard and returns the entry's rank.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Option<usize> {
        let rank = (self.mode == ViewMode::Solved).then(|| {
            let entry = LeaderboardEntry::new(self.player_name.as_str(), self.timer.elapsed_ms());
            self.leaderboard.record(entry)
        });

        self.towers = self.initial.clone();
        self.selection = None;
        self.solved = false;
        self.timer.reset();
        self.player_name.clear();
        self.mode = ViewMode::Playing;
        info!(recorded = rank.is_some(), "Session reset");
        rank
    }

    /// Toggles the timer and returns whether it is now running.
    ///
    /// Starting restarts the clock from zero and clears a stale solved
    /// flag. Stopping freezes the elapsed time.
    #[instrument(skip(self))]
    pub fn start_or_stop(&mut self) -> bool {
        if self.timer.is_running() {
            self.timer.stop();
            info!(elapsed_ms = self.timer.elapsed_ms(), "Timer stopped");
        } else {
            self.timer.start();
            self.solved = false;
            info!("Timer started");
        }
        self.timer.is_running()
    }

    /// Sets the name for the pending leaderboard entry. No validation.
    #[instrument(skip(self, name))]
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
    }

    /// Switches to the full leaderboard screen.
    #[instrument(skip(self))]
    pub fn go_to_leaderboard_view(&mut self) {
        self.mode = ViewMode::ViewingLeaderboard;
    }

    /// Leaves the leaderboard screen.
    ///
    /// Always lands on [`ViewMode::Playing`], even if the puzzle is solved.
    #[instrument(skip(self))]
    pub fn return_from_leaderboard_view(&mut self) {
        self.mode = ViewMode::Playing;
    }

    /// Periodic refresh of the elapsed time. Touches nothing else.
    pub fn tick(&mut self) -> u64 {
        self.timer.tick()
    }

    /// The current puzzle position.
    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    /// The held peg, if any.
    pub fn selection(&self) -> Option<PegId> {
        self.selection
    }

    /// Whether the puzzle is solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Whether the timer is running.
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Elapsed milliseconds as of the last refresh.
    pub fn elapsed_ms(&self) -> u64 {
        self.timer.elapsed_ms()
    }

    /// Current screen.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Lifecycle of the current attempt.
    pub fn phase(&self) -> Phase {
        if self.solved {
            Phase::Solved
        } else if self.timer.is_running() {
            Phase::Playing
        } else {
            Phase::Idle
        }
    }

    /// Pending leaderboard name.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// The session leaderboard.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// The configuration this session was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Captures everything a renderer needs.
    pub fn view_state(&self) -> ViewState {
        let legal_targets = match self.selection {
            Some(from) => legal_moves(&self.towers)
                .into_iter()
                .filter(|action| action.from == from)
                .map(|action| action.to)
                .collect(),
            None => Vec::new(),
        };

        ViewState {
            pegs: PegId::ALL.map(|id| self.towers.peg(id).sizes()),
            disk_count: self.towers.disk_count(),
            selection: self.selection,
            legal_targets,
            solved: self.solved,
            timer_running: self.timer.is_running(),
            elapsed_ms: self.timer.elapsed_ms(),
            mode: self.mode,
            phase: self.phase(),
            player_name: self.player_name.clone(),
            leaderboard_top: self
                .leaderboard
                .top(*self.config.leaderboard_preview())
                .to_vec(),
            leaderboard: self.leaderboard.all().to_vec(),
        }
    }
}
