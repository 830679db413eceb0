//! Session timer with an injectable clock.
//!
//! Starting always restarts from zero; there is no pause-and-resume. While
//! running, the elapsed value is `now - started_at`, refreshed on each tick.
//! While stopped it stays frozen at the last computed value.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Source of the current time.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the timer.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Creates a manual clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Start/stop timer measuring one attempt in milliseconds.
#[derive(Debug, Clone)]
pub struct SessionTimer<C: Clock = SystemClock> {
    clock: C,
    running: bool,
    started_at: Option<Instant>,
    elapsed_ms: u64,
}

impl<C: Clock> SessionTimer<C> {
    /// Creates a stopped timer at zero.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            running: false,
            started_at: None,
            elapsed_ms: 0,
        }
    }

    /// Starts the timer from zero, capturing a new start instant.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.started_at = Some(self.clock.now());
        self.elapsed_ms = 0;
        self.running = true;
        debug!("Timer started");
    }

    /// Stops the timer, freezing the elapsed value.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        if self.running {
            self.refresh();
            self.running = false;
            debug!(elapsed_ms = self.elapsed_ms, "Timer stopped");
        }
    }

    /// Recomputes the elapsed value while running; no-op while stopped.
    ///
    /// Returns the current elapsed milliseconds.
    pub fn tick(&mut self) -> u64 {
        if self.running {
            self.refresh();
        }
        self.elapsed_ms
    }

    /// Stops the timer and clears both the start instant and elapsed time.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.running = false;
        self.started_at = None;
        self.elapsed_ms = 0;
    }

    /// Returns true while the timer is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed milliseconds as of the last refresh.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Instant of the most recent start, if any.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    fn refresh(&mut self) {
        if let Some(started_at) = self.started_at {
            let elapsed = self.clock.now().saturating_duration_since(started_at);
            self.elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        }
    }
}

impl Default for SessionTimer<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_timer_is_stopped_at_zero() {
        let timer = SessionTimer::new(ManualClock::new());
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed_ms(), 0);
        assert!(timer.started_at().is_none());
    }

    #[test]
    fn test_tick_tracks_clock_while_running() {
        let clock = ManualClock::new();
        let mut timer = SessionTimer::new(clock.clone());
        timer.start();

        clock.advance(Duration::from_millis(250));
        assert_eq!(timer.tick(), 250);

        clock.advance(Duration::from_millis(100));
        assert_eq!(timer.tick(), 350);
    }

    #[test]
    fn test_tick_while_stopped_is_frozen() {
        let clock = ManualClock::new();
        let mut timer = SessionTimer::new(clock.clone());
        timer.start();
        clock.advance(Duration::from_millis(1_200));
        timer.stop();

        clock.advance(Duration::from_secs(5));
        assert_eq!(timer.tick(), 1_200);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_restart_resets_to_zero() {
        let clock = ManualClock::new();
        let mut timer = SessionTimer::new(clock.clone());
        timer.start();
        clock.advance(Duration::from_millis(900));
        timer.stop();
        assert_eq!(timer.elapsed_ms(), 900);

        timer.start();
        assert_eq!(timer.elapsed_ms(), 0);
        clock.advance(Duration::from_millis(40));
        assert_eq!(timer.tick(), 40);
    }

    #[test]
    fn test_reset_clears_everything() {
        let clock = ManualClock::new();
        let mut timer = SessionTimer::new(clock.clone());
        timer.start();
        clock.advance(Duration::from_millis(10));
        timer.tick();
        timer.reset();

        assert!(!timer.is_running());
        assert_eq!(timer.elapsed_ms(), 0);
        assert!(timer.started_at().is_none());
    }
}
