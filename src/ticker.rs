//! Cancellable repeating tick for the session timer.
//!
//! The interval only exists while the timer runs. Dropping it on stop (or
//! with the ticker itself on teardown) guarantees no tick fires afterwards.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::{debug, instrument};

/// Repeating tick that can be armed and cancelled.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    interval: Option<Interval>,
}

impl Ticker {
    /// Creates a disarmed ticker with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    /// Arms the ticker. The first tick fires one period from now.
    #[instrument(skip(self), fields(period_ms = self.period.as_millis() as u64))]
    pub fn arm(&mut self) {
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
        debug!("Ticker armed");
    }

    /// Disarms the ticker; pending and future ticks are dropped.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        if self.interval.take().is_some() {
            debug!("Ticker cancelled");
        }
    }

    /// Arms or cancels to match whether the timer is running.
    pub fn sync(&mut self, running: bool) {
        match (running, self.is_armed()) {
            (true, false) => self.arm(),
            (false, true) => self.cancel(),
            _ => {}
        }
    }

    /// Returns true while ticks are scheduled.
    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Waits for the next tick. Never resolves while disarmed.
    ///
    /// Cancel-safe, so it can sit in a `tokio::select!` loop.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_armed_ticker_fires_each_period() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.arm();

        let start = Instant::now();
        ticker.tick().await;
        ticker.tick().await;
        assert_eq!(start.elapsed(), Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarmed_ticker_never_fires() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        ticker.arm();
        ticker.cancel();

        let fired = tokio::time::timeout(Duration::from_secs(5), ticker.tick()).await;
        assert!(fired.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_follows_running_flag() {
        let mut ticker = Ticker::new(Duration::from_millis(50));
        ticker.sync(true);
        assert!(ticker.is_armed());
        ticker.sync(true);
        assert!(ticker.is_armed());
        ticker.sync(false);
        assert!(!ticker.is_armed());
    }
}
