//! Countdown timer with a single periodic tick source

use std::time::Duration;
use tokio::{
    sync::watch,
    time::{interval_at, Instant, Interval},
};
use tracing::debug;

use crate::utils::time_format::{format_duration, ZERO_TIME};

/// Period between two decrements
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Remaining-time countdown that publishes a formatted `MM:SS` string on
/// every tick.
///
/// The timer is idle while `ticker` is `None`. Only one tick source exists at
/// a time: `start` drops any previous one before installing its own.
#[derive(Debug)]
pub struct CountdownTimer {
    remaining_seconds: u64,
    period: Duration,
    ticker: Option<Interval>,
    updates: watch::Sender<String>,
}

impl CountdownTimer {
    /// Create an idle timer ticking once per second
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// Create an idle timer with a custom tick period
    pub fn with_period(period: Duration) -> Self {
        let (updates, _) = watch::channel(ZERO_TIME.to_string());
        Self {
            remaining_seconds: 0,
            period,
            ticker: None,
            updates,
        }
    }

    /// Receive the formatted remaining time after every tick
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.updates.subscribe()
    }

    /// Load `duration_seconds` and begin ticking one period from now.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&mut self, duration_seconds: u64) {
        if self.ticker.take().is_some() {
            debug!("Replacing active countdown with a new one");
        }

        self.remaining_seconds = duration_seconds;
        self.ticker = Some(interval_at(Instant::now() + self.period, self.period));
        debug!("Countdown started from {}s", duration_seconds);
    }

    /// Cancel the tick source, keeping the remaining time for a later resume
    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            debug!("Countdown stopped with {}s remaining", self.remaining_seconds);
        }
    }

    /// Zero the remaining time. An active tick source keeps running.
    pub fn clear(&mut self) {
        self.remaining_seconds = 0;
    }

    pub fn is_active(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn format_duration(&self, seconds: u64) -> String {
        format_duration(seconds)
    }

    /// Advance the countdown by one tick.
    ///
    /// Publishes exactly one update per tick while active. Reaching zero
    /// publishes `"00:00"` and stops the tick source. Does nothing when idle.
    pub fn tick(&mut self) {
        if !self.is_active() {
            return;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.stop();
            debug!("Countdown reached zero");
        }

        self.updates.send_replace(format_duration(self.remaining_seconds));
    }

    /// Resolve when the active tick source fires. Pends forever while idle.
    pub async fn next_tick(&mut self) {
        match self.ticker.as_mut() {
            Some(ticker) => {
                ticker.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}
