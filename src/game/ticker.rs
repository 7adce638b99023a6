//! Periodic tick source driving the engine.
//!
//! The engine only talks to the [`Ticker`] trait. It holds a single ticker and
//! always stops it before starting it again, so at most one tick stream is
//! live at any time.

use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// A repeating timer that can be started and cancelled
pub trait Ticker {
    /// Begin ticking every `period`, replacing any running schedule.
    /// The first tick fires one full period after the call.
    fn start(&mut self, period: Duration);

    /// Cancel ticking. Ticks that were due but not yet delivered are dropped.
    fn stop(&mut self);

    fn is_active(&self) -> bool;
}

/// Ticker backed by a tokio interval
#[derive(Debug, Default)]
pub struct TokioTicker {
    interval: Option<Interval>,
}

impl TokioTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Period of the running schedule, if any
    pub fn period(&self) -> Option<Duration> {
        self.interval.as_ref().map(Interval::period)
    }

    /// Wait for the next tick. Never resolves while stopped.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Ticker for TokioTicker {
    fn start(&mut self, period: Duration) {
        self.stop();
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn stop(&mut self) {
        self.interval = None;
    }

    fn is_active(&self) -> bool {
        self.interval.is_some()
    }
}

/// Ticker that only records what it was asked to do.
///
/// Used to drive the engine by hand, calling `tick()` directly.
#[derive(Debug, Default, Clone)]
pub struct ManualTicker {
    period: Option<Duration>,
    /// Number of `start` calls
    pub starts: usize,
    /// Number of `stop` calls
    pub stops: usize,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Period of the running schedule, if any
    pub fn period(&self) -> Option<Duration> {
        self.period
    }
}

impl Ticker for ManualTicker {
    fn start(&mut self, period: Duration) {
        self.stop();
        self.starts += 1;
        self.period = Some(period);
    }

    fn stop(&mut self) {
        self.stops += 1;
        self.period = None;
    }

    fn is_active(&self) -> bool {
        self.period.is_some()
    }
}
