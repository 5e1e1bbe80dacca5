//! Wall-time delta tracking between ticks.

use chrono::Utc;

/// Source of "now" in seconds. Implementations may go backwards.
pub trait TimeSource {
    fn now_secs(&mut self) -> f64;
}

/// System wall clock; subject to NTP steps and manual adjustments.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn now_secs(&mut self) -> f64 {
        Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }
}

/// Milliseconds since the UNIX epoch, used as the record timestamp.
#[must_use]
pub fn timestamp_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[derive(Debug)]
pub struct SimulationClock<S: TimeSource = WallClock> {
    source: S,
    last: f64,
}

impl SimulationClock<WallClock> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(WallClock)
    }
}

impl Default for SimulationClock<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TimeSource> SimulationClock<S> {
    pub fn with_source(mut source: S) -> Self {
        let last = source.now_secs();
        Self { source, last }
    }

    /// Seconds since the previous call (or construction). Never negative.
    pub fn tick(&mut self) -> f64 {
        let now = self.source.now_secs();
        let delta = now - self.last;
        self.last = now;
        if delta.is_finite() && delta >= 0.0 {
            delta
        } else {
            tracing::warn!(delta, "Clock went backwards, clamping delta to zero");
            0.0
        }
    }
}
