//! Tick statistics for the scene feed.
//!
//! Provides structured logging and counters for monitoring the driver loop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Counters updated once per tick.
pub struct Metrics {
    tick_count: AtomicU64,
    star_count: AtomicU64,
    last_tick_micros: AtomicU64,
    zero_deltas: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Metrics {
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            star_count: AtomicU64::new(0),
            last_tick_micros: AtomicU64::new(0),
            zero_deltas: AtomicU64::new(0),
            log_interval: log_interval.max(1),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, stars: usize, delta_time: f64) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.star_count.store(stars as u64, Ordering::Relaxed);
        self.last_tick_micros.store(duration.as_micros() as u64, Ordering::Relaxed);
        if delta_time == 0.0 && tick > 1 {
            self.zero_deltas.fetch_add(1, Ordering::Relaxed);
        }

        if tick.is_multiple_of(self.log_interval) {
            tracing::info!(
                tick = tick,
                stars = stars,
                delta_time = delta_time,
                duration_us = duration.as_micros() as u64,
                "Scene tick"
            );
        } else {
            tracing::trace!(tick = tick, delta_time = delta_time, "Scene tick");
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn star_count(&self) -> u64 {
        self.star_count.load(Ordering::Relaxed)
    }

    /// Ticks (after the first) whose delta time came out as zero.
    #[must_use]
    pub fn zero_delta_ticks(&self) -> u64 {
        self.zero_deltas.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn last_tick_duration(&self) -> Duration {
        Duration::from_micros(self.last_tick_micros.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Log directive used when `RUST_LOG` is unset. Matches every `cosmos*` target.
pub const DEFAULT_LOG_FILTER: &str = "cosmos=info";

/// Initialize tracing subscriber for logging.
///
/// Output goes to stderr so stdout stays a clean record stream. `RUST_LOG`
/// overrides the default `cosmos=info` filter.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}
