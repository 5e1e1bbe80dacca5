use anyhow::Result;
use std::time::{Duration, Instant};

use crate::model::clock::{timestamp_millis, SimulationClock, TimeSource, WallClock};
use crate::model::config::AppConfig;
use crate::model::emitter::Emitter;
use crate::model::metrics::Metrics;
use crate::model::orbit_set::OrbitSet;
use crate::model::sink::RecordSink;
use crate::model::star_field::StarField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

/// Owns one simulation: its stars, orbits, clock and output.
pub struct Driver<K, S = WallClock>
where
    S: TimeSource,
{
    pub config: AppConfig,
    pub stars: StarField,
    pub orbits: OrbitSet,
    pub clock: SimulationClock<S>,
    pub emitter: Emitter<K>,
    pub metrics: Metrics,
    pub state: RunState,
}

impl<K: RecordSink + Send> Driver<K, WallClock> {
    pub fn new(config: AppConfig, sink: K) -> Result<Self> {
        Self::with_clock(config, sink, SimulationClock::new())
    }
}

impl<K, S> Driver<K, S>
where
    K: RecordSink + Send,
    S: TimeSource + Send,
{
    /// Validates `config` and builds the star field and orbit set once.
    pub fn with_clock(config: AppConfig, sink: K, clock: SimulationClock<S>) -> Result<Self> {
        config.validate()?;
        let stars = StarField::generate(config.scene.star_count, &config);
        let orbits = OrbitSet::generate(config.scene.orbit_count, &config);
        tracing::info!(
            stars = stars.len(),
            orbits = orbits.len(),
            width = config.scene.width,
            height = config.scene.height,
            seed = ?config.scene.seed,
            "Scene generated"
        );
        let metrics = Metrics::new(config.driver.log_interval);
        Ok(Self {
            config,
            stars,
            orbits,
            clock,
            emitter: Emitter::new(sink),
            metrics,
            state: RunState::Running,
        })
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.driver.tick_interval_ms)
    }

    /// One tick: sample the clock, move the stars, emit the snapshot.
    ///
    /// Returns the scaled delta time that was applied.
    pub async fn step(&mut self) -> Result<f64> {
        let started = Instant::now();
        let delta_time = self.clock.tick();
        let scaled = delta_time * self.config.driver.motion_scale;
        self.stars.update(scaled);
        self.emitter
            .emit(&self.stars, &self.orbits, timestamp_millis())
            .await?;
        self.metrics.record_tick(started.elapsed(), self.stars.len(), delta_time);
        Ok(scaled)
    }

    /// True once `max_ticks` (if any) have been emitted.
    #[must_use]
    pub fn tick_budget_spent(&self) -> bool {
        self.config
            .driver
            .max_ticks
            .is_some_and(|max| self.metrics.tick_count() >= max)
    }
}
