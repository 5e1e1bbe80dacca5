//! Configuration management for scene parameters.
//!
//! Every tunable of the simulation lives in [`AppConfig`] and is threaded
//! explicitly into the star field, the orbit set and the driver. Nothing reads
//! viewport size or cadence from globals.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. A TOML file passed on the command line (overrides defaults)
//! 3. Command-line flags (override both)
//!
//! ## Example `cosmos.toml`
//!
//! ```toml
//! [scene]
//! width = 800.0
//! height = 600.0
//! star_count = 150
//! orbit_count = 3
//! seed = 42
//!
//! [stars]
//! heading_jitter = 0.05
//!
//! [driver]
//! tick_interval_ms = 100
//! motion_scale = 10.0
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rectangular domain the stars live in, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Scene-level configuration: viewport and population sizes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub width: f64,
    pub height: f64,
    pub star_count: usize,
    pub orbit_count: usize,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            star_count: 150,
            orbit_count: 3,
            seed: None,
        }
    }
}

/// Ranges for star generation and the per-tick heading perturbation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StarConfig {
    pub min_size: f64,
    pub max_size: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Standard deviation of the heading jitter, in radians.
    pub heading_jitter: f64,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            min_size: 1.0,
            max_size: 4.0,
            min_speed: 0.1,
            max_speed: 1.0,
            heading_jitter: 0.05,
        }
    }
}

/// Orbit layout: `radius = base + i * step`, `speed = constant / radius^exponent`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OrbitConfig {
    pub base_radius: f64,
    pub radius_step: f64,
    pub speed_constant: f64,
    pub speed_exponent: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            base_radius: 50.0,
            radius_step: 50.0,
            speed_constant: 0.5,
            speed_exponent: 1.5,
        }
    }
}

/// Loop cadence and motion scaling.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DriverConfig {
    pub tick_interval_ms: u64,
    /// Multiplier applied to the wall-clock delta before each update.
    pub motion_scale: f64,
    /// Stop after this many ticks; `None` runs until cancelled.
    pub max_ticks: Option<u64>,
    /// Emit a tick summary to the log every N ticks.
    pub log_interval: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            motion_scale: 10.0,
            max_ticks: None,
            log_interval: 100,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub scene: SceneConfig,
    pub stars: StarConfig,
    pub orbits: OrbitConfig,
    pub driver: DriverConfig,
}

impl AppConfig {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scene.width, self.scene.height)
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // Scene validation
        anyhow::ensure!(
            self.scene.width.is_finite() && self.scene.width > 0.0,
            "Viewport width must be positive"
        );
        anyhow::ensure!(
            self.scene.height.is_finite() && self.scene.height > 0.0,
            "Viewport height must be positive"
        );

        // Star validation
        anyhow::ensure!(
            self.stars.min_size >= 0.0 && self.stars.min_size <= self.stars.max_size,
            "Star size range must be non-negative and ordered"
        );
        anyhow::ensure!(
            self.stars.max_size.is_finite(),
            "Star max size must be finite"
        );
        anyhow::ensure!(
            self.stars.min_speed >= 0.0 && self.stars.min_speed <= self.stars.max_speed,
            "Star speed range must be non-negative and ordered"
        );
        anyhow::ensure!(
            self.stars.max_speed.is_finite(),
            "Star max speed must be finite"
        );
        anyhow::ensure!(
            self.stars.heading_jitter.is_finite() && self.stars.heading_jitter >= 0.0,
            "Heading jitter must be non-negative"
        );

        // Orbit validation
        anyhow::ensure!(
            self.orbits.base_radius.is_finite() && self.orbits.base_radius > 0.0,
            "Orbit base radius must be positive"
        );
        anyhow::ensure!(
            self.orbits.radius_step.is_finite() && self.orbits.radius_step >= 0.0,
            "Orbit radius step must be non-negative"
        );
        anyhow::ensure!(
            self.orbits.speed_constant.is_finite(),
            "Orbit speed constant must be finite"
        );
        anyhow::ensure!(
            self.orbits.speed_exponent.is_finite(),
            "Orbit speed exponent must be finite"
        );

        // Driver validation
        anyhow::ensure!(
            self.driver.tick_interval_ms > 0,
            "Tick interval must be positive"
        );
        anyhow::ensure!(
            self.driver.motion_scale.is_finite() && self.driver.motion_scale >= 0.0,
            "Motion scale must be non-negative"
        );
        anyhow::ensure!(self.driver.log_interval > 0, "Log interval must be positive");

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content).context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in {}", path.display()))
    }
}
