//! # Cosmos Core
//!
//! Simulation logic for the cosmic scene feed: a field of drifting stars
//! bouncing inside a rectangular viewport and a fixed set of concentric
//! orbits around its center.
//!
//! ## Example
//!
//! ```
//! use cosmos_core::config::AppConfig;
//! use cosmos_core::orbit_set::OrbitSet;
//! use cosmos_core::star_field::StarField;
//!
//! let mut config = AppConfig::default();
//! config.scene.seed = Some(42);
//!
//! let mut stars = StarField::generate(config.scene.star_count, &config);
//! let orbits = OrbitSet::generate(config.scene.orbit_count, &config);
//!
//! stars.update(0.1 * config.driver.motion_scale);
//! assert_eq!(stars.len(), 150);
//! assert_eq!(orbits.len(), 3);
//! ```

/// Wall-time delta tracking between ticks
pub mod clock;
/// Configuration management for simulation parameters
pub mod config;
/// Tick statistics and logging setup
pub mod metrics;
/// Orbit ring generation
pub mod orbit_set;
/// Seeded random draws
pub mod random;
/// Star generation and per-tick motion
pub mod star_field;

pub use clock::{SimulationClock, TimeSource, WallClock};
pub use config::{AppConfig, Viewport};
pub use cosmos_data::{Orbit, Star};
pub use metrics::{init_logging, Metrics};
pub use orbit_set::OrbitSet;
pub use random::RandomSource;
pub use star_field::StarField;
