//! Cosmic scene feed: a drifting star field and concentric orbits,
//! re-emitted as newline-delimited JSON at a fixed cadence.

pub mod app;
pub mod model;

pub use app::{spawn_feed, Driver, RunState, ShutdownManager};
pub use model::config::AppConfig;
