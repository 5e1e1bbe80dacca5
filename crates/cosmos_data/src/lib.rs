//! Plain data shared by the simulation and the output side.
//!
//! Everything here is serializable and carries no behaviour beyond
//! construction helpers.

use serde::{Deserialize, Serialize};

/// A moving point in the star field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Fixed at creation.
    pub size: f64,
    /// Scalar speed magnitude, fixed at creation.
    pub speed: f64,
    /// Current heading in radians.
    pub angle: f64,
}

impl Star {
    #[must_use]
    pub fn new(x: f64, y: f64, size: f64, speed: f64, angle: f64) -> Self {
        Self {
            x,
            y,
            size,
            speed,
            angle,
        }
    }
}

/// A static ring around the viewport center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orbit {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    /// Angular speed derived from the radius.
    pub speed: f64,
}

/// One tick worth of scene state, borrowed from the simulation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SceneRecord<'a> {
    pub stars: &'a [Star],
    pub orbits: &'a [Orbit],
    /// Milliseconds since the UNIX epoch.
    pub timestamp: i64,
}

/// Owned counterpart of [`SceneRecord`] for consumers parsing the stream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OwnedSceneRecord {
    pub stars: Vec<Star>,
    pub orbits: Vec<Orbit>,
    pub timestamp: i64,
}
