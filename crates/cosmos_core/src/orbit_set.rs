use crate::config::{AppConfig, OrbitConfig, Viewport};
use cosmos_data::Orbit;

/// Concentric rings around the viewport center. Never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSet {
    orbits: Vec<Orbit>,
}

impl OrbitSet {
    #[must_use]
    pub fn generate(count: usize, config: &AppConfig) -> Self {
        Self::generate_with(count, config.viewport(), &config.orbits)
    }

    /// Ring `i` has radius `base + i * step` and angular speed
    /// `constant / radius^exponent`.
    #[must_use]
    pub fn generate_with(count: usize, viewport: Viewport, config: &OrbitConfig) -> Self {
        let (center_x, center_y) = viewport.center();
        let orbits = (0..count)
            .map(|i| {
                let radius = config.base_radius + i as f64 * config.radius_step;
                Orbit {
                    center_x,
                    center_y,
                    radius,
                    speed: config.speed_constant / radius.powf(config.speed_exponent),
                }
            })
            .collect();
        Self { orbits }
    }

    #[must_use]
    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }
}
