use crate::config::{AppConfig, StarConfig, Viewport};
use crate::random::RandomSource;
use cosmos_data::Star;
use std::f64::consts::{PI, TAU};

/// The set of stars of one simulation, together with the generator that
/// drives their jitter.
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
    viewport: Viewport,
    heading_jitter: f64,
    rng: RandomSource,
}

impl StarField {
    /// Generates `count` stars using the viewport, ranges and seed in `config`.
    #[must_use]
    pub fn generate(count: usize, config: &AppConfig) -> Self {
        Self::generate_with(
            count,
            config.viewport(),
            &config.stars,
            RandomSource::from_seed(config.scene.seed),
        )
    }

    #[must_use]
    pub fn generate_with(
        count: usize,
        viewport: Viewport,
        config: &StarConfig,
        mut rng: RandomSource,
    ) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x: rng.uniform_half_open(0.0, viewport.width),
                y: rng.uniform_half_open(0.0, viewport.height),
                size: rng.uniform(config.min_size, config.max_size),
                speed: rng.uniform(config.min_speed, config.max_speed),
                angle: rng.uniform_half_open(0.0, TAU),
            })
            .collect();
        Self {
            stars,
            viewport,
            heading_jitter: config.heading_jitter,
            rng,
        }
    }

    /// Wraps an existing set of stars.
    #[must_use]
    pub fn from_stars(
        stars: Vec<Star>,
        viewport: Viewport,
        heading_jitter: f64,
        rng: RandomSource,
    ) -> Self {
        Self {
            stars,
            viewport,
            heading_jitter,
            rng,
        }
    }

    /// Advances every star by `delta_time`, bouncing off the viewport edges.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn update(&mut self, delta_time: f64) {
        let dt = if delta_time.is_finite() && delta_time > 0.0 {
            delta_time
        } else {
            0.0
        };
        let viewport = self.viewport;
        for star in &mut self.stars {
            advance(star, dt, viewport);
            star.angle += self.rng.normal(0.0, self.heading_jitter);
        }
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// Moves one star along its heading, then reflects it at the edges.
///
/// The horizontal check runs first and the vertical check sees the angle it
/// produced, so a corner hit turns `a` into `a - PI`.
pub fn advance(star: &mut Star, dt: f64, viewport: Viewport) {
    star.x += star.angle.cos() * star.speed * dt;
    star.y += star.angle.sin() * star.speed * dt;

    if star.x < 0.0 || star.x > viewport.width {
        star.angle = PI - star.angle;
        star.x = star.x.clamp(0.0, viewport.width);
    }

    if star.y < 0.0 || star.y > viewport.height {
        star.angle = -star.angle;
        star.y = star.y.clamp(0.0, viewport.height);
    }
}
