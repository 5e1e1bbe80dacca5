use cosmos_lib::model::config::{AppConfig, Viewport};
use cosmos_lib::model::random::RandomSource;
use cosmos_lib::model::star_field::StarField;
use cosmos_lib::model::Star;

#[allow(dead_code)]
pub struct FieldBuilder {
    config: AppConfig,
    stars: Vec<Star>,
    seed: u64,
}

#[allow(dead_code)]
impl FieldBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            stars: Vec::new(),
            seed: 42,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.config.scene.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn without_jitter(self) -> Self {
        self.with_config(|c| c.stars.heading_jitter = 0.0)
    }

    pub fn with_star(mut self, x: f64, y: f64, speed: f64, angle: f64) -> Self {
        self.stars.push(Star::new(x, y, 1.0, speed, angle));
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Uses the explicit stars if any were added, otherwise generates
    /// `star_count` from the seed.
    pub fn build(self) -> StarField {
        let rng = RandomSource::seeded(self.seed);
        if self.stars.is_empty() {
            StarField::generate_with(
                self.config.scene.star_count,
                self.config.viewport(),
                &self.config.stars,
                rng,
            )
        } else {
            StarField::from_stars(
                self.stars,
                Viewport::new(self.config.scene.width, self.config.scene.height),
                self.config.stars.heading_jitter,
                rng,
            )
        }
    }
}

#[allow(dead_code)]
pub fn quick_config(seed: u64, ticks: Option<u64>) -> AppConfig {
    let mut config = AppConfig::default();
    config.scene.seed = Some(seed);
    config.driver.tick_interval_ms = 1;
    config.driver.max_ticks = ticks;
    config
}
