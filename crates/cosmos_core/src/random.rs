//! Seeded random draws for generation and heading jitter.
//!
//! One generator is seeded once and reused for every draw of a simulation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Seeds from `seed` when given, otherwise from OS entropy.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self { rng }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::from_seed(Some(seed))
    }

    /// Uniform draw from the closed interval `[lo, hi]`.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform draw from the half-open interval `[lo, hi)`.
    pub fn uniform_half_open(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Normal draw. A zero (or invalid) standard deviation yields `mean`.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        if std_dev == 0.0 {
            return mean;
        }
        match Normal::new(mean, std_dev) {
            Ok(dist) => dist.sample(&mut self.rng),
            Err(_) => mean,
        }
    }
}
