use crate::config::SamplingConfig;
use crate::error::GaError;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Draws reals uniformly from the inclusive range `[min, max]`.
pub struct UniformSource {
    min: f64,
    max: f64,
    distribution: Uniform<f64>,
    rng: StdRng,
}

impl UniformSource {
    pub fn new(min: f64, max: f64, seed: Option<u64>) -> Result<Self, GaError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(GaError::Configuration(
                "Uniform range bounds must be finite".to_string(),
            ));
        }
        if min > max {
            return Err(GaError::Configuration(format!(
                "Uniform range is empty: {} > {}",
                min, max
            )));
        }
        // rand panics when the width itself is not representable.
        if !(max - min).is_finite() {
            return Err(GaError::Configuration(format!(
                "Uniform range [{}, {}] is too wide to sample",
                min, max
            )));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            min,
            max,
            distribution: Uniform::new_inclusive(min, max),
            rng,
        })
    }

    pub fn from_config(config: &SamplingConfig) -> Result<Self, GaError> {
        Self::new(config.range_min, config.range_max, config.seed)
    }

    pub fn sample(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}
