use super::traits::{ConfigSection, FieldManifest};
use crate::error::GaError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RANGE_MIN: f64 = -100_000.0;
pub const DEFAULT_RANGE_MAX: f64 = 100_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub range_min: f64,
    pub range_max: f64,
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            range_min: DEFAULT_RANGE_MIN,
            range_max: DEFAULT_RANGE_MAX,
            seed: None,
        }
    }
}

impl ConfigSection for SamplingConfig {
    fn section_name() -> &'static str {
        "sampling"
    }

    fn validate(&self) -> Result<(), GaError> {
        if !self.range_min.is_finite() || !self.range_max.is_finite() {
            return Err(GaError::Configuration(
                "Sampling range bounds must be finite".to_string(),
            ));
        }
        if self.range_min > self.range_max {
            return Err(GaError::Configuration(format!(
                "Sampling range_min ({}) must not exceed range_max ({})",
                self.range_min, self.range_max
            )));
        }
        if !(self.range_max - self.range_min).is_finite() {
            return Err(GaError::Configuration(format!(
                "Sampling range [{}, {}] is wider than an f64 can hold",
                self.range_min, self.range_max
            )));
        }
        Ok(())
    }

    fn fields(&self) -> Vec<FieldManifest> {
        let defaults = Self::default();
        vec![
            FieldManifest::new(
                "range_min",
                "float",
                serde_json::json!(defaults.range_min),
                serde_json::json!(self.range_min),
                "Lower inclusive bound of generated parameters",
            ),
            FieldManifest::new(
                "range_max",
                "float",
                serde_json::json!(defaults.range_max),
                serde_json::json!(self.range_max),
                "Upper inclusive bound of generated parameters",
            ),
            FieldManifest::new(
                "seed",
                "integer",
                serde_json::json!(defaults.seed),
                serde_json::json!(self.seed),
                "Random seed, omitted for a fresh entropy seed",
            ),
        ]
    }
}
