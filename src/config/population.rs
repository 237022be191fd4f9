use super::traits::{ConfigSection, FieldManifest};
use crate::error::GaError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Number of entities per generation
    pub size: usize,
    /// How many times the driver refills the population after the first fill
    pub regenerations: usize,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: 100,
            regenerations: 0,
        }
    }
}

impl ConfigSection for PopulationConfig {
    fn section_name() -> &'static str {
        "population"
    }

    // Any size is acceptable, zero included.
    fn validate(&self) -> Result<(), GaError> {
        Ok(())
    }

    fn fields(&self) -> Vec<FieldManifest> {
        let defaults = Self::default();
        vec![
            FieldManifest::new(
                "size",
                "integer",
                serde_json::json!(defaults.size),
                serde_json::json!(self.size),
                "Number of entities in each generation",
            )
            .with_min(0.0),
            FieldManifest::new(
                "regenerations",
                "integer",
                serde_json::json!(defaults.regenerations),
                serde_json::json!(self.regenerations),
                "Number of full refills after the initial generation",
            )
            .with_min(0.0),
        ]
    }
}
