use super::{
    logging::LoggingConfig,
    population::PopulationConfig,
    sampling::SamplingConfig,
    traits::{ConfigManifest, ConfigSection},
};
use crate::error::GaError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment variables that override file settings,
/// e.g. `DELUGE_POPULATION__SIZE=250`.
pub const ENV_PREFIX: &str = "DELUGE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub population: PopulationConfig,
    pub sampling: SamplingConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GaError> {
        self.population.validate()?;
        self.sampling.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    pub fn manifests(&self) -> Vec<ConfigManifest> {
        vec![
            self.population.to_manifest(),
            self.sampling.to_manifest(),
            self.logging.to_manifest(),
        ]
    }

    /// Every section's fields with their defaults and current values, as JSON.
    pub fn manifest_json(&self) -> Result<String, GaError> {
        Ok(serde_json::to_string_pretty(&self.manifests())?)
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), GaError> {
        let contents = std::fs::read_to_string(path)?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| GaError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    /// Load `path`, then apply `DELUGE_*` environment overrides on top.
    pub fn load_layered<P: AsRef<Path>>(&mut self, path: P) -> Result<(), GaError> {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(true))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|layered| layered.try_deserialize::<AppConfig>())
            .map_err(|e| GaError::Configuration(format!("Failed to load config: {}", e)))?;

        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GaError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| GaError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Apply `f` to the current configuration. The change is kept only if it validates.
    pub fn update<F>(&mut self, f: F) -> Result<(), GaError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
