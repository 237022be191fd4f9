use super::traits::{ConfigSection, FieldManifest};
use crate::error::GaError;
use serde::{Deserialize, Serialize};

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ConfigSection for LoggingConfig {
    fn section_name() -> &'static str {
        "logging"
    }

    fn validate(&self) -> Result<(), GaError> {
        let level = self.level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(GaError::Configuration(format!(
                "Unknown log level '{}', expected one of {}",
                self.level,
                LEVELS.join(", ")
            )));
        }
        Ok(())
    }

    fn fields(&self) -> Vec<FieldManifest> {
        vec![FieldManifest::new(
            "level",
            "string",
            serde_json::json!(Self::default().level),
            serde_json::json!(self.level),
            "Log level used when RUST_LOG is not set",
        )]
    }
}
