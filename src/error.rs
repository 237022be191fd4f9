use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaError {
    /// The generator failed while filling slot `index` of a generation.
    #[error("Entity creation failed at slot {index}: {source}")]
    EntityCreation {
        index: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GaError>;
