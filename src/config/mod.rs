pub mod traits;
pub mod population;
pub mod sampling;
pub mod logging;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use population::PopulationConfig;
pub use sampling::SamplingConfig;
pub use logging::LoggingConfig;
