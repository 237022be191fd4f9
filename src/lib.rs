pub mod config;
pub mod entities;
pub mod error;
pub mod generation;
pub mod random;

pub use error::{GaError, Result};
pub use generation::{Population, PopulationSummary};
