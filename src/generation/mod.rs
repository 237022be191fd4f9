pub mod population;
pub mod progress;

pub use population::{Population, PopulationSummary};
pub use progress::{LogProgressCallback, ProgressCallback, SilentProgress};
