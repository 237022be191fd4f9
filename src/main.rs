use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use deluge::{
    config::ConfigManager,
    entities::{params_generator, Params},
    generation::{LogProgressCallback, Population},
    random::UniformSource,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Fill and refill a population of random parameter pairs")]
struct Cli {
    /// TOML configuration file; DELUGE_* environment variables override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override population size
    #[arg(long)]
    size: Option<usize>,

    /// Override the sampling seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override how many times the population is refilled
    #[arg(long)]
    regenerate: Option<usize>,

    /// Print the effective configuration, field by field, and exit
    #[arg(long)]
    list_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut manager = ConfigManager::new();
    if let Some(path) = &cli.config {
        manager
            .load_layered(path)
            .with_context(|| format!("loading {}", path.display()))?;
    }
    manager.update(|config| {
        if let Some(size) = cli.size {
            config.population.size = size;
        }
        if let Some(seed) = cli.seed {
            config.sampling.seed = Some(seed);
        }
        if let Some(regenerations) = cli.regenerate {
            config.population.regenerations = regenerations;
        }
    })?;
    let config = manager.get();

    if cli.list_config {
        println!("{}", config.manifest_json()?);
        return Ok(());
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let source = UniformSource::from_config(&config.sampling)?;
    info!(
        "Sampling parameters uniformly from [{}, {}]",
        config.sampling.range_min, config.sampling.range_max
    );

    let mut population: Population<Params> = Population::with_progress(
        config.population.size,
        params_generator(source),
        LogProgressCallback::new(),
    )?;

    for _ in 0..config.population.regenerations {
        population.regenerate(config.population.size)?;
    }

    println!("{}", serde_json::to_string_pretty(&population.summary())?);
    Ok(())
}
