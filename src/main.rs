use anyhow::Result;
use clap::Parser;
use cosmos_lib::app::{Driver, ShutdownManager};
use cosmos_lib::model::config::AppConfig;
use cosmos_lib::model::metrics::init_logging;
use cosmos_lib::model::sink::WriterSink;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML config file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible scenes
    #[arg(long)]
    seed: Option<u64>,

    /// Number of stars
    #[arg(long)]
    stars: Option<usize>,

    /// Number of orbits
    #[arg(long)]
    orbits: Option<usize>,

    /// Stop after emitting this many records
    #[arg(long)]
    ticks: Option<u64>,
}

impl Args {
    fn into_config(self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if self.seed.is_some() {
            config.scene.seed = self.seed;
        }
        if let Some(stars) = self.stars {
            config.scene.star_count = stars;
        }
        if let Some(orbits) = self.orbits {
            config.scene.orbit_count = orbits;
        }
        if self.ticks.is_some() {
            config.driver.max_ticks = self.ticks;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let config = Args::parse().into_config()?;

    let shutdown = ShutdownManager::new();
    shutdown.install_ctrl_c();

    let mut driver = Driver::new(config, WriterSink::stdout())?;
    driver.run(&shutdown).await?;
    Ok(())
}
