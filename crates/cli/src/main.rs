//! Headless tower run.
//!
//! Usage: `tower-sim [DATA_DIR]`
//!
//! Run settings come from `TOWER_*` environment variables (a `.env` file is
//! honoured). Content is read from `DATA_DIR` when given, falling back to
//! the built-in catalog and names.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tower_content::{ConfigLoader, ContentFactory, EquipmentLoader, NamePool};
use tower_core::{Dude, GameConfig};
use tower_runtime::{RunSummary, SimConfig, Simulation};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let settings = SimConfig::from_env();
    let data_dir = std::env::args().nth(1).map(PathBuf::from);

    let (mut config, catalog, mut names) = match &data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            (
                factory.load_config()?,
                factory.load_equipment()?,
                factory.load_names()?,
            )
        }
        None => (
            GameConfig::default(),
            EquipmentLoader::builtin()?,
            NamePool::builtin(),
        ),
    };
    if let Some(path) = &settings.config_path {
        config = ConfigLoader::load(path)
            .with_context(|| format!("Failed to load game config from {}", path.display()))?;
    }

    let seed = settings.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, catalog = catalog.len(), "starting run");

    let summary = Simulation::new(&settings, config, catalog, &mut names, seed)
        .context("Failed to build the simulation")?
        .run();

    print_summary(&summary);
    Ok(())
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(summary: &RunSummary) {
    println!("seed:     {}", summary.seed);
    println!("outcome:  {}", summary.outcome);
    println!("ticks:    {}", summary.ticks);
    println!("gold:     {}", summary.gold);
    println!("items:    {}", summary.items.len());
    for item in &summary.items {
        println!("  - {} lv{}", item.display_name(), item.level());
    }
    print_roster("survivors", &summary.survivors);
    print_roster("fallen", &summary.fallen);
}

fn print_roster(label: &str, dudes: &[Dude]) {
    println!("{label}: {}", dudes.len());
    for dude in dudes {
        println!(
            "  - {} the {} (level {})",
            dude.name(),
            dude.profession(),
            dude.level()
        );
    }
}
