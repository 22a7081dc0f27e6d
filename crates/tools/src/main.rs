use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use map_core::{ChaChaSource, MapConfig, MapGenerator, check_invariants};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Summary,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the map; a runtime seed is generated and printed when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Path to a TOML file overriding the default generation constants
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Write the JSON export here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => MapConfig::load(path)
            .with_context(|| format!("Failed to load map config: {}", path.display()))?,
        None => MapConfig::default(),
    };
    let mut rng = match args.seed {
        Some(seed) => ChaChaSource::new(seed),
        None => ChaChaSource::from_runtime_seed(),
    };
    log::info!("using seed {}", rng.seed());

    let mut generator = MapGenerator::new(config).context("Invalid map config")?;
    generator.generate(&mut rng);
    check_invariants(generator.model(), generator.config())
        .context("Generated map violates an invariant")?;

    let export = generator.export();
    match args.format {
        OutputFormat::Json => {
            let json = export.to_json_pretty().context("Failed to serialize map export")?;
            match &args.output {
                Some(path) => fs::write(path, json)
                    .with_context(|| format!("Failed to write export: {}", path.display()))?,
                None => println!("{json}"),
            }
        }
        OutputFormat::Summary => {
            println!("Seed: {}", rng.seed());
            for line in generator.model().floor_summary().iter().rev() {
                println!("{line}");
            }
            println!("Fingerprint: {:016x}", export.fingerprint());
        }
    }

    Ok(())
}
