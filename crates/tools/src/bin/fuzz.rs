use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use env_logger::{Builder, Env};
use map_core::{ChaChaSource, MapConfig, MapGenerator, check_invariants};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 0)]
    start: u64,
    #[arg(short = 'n', long, default_value_t = 10_000)]
    seeds: u64,
    /// Optional TOML config to fuzz instead of the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .try_init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => MapConfig::load(path)?,
        None => MapConfig::default(),
    };
    let mut generator = MapGenerator::new(config.clone())?;

    println!("Starting fuzz sweep over seeds {}..{}...", args.start, args.start + args.seeds);
    for seed in args.start..args.start + args.seeds {
        let model = generator.generate(&mut ChaChaSource::new(seed));
        if let Err(violation) = check_invariants(model, &config) {
            bail!("Invariant failed on seed {seed}: {violation}");
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
