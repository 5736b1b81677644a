mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use log::info;
use mazegen::{GeneratorConfig, LevelRequest, MazeGenerator, SeedInput};

use render::render_ascii;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Realm number; selects the carving algorithm
    #[arg(short, long, default_value_t = 1)]
    realm: u32,
    /// Level within the realm; grows the grid
    #[arg(short, long, default_value_t = 1)]
    level: u32,
    /// Integer or free-text seed; defaults to the wall clock
    #[arg(short, long)]
    seed: Option<String>,
    /// Path to a TOML generator config
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
}

fn parse_seed(raw: &str) -> SeedInput {
    raw.parse::<i64>().map_or_else(|_| SeedInput::from(raw), SeedInput::Numeric)
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load generator config: {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    let seed = args.seed.as_deref().map_or_else(SeedInput::from_wall_clock, parse_seed);
    let request = LevelRequest { realm: args.realm, level: args.level, seed };

    let level = MazeGenerator::new(config).generate(&request);
    info!("generated {} level {}x{} with seed {}", level.mode, level.width, level.height, level.seed);

    match args.format {
        OutputFormat::Ascii => print!("{}", render_ascii(&level)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&level)
                .with_context(|| "Failed to serialize level descriptor")?;
            println!("{json}");
        }
    }

    Ok(())
}
