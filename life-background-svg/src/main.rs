#![deny(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use life_background::{generate_background, time_ago, BackgroundConfig, Random, SvgSurface};
use log::info;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "life-background-svg", about = "Render a Game of Life background as SVG")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Grid width in cells
    #[arg(long, default_value_t = 64)]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value_t = 36)]
    height: u32,

    #[arg(long, default_value_t = life_background::config::DEFAULT_GENERATIONS)]
    generations: u32,

    /// Seed for a reproducible picture
    #[arg(long)]
    seed: Option<u64>,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print how long ago an RFC 3339 timestamp was
    Ago { timestamp: String },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(Command::Ago { timestamp }) = &cli.command {
        let past = DateTime::parse_from_rfc3339(timestamp)
            .with_context(|| format!("Invalid timestamp {timestamp:?}"))?
            .with_timezone(&Utc);
        println!("{}", time_ago(past));
        return Ok(());
    }

    let config = BackgroundConfig {
        generations: cli.generations,
        ..BackgroundConfig::default()
    };
    let mut rand = match cli.seed {
        Some(seed) => Random::from_seed(seed),
        None => Random::new(),
    };
    let mut surface = SvgSurface::with_style(config.style.clone());
    generate_background(cli.width, cli.height, &mut surface, &config, &mut rand)?;
    info!(
        "Drew {} shapes in {} clusters",
        surface.num_elements(),
        surface.groups().len()
    );

    match &cli.output {
        Some(path) => fs::write(path, surface.to_string())
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{surface}"),
    }
    Ok(())
}
