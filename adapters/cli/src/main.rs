#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays a Treasure Hunt scenario.

mod app;
mod config;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use treasure_hunt_rendering::TextBackend;
use treasure_hunt_world::MAX_SPACING;

use crate::{app::RunSettings, config::Config};

/// Plays a treasure hunt scenario and writes the final board.
#[derive(Debug, Parser)]
#[command(name = "treasure-hunt", version, long_about = None)]
struct Cli {
    /// Scenario file to play [default: Input.txt]
    input: Option<PathBuf>,

    /// Where the final board is written [default: Output.txt]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Blank characters after each map cell; never narrower than the names need
    #[arg(long, value_name = "N", value_parser = parse_spacing)]
    spacing: Option<usize>,

    /// TOML configuration file [default: ./treasure-hunt.toml when present]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not print the map before and after play
    #[arg(short, long)]
    quiet: bool,
}

fn parse_spacing(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("spacing must be positive".to_owned()),
        Ok(spacing) if spacing > MAX_SPACING => {
            Err(format!("spacing must be at most {MAX_SPACING}"))
        }
        Ok(spacing) => Ok(spacing),
        Err(error) => Err(error.to_string()),
    }
}

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "info";

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Entry point for the Treasure Hunt command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let working_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let config = Config::discover(cli.config.as_deref(), &working_dir)?;
    let settings = RunSettings::resolve(cli, config);

    let mut backend = TextBackend::new(io::stdout().lock());
    let summary = app::run(&settings, &mut backend)?;
    tracing::debug!(?summary, "treasure hunt complete");
    Ok(())
}
