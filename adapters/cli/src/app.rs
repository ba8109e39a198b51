//! Runs a single treasure hunt from input file to result file.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use treasure_hunt_core::Command;
use treasure_hunt_rendering::{RenderingBackend, Scene};
use treasure_hunt_system_export::export;
use treasure_hunt_system_movement::{play, PlaySummary};
use treasure_hunt_system_scenario::parse;
use treasure_hunt_world::{self as world, query};

use crate::{config::Config, Cli};

/// Input file used when neither the flags nor the config name one.
const DEFAULT_INPUT: &str = "Input.txt";
/// Result file used when neither the flags nor the config name one.
const DEFAULT_OUTPUT: &str = "Output.txt";

/// Effective settings after layering flags over the config file.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RunSettings {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) spacing: Option<usize>,
    pub(crate) show_maps: bool,
}

impl RunSettings {
    pub(crate) fn resolve(cli: Cli, config: Config) -> Self {
        Self {
            input: cli
                .input
                .or(config.input)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: cli
                .output
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            spacing: cli.spacing.or(config.spacing),
            show_maps: !cli.quiet && config.show_maps.unwrap_or(true),
        }
    }
}

/// Parses the input, plays every script and writes the result file.
pub(crate) fn run<B>(settings: &RunSettings, backend: &mut B) -> Result<PlaySummary>
where
    B: RenderingBackend,
{
    let contents = fs::read_to_string(&settings.input)
        .with_context(|| format!("failed to read scenario at {}", settings.input.display()))?;
    let mut terrain = parse(contents.lines())
        .with_context(|| format!("invalid scenario {}", settings.input.display()))?;
    tracing::info!(path = %settings.input.display(), "loaded scenario");

    if let Some(spacing) = settings.spacing {
        let mut events = Vec::new();
        world::apply(&mut terrain, Command::ConfigureSpacing { spacing }, &mut events);
        tracing::debug!(spacing = query::spacing(&terrain), "spacing configured");
    }

    if settings.show_maps {
        backend.present(&Scene::from_terrain(&terrain))?;
    }
    let summary = PlaySummary::from_events(&play(&mut terrain));
    if settings.show_maps {
        backend.present(&Scene::from_terrain(&terrain))?;
    }

    let mut result = export(&terrain).join("\n");
    result.push('\n');
    fs::write(&settings.output, result)
        .with_context(|| format!("failed to write result to {}", settings.output.display()))?;
    tracing::info!(path = %settings.output.display(), "wrote result");

    Ok(summary)
}
