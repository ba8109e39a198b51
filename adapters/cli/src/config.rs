//! Optional TOML configuration layered under the command-line flags.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use treasure_hunt_world::MAX_SPACING;

/// File looked up in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "treasure-hunt.toml";

/// Settings read from a configuration file. Every key is optional.
#[derive(Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) input: Option<PathBuf>,
    pub(crate) output: Option<PathBuf>,
    pub(crate) spacing: Option<usize>,
    pub(crate) show_maps: Option<bool>,
}

impl Config {
    /// Loads the explicit file, or the default file inside `working_dir` when present.
    pub(crate) fn discover(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        let fallback = working_dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_path(&fallback)
        } else {
            Ok(Self::default())
        }
    }

    fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {}", path.display()))?;
        let config = parse_config(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

fn parse_config(contents: &str) -> Result<Config> {
    let config: Config = toml::from_str(contents).context("failed to parse config toml contents")?;
    match config.spacing {
        Some(0) => bail!("spacing must be positive"),
        Some(spacing) if spacing > MAX_SPACING => {
            bail!("spacing {spacing} exceeds the maximum of {MAX_SPACING}")
        }
        _ => {}
    }
    Ok(config)
}
