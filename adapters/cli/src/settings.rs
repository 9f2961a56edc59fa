//! Loading session configuration and parsing direction lists.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use hexmaze_core::{Direction, DirectionSet};
use hexmaze_world::Config;

/// Reads the configuration file when one is given, falling back to the
/// built-in campaign, then applies the seed override.
pub(crate) fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            parse_config(&contents)
                .with_context(|| format!("invalid config file {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    config.validate().context("configuration rejected")?;
    Ok(config)
}

fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).context("failed to parse configuration TOML")
}

/// Parses one direction name as accepted by `--hold`.
pub(crate) fn parse_direction(name: &str) -> Result<Direction, String> {
    match name.trim().to_ascii_lowercase().as_str() {
        "n" | "north" | "up" => Ok(Direction::North),
        "e" | "east" | "right" => Ok(Direction::East),
        "s" | "south" | "down" => Ok(Direction::South),
        "w" | "west" | "left" => Ok(Direction::West),
        other => Err(format!("unknown direction '{other}'")),
    }
}

/// Collects the directions held during a simulation.
pub(crate) fn held_directions(directions: &[Direction]) -> Result<DirectionSet> {
    let held: DirectionSet = directions.iter().copied().collect();
    if !directions.is_empty() && held.axis() == (0.0, 0.0) {
        bail!("held directions cancel each other out");
    }
    Ok(held)
}
