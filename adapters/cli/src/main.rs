#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that previews HEX maze levels and runs headless
//! simulations.

mod render;
mod settings;

use std::{collections::BTreeMap, path::PathBuf, time::Duration};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hexmaze_core::{Command as WorldCommand, Direction, Event, FrameInput};
use hexmaze_world::{self as world, query, World};

/// Headless driver for the HEX maze engine.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file describing the seed, maze size and campaign levels.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overrides the seed of the configuration.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Enables debug logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Prints the generated maze of a level with its mini-games and hazards.
    Maze {
        /// One-based level number.
        #[arg(short, long, default_value_t = 1)]
        level: u32,

        /// Emits the level snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Starts a game and advances it by a fixed number of ticks.
    Simulate {
        /// Number of ticks to run.
        #[arg(short, long)]
        ticks: u64,

        /// Simulated milliseconds per tick.
        #[arg(long, default_value_t = 16)]
        tick_ms: u64,

        /// Directions held on every tick, e.g. `east,south`.
        #[arg(long, value_delimiter = ',', value_parser = settings::parse_direction)]
        hold: Vec<Direction>,

        /// Emits the final snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = settings::load_config(cli.config.as_deref(), cli.seed)?;
    log::info!(
        "seed {} with {} levels on a {}x{} maze",
        config.seed,
        config.levels.len(),
        config.maze_columns,
        config.maze_rows,
    );

    match cli.command {
        CliCommand::Maze { level, json } => {
            let Some(snapshot) = world::preview_level(&config, level) else {
                bail!(
                    "level {level} does not exist, the campaign has {} levels",
                    config.levels.len()
                );
            };
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&snapshot).context("failed to encode level")?
                );
            } else {
                print!("{}", render::level(&snapshot));
            }
        }
        CliCommand::Simulate {
            ticks,
            tick_ms,
            hold,
            json,
        } => {
            if tick_ms == 0 {
                bail!("--tick-ms must be positive");
            }
            let held = settings::held_directions(&hold)?;
            let mut world = World::with_config(config).context("configuration rejected")?;
            let mut events = Vec::new();
            world::apply(&mut world, WorldCommand::StartGame, &mut events);

            let mut tally: BTreeMap<&'static str, u64> = BTreeMap::new();
            let dt = Duration::from_millis(tick_ms);
            for _ in 0..ticks {
                world::apply(
                    &mut world,
                    WorldCommand::Tick {
                        dt,
                        input: FrameInput::holding(held),
                    },
                    &mut events,
                );
                for event in events.drain(..) {
                    log::debug!("{event:?}");
                    *tally.entry(event_name(&event)).or_default() += 1;
                }
            }

            let snapshot = query::snapshot(&world);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&snapshot).context("failed to encode snapshot")?
                );
            } else {
                print!("{}", render::summary(&snapshot, query::tick_index(&world)));
                for (name, count) in &tally {
                    println!("  {name}: {count}");
                }
            }
        }
    }

    Ok(())
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::TimeAdvanced { .. } => "time advanced",
        Event::PlayModeChanged { .. } => "play mode changed",
        Event::LevelStarted { .. } => "level started",
        Event::PlayerMoved { .. } => "player moved",
        Event::PlayerHit { .. } => "player hit",
        Event::MovingWallAdvanced { .. } => "moving wall advanced",
        Event::GlitchZoneToggled { .. } => "glitch zone toggled",
        Event::MiniGameStarted { .. } => "mini-game started",
        Event::MiniGameCompleted { .. } => "mini-game completed",
        Event::MiniGameFailed { .. } => "mini-game failed",
        Event::ScoreAwarded { .. } => "score awarded",
        Event::LevelCompleted { .. } => "level completed",
        Event::GameOver { .. } => "game over",
        Event::GameCompleted { .. } => "game completed",
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_line_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn simulate_arguments_parse() {
        let cli = Cli::try_parse_from([
            "hexmaze",
            "--seed",
            "7",
            "simulate",
            "--ticks",
            "120",
            "--hold",
            "east,south",
        ])
        .expect("valid arguments");
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            CliCommand::Simulate {
                ticks,
                tick_ms,
                hold,
                json,
            } => {
                assert_eq!(ticks, 120);
                assert_eq!(tick_ms, 16);
                assert_eq!(hold, vec![Direction::East, Direction::South]);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_directions_are_rejected() {
        let result = Cli::try_parse_from([
            "hexmaze",
            "simulate",
            "--ticks",
            "1",
            "--hold",
            "up,sideways",
        ]);
        assert!(result.is_err());
    }
}
