//! Session configuration and its validation.

use hexmaze_core::{default_levels, LevelConfig, DEFAULT_MAZE_COLUMNS, DEFAULT_MAZE_ROWS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_SEED: u64 = 0x4845_585f_4d41_5a45;
const MIN_MAZE_EXTENT: u32 = 5;
const MIN_COMPLEXITY: u8 = 1;
const MAX_COMPLEXITY: u8 = 3;

/// Parameters that shape a whole session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed of the session's random number generator.
    pub seed: u64,
    /// Number of maze columns, odd and at least five.
    pub maze_columns: u32,
    /// Number of maze rows, odd and at least five.
    pub maze_rows: u32,
    /// Campaign levels in play order.
    pub levels: Vec<LevelConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            maze_columns: DEFAULT_MAZE_COLUMNS,
            maze_rows: DEFAULT_MAZE_ROWS,
            levels: default_levels(),
        }
    }
}

impl Config {
    /// Returns a copy of the configuration using the provided seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }

        if self.maze_columns < MIN_MAZE_EXTENT || self.maze_rows < MIN_MAZE_EXTENT {
            return Err(ConfigError::MazeTooSmall {
                columns: self.maze_columns,
                rows: self.maze_rows,
            });
        }

        if self.maze_columns % 2 == 0 || self.maze_rows % 2 == 0 {
            return Err(ConfigError::EvenDimension {
                columns: self.maze_columns,
                rows: self.maze_rows,
            });
        }

        for (index, level) in self.levels.iter().enumerate() {
            let number = index + 1;
            if !(MIN_COMPLEXITY..=MAX_COMPLEXITY).contains(&level.complexity) {
                return Err(ConfigError::InvalidComplexity {
                    level: number,
                    complexity: level.complexity,
                });
            }
            if level.time_limit_secs == 0 {
                return Err(ConfigError::ZeroTimeLimit { level: number });
            }
        }

        Ok(())
    }
}

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The campaign contains no level.
    #[error("at least one level must be configured")]
    NoLevels,
    /// A level's complexity tier lies outside `1..=3`.
    #[error("level {level} has complexity {complexity}, expected 1 to 3")]
    InvalidComplexity {
        /// One-based level number.
        level: usize,
        /// Offending tier.
        complexity: u8,
    },
    /// A level has no time to play.
    #[error("level {level} has a zero time limit")]
    ZeroTimeLimit {
        /// One-based level number.
        level: usize,
    },
    /// The maze cannot hold a start, a goal and a border.
    #[error("maze of {columns}x{rows} cells is smaller than 5x5")]
    MazeTooSmall {
        /// Configured columns.
        columns: u32,
        /// Configured rows.
        rows: u32,
    },
    /// Even extents leave the goal off the carving lattice.
    #[error("maze dimensions must be odd (got {columns}x{rows})")]
    EvenDimension {
        /// Configured columns.
        columns: u32,
        /// Configured rows.
        rows: u32,
    },
}
