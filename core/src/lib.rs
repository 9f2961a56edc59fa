#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the HEX maze engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! carrying elapsed time and the logical input of a frame, the world executes
//! those commands via its `apply` entry point, and then broadcasts [`Event`]
//! values describing what changed. Systems operate on the plain data types
//! declared here and return new values rather than mutating shared state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

mod actors;
mod input;
mod level;
mod maze;
mod minigame;
mod snapshot;

pub use actors::{GlitchZone, Hazards, MovingWall, Player};
pub use input::{Action, DirectionSet, FrameInput};
pub use level::{default_levels, LevelConfig};
pub use maze::{Cell, Maze};
pub use minigame::{
    AccessCode, ActiveMiniGame, BinaryPuzzle, CircuitPuzzle, Connection, HackingPuzzle,
    LaserBeam, LaserPuzzle, MemoryPuzzle, MiniGameInstance, MiniGameKind, PowerUp, PowerUpKind,
    Puzzle,
};
pub use snapshot::{GameSnapshot, LevelSnapshot};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "HEX: cyberpunk maze protocol online.";

/// Side length of a single maze cell measured in world units.
pub const CELL_SIZE: f32 = 30.0;

/// Default number of maze columns.
pub const DEFAULT_MAZE_COLUMNS: u32 = 25;

/// Default number of maze rows.
pub const DEFAULT_MAZE_ROWS: u32 = 19;

/// Cell in which the player spawns at the start of every level.
pub const START_CELL: CellCoord = CellCoord::new(1, 1);

/// Energy the player starts every level with.
pub const MAX_ENERGY: u32 = 100;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Splits accumulated time into whole periods and the leftover remainder.
///
/// A zero period yields no periods and keeps the accumulated time.
#[must_use]
pub fn whole_periods(elapsed: Duration, period: Duration) -> (u128, Duration) {
    let period_nanos = period.as_nanos();
    if period_nanos == 0 {
        return (0, elapsed);
    }
    let elapsed_nanos = elapsed.as_nanos();
    let remainder = elapsed_nanos % period_nanos;
    let secs = u64::try_from(remainder / NANOS_PER_SEC).unwrap_or(u64::MAX);
    let nanos = u32::try_from(remainder % NANOS_PER_SEC).unwrap_or(0);
    (elapsed_nanos / period_nanos, Duration::new(secs, nanos))
}

/// Describes the active mode of the game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayMode {
    /// Title screen; no level is loaded.
    Menu,
    /// The player explores the maze and the countdown runs.
    Playing,
    /// Simulation is frozen until the player resumes.
    Paused,
    /// A mini-game attempt is in progress.
    MiniGame,
    /// The level was cleared and the next one loads after a short delay.
    LevelComplete,
    /// The session ended in defeat.
    GameOver,
    /// The final level was cleared.
    GameComplete,
}

impl PlayMode {
    /// Reports whether the mode ends the session until an explicit restart.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver | Self::GameComplete)
    }
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Starts a fresh campaign from the first level.
    StartGame,
    /// Abandons the current session and returns to the menu.
    Restart,
    /// Advances the simulation by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
        /// Logical input that was active during the tick.
        input: FrameInput,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Announces that the session entered a new play mode.
    PlayModeChanged {
        /// Mode that became active after processing the command.
        mode: PlayMode,
    },
    /// Announces that a level was generated and is ready to be played.
    LevelStarted {
        /// One-based number of the level.
        level: u32,
        /// Cell the player has to reach.
        goal: CellCoord,
        /// Number of mini-game instances placed in the maze.
        mini_games: u32,
    },
    /// Confirms that the player crossed into a different cell.
    PlayerMoved {
        /// Cell occupied before the tick.
        from: CellCoord,
        /// Cell occupied after the tick.
        to: CellCoord,
    },
    /// Reports that the player collided with a moving wall.
    PlayerHit {
        /// Energy remaining after the hit.
        energy: u32,
    },
    /// Confirms that a moving wall stepped into a new cell or turned around.
    MovingWallAdvanced {
        /// Index of the wall within the level's hazard list.
        wall: usize,
        /// Cell occupied after the step.
        cell: CellCoord,
        /// Facing after the step.
        facing: Direction,
    },
    /// Reports that a glitch zone switched state.
    GlitchZoneToggled {
        /// Index of the zone within the level's hazard list.
        zone: usize,
        /// Whether the zone is active after toggling.
        active: bool,
    },
    /// Confirms that a mini-game attempt began.
    MiniGameStarted {
        /// Instance being attempted.
        instance: InstanceId,
        /// Kind of the attempted puzzle.
        kind: MiniGameKind,
    },
    /// Confirms that a mini-game attempt was solved.
    MiniGameCompleted {
        /// Instance that is now permanently completed.
        instance: InstanceId,
        /// Kind of the solved puzzle.
        kind: MiniGameKind,
    },
    /// Reports that a mini-game attempt failed.
    MiniGameFailed {
        /// Instance whose attempt failed.
        instance: InstanceId,
        /// Kind of the failed puzzle.
        kind: MiniGameKind,
        /// Why the attempt ended.
        reason: FailureReason,
    },
    /// Reports points added to the session score.
    ScoreAwarded {
        /// Points added by this award.
        points: u64,
        /// Session score after the award.
        total: u64,
    },
    /// Confirms that the player cleared a level.
    LevelCompleted {
        /// One-based number of the cleared level.
        level: u32,
        /// Points awarded for clearing the level.
        bonus: u64,
    },
    /// Reports that the session ended in defeat.
    GameOver {
        /// Condition that ended the session.
        reason: GameOverReason,
    },
    /// Reports that the final level was cleared.
    GameCompleted {
        /// Final session score.
        score: u64,
    },
}

/// Conditions that end a session in defeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// The level countdown ran out.
    TimeExpired,
    /// Moving walls drained the player's energy.
    EnergyDepleted,
}

/// Reasons a mini-game attempt may fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureReason {
    /// The attempt's time budget ran out.
    TimedOut,
    /// The laser runner touched a beam without a shield.
    LaserHit,
    /// The code-cracking attempt used up every guess.
    OutOfAttempts,
}

/// Unique identifier assigned to a mini-game instance within a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(u32);

impl InstanceId {
    /// Creates a new instance identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Cardinal directions, listed clockwise starting at the top of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Every direction in clockwise order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Column and row offsets of a single step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Direction pointing the opposite way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }

    /// Returns the neighbouring cell in the provided direction, if it has
    /// non-negative coordinates.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<CellCoord> {
        let (dx, dy) = direction.delta();
        let column = self.column.checked_add_signed(dx)?;
        let row = self.row.checked_add_signed(dy)?;
        Some(CellCoord::new(column, row))
    }
}

/// Axis-aligned rectangle expressed in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    origin: CellCoord,
    width: u32,
    height: u32,
}

impl CellRect {
    /// Constructs a rectangle from an origin cell and a size in cells.
    #[must_use]
    pub const fn new(origin: CellCoord, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Upper-left cell that anchors the rectangle.
    #[must_use]
    pub const fn origin(&self) -> CellCoord {
        self.origin
    }

    /// Width of the rectangle in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height of the rectangle in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reports whether the rectangle covers the provided cell.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        cell.column() >= self.origin.column()
            && cell.row() >= self.origin.row()
            && cell.column() < self.origin.column() + self.width
            && cell.row() < self.origin.row() + self.height
    }
}
