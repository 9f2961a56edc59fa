//! Owned copies of the session state handed to renderers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ActiveMiniGame, CellCoord, Hazards, Maze, MiniGameInstance, PlayMode, Player};

/// Immutable view of a whole session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Active play mode.
    pub mode: PlayMode,
    /// Cumulative session score.
    pub score: u64,
    /// Loaded level, absent on the menu and after a restart.
    pub level: Option<LevelSnapshot>,
    /// Attempt in progress, present only in mini-game mode.
    pub active_mini_game: Option<ActiveMiniGame>,
}

/// Immutable view of the loaded level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// One-based level number.
    pub number: u32,
    /// Display name of the level.
    pub name: String,
    /// Maze grid.
    pub maze: Maze,
    /// Cell the player has to reach.
    pub goal: CellCoord,
    /// Player state.
    pub player: Player,
    /// Moving walls and glitch zones.
    pub hazards: Hazards,
    /// Placed mini-games with their completion flags.
    pub mini_games: Vec<MiniGameInstance>,
    /// Countdown remaining.
    pub time_left: Duration,
}

impl LevelSnapshot {
    /// Number of completed mini-game instances.
    #[must_use]
    pub fn completed_mini_games(&self) -> usize {
        self.mini_games
            .iter()
            .filter(|instance| instance.completed)
            .count()
    }
}
