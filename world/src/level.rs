use std::time::Duration;

use hexmaze_core::{
    CellCoord, Hazards, InstanceId, LevelConfig, LevelSnapshot, Maze, MiniGameInstance, Player,
};
use hexmaze_system_hazards as hazards;
use hexmaze_system_maze_generation as maze_generation;
use hexmaze_system_minigames as minigames;
use rand::Rng;

const INTERACT_RANGE: u32 = 1;

/// State owned by the level currently being played.
#[derive(Clone, Debug)]
pub(crate) struct Level {
    pub(crate) number: u32,
    pub(crate) name: String,
    pub(crate) maze: Maze,
    pub(crate) hazards: Hazards,
    pub(crate) mini_games: Vec<MiniGameInstance>,
    pub(crate) player: Player,
    pub(crate) time_left: Duration,
}

impl Level {
    /// Generates the maze, hazards and mini-games of a one-based level.
    pub(crate) fn generate<R: Rng + ?Sized>(
        number: u32,
        config: &LevelConfig,
        columns: u32,
        rows: u32,
        rng: &mut R,
    ) -> Self {
        let maze = maze_generation::generate(columns, rows, config.complexity, rng);
        let hazards = hazards::generate(number, &maze, rng);
        let mini_games = minigames::place_instances(number, &maze, rng);
        let player = Player::spawn_at(maze.start());

        Self {
            number,
            name: config.name.clone(),
            maze,
            hazards,
            mini_games,
            player,
            time_left: config.time_limit(),
        }
    }

    pub(crate) fn goal(&self) -> CellCoord {
        self.maze.goal()
    }

    pub(crate) fn player_at_goal(&self) -> bool {
        self.player.cell() == self.goal()
    }

    pub(crate) fn all_mini_games_completed(&self) -> bool {
        self.mini_games.iter().all(|instance| instance.completed)
    }

    /// Index of the first incomplete mini-game adjacent to the player's cell.
    pub(crate) fn mini_game_in_reach(&self) -> Option<usize> {
        let cell = self.player.cell();
        self.mini_games.iter().position(|instance| {
            !instance.completed && instance.cell.manhattan_distance(cell) <= INTERACT_RANGE
        })
    }

    /// Marks the instance solved and credits a checkpoint. Returns `false` when
    /// the instance is unknown or already completed.
    pub(crate) fn complete_mini_game(&mut self, id: InstanceId) -> bool {
        let Some(instance) = self
            .mini_games
            .iter_mut()
            .find(|instance| instance.id == id && !instance.completed)
        else {
            return false;
        };
        instance.completed = true;
        self.player.checkpoints = self.player.checkpoints.saturating_add(1);
        true
    }

    pub(crate) fn snapshot(&self) -> LevelSnapshot {
        LevelSnapshot {
            number: self.number,
            name: self.name.clone(),
            maze: self.maze.clone(),
            goal: self.goal(),
            player: self.player,
            hazards: self.hazards.clone(),
            mini_games: self.mini_games.clone(),
            time_left: self.time_left,
        }
    }
}
