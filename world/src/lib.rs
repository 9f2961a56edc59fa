#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for the HEX maze.
//!
//! The [`World`] owns the whole session: the active level, the score, the
//! play mode and the random number generator every system draws from.
//! Adapters mutate it exclusively through [`apply`] and observe it through
//! the [`query`] module and the events [`apply`] emits.

use std::time::Duration;

use hexmaze_core::{
    Action, ActiveMiniGame, Command, Event, FrameInput, GameOverReason, LevelSnapshot, PlayMode,
    WELCOME_BANNER,
};
use hexmaze_system_hazards as hazards;
use hexmaze_system_minigames::{self as minigames, Progress};
use hexmaze_system_player_control::PlayerControl;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

mod config;
mod level;

pub use config::{Config, ConfigError};

use level::Level;

const MINI_GAME_REWARD: u64 = 500;
const LEVEL_BONUS: u64 = 1_000;
const BONUS_PER_SECOND_LEFT: u64 = 10;
const LEVEL_TRANSITION_DELAY: Duration = Duration::from_secs(2);

/// Mode of the session together with the state that only exists in that mode.
#[derive(Clone, Debug)]
enum Mode {
    Menu,
    Playing,
    Paused,
    MiniGame(ActiveMiniGame),
    LevelComplete { remaining: Duration },
    GameOver(GameOverReason),
    GameComplete,
}

impl Mode {
    fn play_mode(&self) -> PlayMode {
        match self {
            Self::Menu => PlayMode::Menu,
            Self::Playing => PlayMode::Playing,
            Self::Paused => PlayMode::Paused,
            Self::MiniGame(_) => PlayMode::MiniGame,
            Self::LevelComplete { .. } => PlayMode::LevelComplete,
            Self::GameOver(_) => PlayMode::GameOver,
            Self::GameComplete => PlayMode::GameComplete,
        }
    }
}

/// Represents the authoritative HEX maze session state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    config: Config,
    games_started: u64,
    player_control: PlayerControl,
    mode: Mode,
    score: u64,
    level: Option<Level>,
    tick_index: u64,
}

impl World {
    /// Creates a world using the built-in campaign.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(Config::default())
    }

    /// Creates a world from a custom configuration after validating it.
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: Config) -> Self {
        Self {
            banner: WELCOME_BANNER,
            config,
            games_started: 0,
            player_control: PlayerControl::default(),
            mode: Mode::Menu,
            score: 0,
            level: None,
            tick_index: 0,
        }
    }

    fn set_mode(&mut self, next: Mode, out_events: &mut Vec<Event>) {
        let previous = self.mode.play_mode();
        self.enter_mode(previous, next, out_events);
    }

    fn enter_mode(&mut self, previous: PlayMode, next: Mode, out_events: &mut Vec<Event>) {
        self.mode = next;
        let mode = self.mode.play_mode();
        if mode != previous {
            log::debug!("play mode {previous:?} -> {mode:?}");
            out_events.push(Event::PlayModeChanged { mode });
        }
    }

    /// Generates the level at `index` and makes it current.
    fn load_level(&mut self, index: usize, out_events: &mut Vec<Event>) -> bool {
        let Some(config) = self.config.levels.get(index) else {
            return false;
        };
        let number = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let mut rng = level_rng(self.config.seed, self.games_started, number);
        let level = Level::generate(
            number,
            config,
            self.config.maze_columns,
            self.config.maze_rows,
            &mut rng,
        );

        log::info!(
            "level {number} '{}' started with {} mini-games, {} moving walls and {} glitch zones",
            level.name,
            level.mini_games.len(),
            level.hazards.moving_walls.len(),
            level.hazards.glitch_zones.len(),
        );
        out_events.push(Event::LevelStarted {
            level: number,
            goal: level.goal(),
            mini_games: u32::try_from(level.mini_games.len()).unwrap_or(u32::MAX),
        });
        self.level = Some(level);
        true
    }

    fn is_final_level(&self, number: u32) -> bool {
        usize::try_from(number).map_or(true, |number| number >= self.config.levels.len())
    }

    fn tick(&mut self, dt: Duration, input: &FrameInput, out_events: &mut Vec<Event>) {
        let previous = self.mode.play_mode();
        let next = match std::mem::replace(&mut self.mode, Mode::Menu) {
            Mode::Playing => self.tick_playing(dt, input, out_events),
            Mode::Paused => {
                if input.pressed(Action::Pause) {
                    Mode::Playing
                } else {
                    Mode::Paused
                }
            }
            Mode::MiniGame(attempt) => self.tick_mini_game(attempt, dt, input, out_events),
            Mode::LevelComplete { remaining } => {
                self.tick_level_complete(remaining, dt, out_events)
            }
            idle => idle,
        };
        self.enter_mode(previous, next, out_events);
    }

    fn tick_playing(
        &mut self,
        dt: Duration,
        input: &FrameInput,
        out_events: &mut Vec<Event>,
    ) -> Mode {
        if input.pressed(Action::Pause) {
            return Mode::Paused;
        }
        let Some(level) = self.level.as_mut() else {
            return Mode::Menu;
        };

        let columns = level.maze.columns();
        let rows = level.maze.rows();
        level.hazards = hazards::advance(&level.hazards, dt, columns, rows, out_events);
        level.player = self.player_control.step(
            &level.player,
            input.held,
            &level.maze,
            &level.hazards.moving_walls,
            dt,
            out_events,
        );

        let mut next = Mode::Playing;
        if input.pressed(Action::Interact) {
            if let Some(index) = level.mini_game_in_reach() {
                let attempt = minigames::begin_attempt(&level.mini_games[index]);
                log::info!(
                    "mini-game {} ({}) started",
                    attempt.instance.get(),
                    attempt.kind().label()
                );
                out_events.push(Event::MiniGameStarted {
                    instance: attempt.instance,
                    kind: attempt.kind(),
                });
                next = Mode::MiniGame(attempt);
            }
        }

        if level.player.energy == 0 {
            log::info!("level {}: energy depleted", level.number);
            out_events.push(Event::GameOver {
                reason: GameOverReason::EnergyDepleted,
            });
            return Mode::GameOver(GameOverReason::EnergyDepleted);
        }

        if matches!(next, Mode::Playing)
            && level.player_at_goal()
            && level.all_mini_games_completed()
        {
            let number = level.number;
            let bonus = LEVEL_BONUS + BONUS_PER_SECOND_LEFT * level.time_left.as_secs();
            award(&mut self.score, bonus, out_events);
            log::info!("level {number} cleared with bonus {bonus}");
            out_events.push(Event::LevelCompleted {
                level: number,
                bonus,
            });

            if self.is_final_level(number) {
                log::info!("campaign complete with score {}", self.score);
                out_events.push(Event::GameCompleted { score: self.score });
                return Mode::GameComplete;
            }
            return Mode::LevelComplete {
                remaining: LEVEL_TRANSITION_DELAY,
            };
        }

        level.time_left = level.time_left.saturating_sub(dt);
        if level.time_left.is_zero() {
            log::info!("level {}: time expired", level.number);
            out_events.push(Event::GameOver {
                reason: GameOverReason::TimeExpired,
            });
            return Mode::GameOver(GameOverReason::TimeExpired);
        }

        next
    }

    fn tick_mini_game(
        &mut self,
        attempt: ActiveMiniGame,
        dt: Duration,
        input: &FrameInput,
        out_events: &mut Vec<Event>,
    ) -> Mode {
        let instance = attempt.instance;
        let kind = attempt.kind();

        match minigames::advance_attempt(attempt, dt, input) {
            Progress::Ongoing(attempt) => Mode::MiniGame(attempt),
            Progress::Completed => {
                let newly_completed = self
                    .level
                    .as_mut()
                    .is_some_and(|level| level.complete_mini_game(instance));
                log::info!("mini-game {} ({}) completed", instance.get(), kind.label());
                out_events.push(Event::MiniGameCompleted { instance, kind });
                if newly_completed {
                    award(&mut self.score, MINI_GAME_REWARD, out_events);
                }
                Mode::Playing
            }
            Progress::Failed(reason) => {
                log::info!(
                    "mini-game {} ({}) failed: {reason:?}",
                    instance.get(),
                    kind.label()
                );
                out_events.push(Event::MiniGameFailed {
                    instance,
                    kind,
                    reason,
                });
                Mode::Playing
            }
        }
    }

    fn tick_level_complete(
        &mut self,
        remaining: Duration,
        dt: Duration,
        out_events: &mut Vec<Event>,
    ) -> Mode {
        let remaining = remaining.saturating_sub(dt);
        if !remaining.is_zero() {
            return Mode::LevelComplete { remaining };
        }

        let next_index = self
            .level
            .as_ref()
            .and_then(|level| usize::try_from(level.number).ok())
            .unwrap_or(0);
        if self.load_level(next_index, out_events) {
            Mode::Playing
        } else {
            out_events.push(Event::GameCompleted { score: self.score });
            Mode::GameComplete
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn award(score: &mut u64, points: u64, out_events: &mut Vec<Event>) {
    *score = score.saturating_add(points);
    out_events.push(Event::ScoreAwarded {
        points,
        total: *score,
    });
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::StartGame => {
            let mode = world.mode.play_mode();
            if mode != PlayMode::Menu && !mode.is_terminal() {
                log::debug!("start ignored in {mode:?}");
                return;
            }
            world.score = 0;
            world.games_started = world.games_started.saturating_add(1);
            if world.load_level(0, out_events) {
                world.set_mode(Mode::Playing, out_events);
            }
        }
        Command::Restart => {
            world.level = None;
            world.score = 0;
            world.set_mode(Mode::Menu, out_events);
        }
        Command::Tick { dt, input } => {
            world.tick_index = world.tick_index.saturating_add(1);
            out_events.push(Event::TimeAdvanced { dt });
            world.tick(dt, &input, out_events);
        }
    }
}

/// Random stream for one level of one game, so any level can be regenerated
/// without replaying the levels before it.
fn level_rng(seed: u64, game: u64, level: u32) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream((game << 32) | u64::from(level));
    rng
}

/// Generates level `number` exactly as the first game of a session built
/// from `config` would. Returns `None` for invalid configurations and for
/// levels the campaign lacks.
#[must_use]
pub fn preview_level(config: &Config, number: u32) -> Option<LevelSnapshot> {
    config.validate().ok()?;
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    let level_config = config.levels.get(index)?;
    let mut rng = level_rng(config.seed, 1, number);
    let level = Level::generate(
        number,
        level_config,
        config.maze_columns,
        config.maze_rows,
        &mut rng,
    );
    Some(level.snapshot())
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::time::Duration;

    use hexmaze_core::{ActiveMiniGame, GameOverReason, GameSnapshot, Maze, PlayMode, Player};

    use super::{Config, Mode, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Reports the active play mode.
    #[must_use]
    pub fn play_mode(world: &World) -> PlayMode {
        world.mode.play_mode()
    }

    /// Cumulative session score.
    #[must_use]
    pub fn score(world: &World) -> u64 {
        world.score
    }

    /// Configuration the world was built from.
    #[must_use]
    pub fn config(world: &World) -> &Config {
        &world.config
    }

    /// Number of commands of kind `Tick` processed so far.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// One-based number of the loaded level.
    #[must_use]
    pub fn level_number(world: &World) -> Option<u32> {
        world.level.as_ref().map(|level| level.number)
    }

    /// Maze of the loaded level.
    #[must_use]
    pub fn maze(world: &World) -> Option<&Maze> {
        world.level.as_ref().map(|level| &level.maze)
    }

    /// Player of the loaded level.
    #[must_use]
    pub fn player(world: &World) -> Option<&Player> {
        world.level.as_ref().map(|level| &level.player)
    }

    /// Countdown of the loaded level.
    #[must_use]
    pub fn time_left(world: &World) -> Option<Duration> {
        world.level.as_ref().map(|level| level.time_left)
    }

    /// Attempt in progress, present only in mini-game mode.
    #[must_use]
    pub fn active_mini_game(world: &World) -> Option<&ActiveMiniGame> {
        match &world.mode {
            Mode::MiniGame(attempt) => Some(attempt),
            _ => None,
        }
    }

    /// Condition that ended the session, if it ended in defeat.
    #[must_use]
    pub fn game_over_reason(world: &World) -> Option<GameOverReason> {
        match world.mode {
            Mode::GameOver(reason) => Some(reason),
            _ => None,
        }
    }

    /// Captures an owned copy of everything a renderer needs.
    #[must_use]
    pub fn snapshot(world: &World) -> GameSnapshot {
        GameSnapshot {
            mode: play_mode(world),
            score: world.score,
            level: world.level.as_ref().map(|level| level.snapshot()),
            active_mini_game: active_mini_game(world).cloned(),
        }
    }
}
