use std::{f32::consts::TAU, time::Duration};

use glam::Vec2;
use hexmaze_core::{
    AccessCode, BinaryPuzzle, CellCoord, CircuitPuzzle, HackingPuzzle, InstanceId, LaserBeam,
    LaserPuzzle, Maze, MemoryPuzzle, MiniGameInstance, MiniGameKind, PowerUp, PowerUpKind, Puzzle,
};
use rand::{seq::SliceRandom, Rng};

const BASE_INSTANCE_COUNT: u32 = 2;

const MEMORY_MIN_LENGTH: usize = 4;
const MEMORY_MAX_LENGTH: usize = 7;
const MEMORY_SYMBOLS: u8 = 4;

const RUNNER_START: Vec2 = Vec2::new(50.0, 150.0);
const RUNNER_SPEED: f32 = 180.0;
const BEAM_COUNT: usize = 5;
const BEAM_HEIGHT: f32 = 8.0;
const POWER_UP_COUNT: usize = 3;

const BINARY_MAX_TARGET: u8 = 128;

const ACCESS_CODE_COUNT: usize = 6;
const HACKING_ATTEMPTS: u32 = 3;

/// Picks one of the five kinds uniformly.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> MiniGameKind {
    MiniGameKind::ALL[rng.gen_range(0..MiniGameKind::ALL.len())]
}

/// Builds the initial payload of a puzzle of the provided kind.
pub fn create<R: Rng + ?Sized>(kind: MiniGameKind, rng: &mut R) -> Puzzle {
    match kind {
        MiniGameKind::Memory => {
            let length = rng.gen_range(MEMORY_MIN_LENGTH..=MEMORY_MAX_LENGTH);
            Puzzle::Memory(MemoryPuzzle {
                sequence: (0..length).map(|_| rng.gen_range(0..MEMORY_SYMBOLS)).collect(),
                entered: Vec::new(),
                showing: true,
                display_index: 0,
                display_elapsed: Duration::ZERO,
            })
        }
        MiniGameKind::Circuit => Puzzle::Circuit(CircuitPuzzle::default()),
        MiniGameKind::Laser => Puzzle::Laser(LaserPuzzle {
            runner: RUNNER_START,
            base_speed: RUNNER_SPEED,
            shield: None,
            boost: None,
            beams: (0..BEAM_COUNT)
                .map(|_| LaserBeam {
                    position: Vec2::new(rng.gen_range(100.0..500.0), rng.gen_range(150.0..350.0)),
                    size: Vec2::new(rng.gen_range(60.0..140.0), BEAM_HEIGHT),
                    heading: rng.gen_range(0.0..TAU),
                    speed: rng.gen_range(90.0..210.0),
                })
                .collect(),
            power_ups: (0..POWER_UP_COUNT)
                .map(|_| PowerUp {
                    position: Vec2::new(rng.gen_range(100.0..600.0), rng.gen_range(150.0..350.0)),
                    kind: if rng.gen_bool(0.5) {
                        PowerUpKind::Shield
                    } else {
                        PowerUpKind::Boost
                    },
                    collected: false,
                })
                .collect(),
        }),
        MiniGameKind::Binary => Puzzle::Binary(BinaryPuzzle {
            target: rng.gen_range(1..=BINARY_MAX_TARGET),
            bits: [false; 8],
            cursor: 0,
        }),
        MiniGameKind::Hacking => Puzzle::Hacking(HackingPuzzle {
            codes: (0..ACCESS_CODE_COUNT)
                .map(|_| AccessCode {
                    value: rng.gen_range(1000..=9999),
                    cracked: false,
                })
                .collect(),
            input: String::new(),
            attempts: HACKING_ATTEMPTS,
            completion_delay: None,
        }),
    }
}

/// Places `2 + level` mini-games on distinct interior path cells.
///
/// The start and goal cells never host a mini-game. Fewer instances are
/// placed when the maze lacks candidate cells.
pub fn place_instances<R: Rng + ?Sized>(
    level: u32,
    maze: &Maze,
    rng: &mut R,
) -> Vec<MiniGameInstance> {
    let start = maze.start();
    let goal = maze.goal();
    let columns = maze.columns();
    let rows = maze.rows();
    let candidates: Vec<CellCoord> = maze
        .path_cells()
        .filter(|cell| {
            cell.column() >= 1
                && cell.row() >= 1
                && cell.column() + 1 < columns
                && cell.row() + 1 < rows
                && *cell != start
                && *cell != goal
        })
        .collect();

    let count = usize::try_from(BASE_INSTANCE_COUNT.saturating_add(level)).unwrap_or(usize::MAX);
    let cells: Vec<CellCoord> = candidates.choose_multiple(rng, count).copied().collect();

    cells
        .into_iter()
        .zip(0u32..)
        .map(|(cell, index)| {
            let kind = random_kind(rng);
            MiniGameInstance {
                id: InstanceId::new(index),
                cell,
                completed: false,
                time_budget: kind.time_budget(),
                puzzle: create(kind, rng),
            }
        })
        .collect()
}
