use hexmaze_core::{Cell, CellCoord, DEFAULT_MAZE_COLUMNS, DEFAULT_MAZE_ROWS};
use hexmaze_system_maze_generation::{generate, is_goal_reachable, reachable_from};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

const SEEDS: [u64; 6] = [0, 1, 7, 42, 0xdead_beef, 0x1234_5678_9abc];

#[test]
fn start_and_goal_are_paths_for_every_tier() {
    for seed in SEEDS {
        for tier in 1..=3 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let maze = generate(DEFAULT_MAZE_COLUMNS, DEFAULT_MAZE_ROWS, tier, &mut rng);
            assert_eq!(maze.cell(maze.start()), Cell::Path, "seed {seed} tier {tier}");
            assert_eq!(maze.cell(maze.goal()), Cell::Path, "seed {seed} tier {tier}");
            assert!(is_goal_reachable(&maze), "seed {seed} tier {tier}");
        }
    }
}

#[test]
fn every_path_cell_is_reachable_from_start() {
    for seed in SEEDS {
        for tier in 1..=3 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let maze = generate(DEFAULT_MAZE_COLUMNS, DEFAULT_MAZE_ROWS, tier, &mut rng);
            let reachable = reachable_from(&maze, maze.start());
            for cell in maze.path_cells() {
                assert!(
                    reachable.contains(&cell),
                    "seed {seed} tier {tier}: {cell:?} is unreachable"
                );
            }
        }
    }
}

#[test]
fn border_stays_wall() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let maze = generate(DEFAULT_MAZE_COLUMNS, DEFAULT_MAZE_ROWS, 3, &mut rng);
    let columns = maze.columns();
    let rows = maze.rows();

    for x in 0..columns {
        assert_eq!(maze.cell(CellCoord::new(x, 0)), Cell::Wall);
        assert_eq!(maze.cell(CellCoord::new(x, rows - 1)), Cell::Wall);
    }
    for y in 0..rows {
        assert_eq!(maze.cell(CellCoord::new(0, y)), Cell::Wall);
        assert_eq!(maze.cell(CellCoord::new(columns - 1, y)), Cell::Wall);
    }
    assert_eq!(maze.cell_at(-1, 4), Cell::Wall);
    assert_eq!(maze.cell_at(i64::from(columns), 4), Cell::Wall);
}

#[test]
fn odd_lattice_cells_are_always_open() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let maze = generate(DEFAULT_MAZE_COLUMNS, DEFAULT_MAZE_ROWS, 1, &mut rng);
    for y in (1..DEFAULT_MAZE_ROWS - 1).step_by(2) {
        for x in (1..DEFAULT_MAZE_COLUMNS - 1).step_by(2) {
            assert!(maze.is_path(CellCoord::new(x, y)), "lattice cell ({x}, {y})");
        }
    }
}

#[test]
fn generation_replays_for_equal_seeds() {
    let first = generate(25, 19, 3, &mut ChaCha8Rng::seed_from_u64(11));
    let second = generate(25, 19, 3, &mut ChaCha8Rng::seed_from_u64(11));
    assert_eq!(first, second, "identical seeds must yield identical mazes");
}
