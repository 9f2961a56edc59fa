#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Procedural maze generation.
//!
//! Mazes are carved on the lattice of odd cells: each lattice cell becomes a
//! path and randomly opens toward its right and lower neighbours. Higher
//! complexity tiers punch additional holes through the walls. A final repair
//! pass carves walls until every path cell is reachable from the start.

use std::collections::{HashSet, VecDeque};

use hexmaze_core::{Cell, CellCoord, Direction, Maze};
use rand::Rng;

const OPEN_PROBABILITY: f64 = 0.7;
const TIER_TWO_PUNCHES: u32 = 5;
const TIER_THREE_PUNCHES: u32 = 10;

/// Generates a maze of the provided size for a complexity tier in `1..=3`.
///
/// The start and goal cells are always paths, the border stays wall, and
/// every path cell is reachable from the start.
pub fn generate<R: Rng + ?Sized>(columns: u32, rows: u32, tier: u8, rng: &mut R) -> Maze {
    let mut maze = Maze::filled(columns, rows, Cell::Wall);

    if columns >= 3 && rows >= 3 {
        carve_lattice(&mut maze, rng);

        let punches = match tier {
            0 | 1 => 0,
            2 => TIER_TWO_PUNCHES,
            _ => TIER_TWO_PUNCHES + TIER_THREE_PUNCHES,
        };
        for _ in 0..punches {
            let cell = CellCoord::new(rng.gen_range(1..columns - 1), rng.gen_range(1..rows - 1));
            maze.set(cell, Cell::Path);
        }
    }

    let start = maze.start();
    let goal = maze.goal();
    maze.set(start, Cell::Path);
    maze.set(goal, Cell::Path);

    let carved = ensure_connected(&mut maze);
    if carved > 0 {
        log::debug!("maze {columns}x{rows} tier {tier}: carved {carved} walls to connect paths");
    }

    maze
}

fn carve_lattice<R: Rng + ?Sized>(maze: &mut Maze, rng: &mut R) {
    let columns = maze.columns();
    let rows = maze.rows();

    for y in (1..rows - 1).step_by(2) {
        for x in (1..columns - 1).step_by(2) {
            maze.set(CellCoord::new(x, y), Cell::Path);

            if x + 2 < columns - 1 && rng.gen_bool(OPEN_PROBABILITY) {
                maze.set(CellCoord::new(x + 1, y), Cell::Path);
            }
            if y + 2 < rows - 1 && rng.gen_bool(OPEN_PROBABILITY) {
                maze.set(CellCoord::new(x, y + 1), Cell::Path);
            }
        }
    }
}

/// Collects every path cell reachable from `origin` through orthogonal steps.
///
/// Returns an empty set when `origin` itself is not a path.
#[must_use]
pub fn reachable_from(maze: &Maze, origin: CellCoord) -> HashSet<CellCoord> {
    let mut visited = HashSet::new();
    if !maze.is_path(origin) {
        return visited;
    }

    let mut frontier = VecDeque::new();
    let _ = visited.insert(origin);
    frontier.push_back(origin);

    while let Some(cell) = frontier.pop_front() {
        for direction in Direction::ALL {
            let Some(next) = cell.step(direction) else {
                continue;
            };
            if maze.is_path(next) && visited.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    visited
}

/// Reports whether the goal can be reached from the start.
#[must_use]
pub fn is_goal_reachable(maze: &Maze) -> bool {
    reachable_from(maze, maze.start()).contains(&maze.goal())
}

/// Carves interior walls until every path cell is reachable from the start.
///
/// Each pass opens the first interior wall, in row-major order, that touches
/// both a reachable and an unreachable path. Returns the number of carved
/// cells.
pub fn ensure_connected(maze: &mut Maze) -> usize {
    let total_cells = usize::try_from(u64::from(maze.columns()) * u64::from(maze.rows()))
        .unwrap_or(usize::MAX);
    let mut carved = 0;

    loop {
        let reachable = reachable_from(maze, maze.start());
        let path_count = maze.path_cells().count();
        if reachable.len() == path_count || carved >= total_cells {
            break;
        }

        let Some(bridge) = find_bridge(maze, &reachable) else {
            log::warn!("no wall bridges the unreachable paths; leaving maze partially connected");
            break;
        };
        maze.set(bridge, Cell::Path);
        carved += 1;
    }

    carved
}

fn find_bridge(maze: &Maze, reachable: &HashSet<CellCoord>) -> Option<CellCoord> {
    let columns = maze.columns();
    let rows = maze.rows();

    for y in 1..rows.saturating_sub(1) {
        for x in 1..columns.saturating_sub(1) {
            let cell = CellCoord::new(x, y);
            if maze.is_path(cell) {
                continue;
            }

            let mut touches_reachable = false;
            let mut touches_unreachable = false;
            for direction in Direction::ALL {
                let Some(next) = cell.step(direction) else {
                    continue;
                };
                if !maze.is_path(next) {
                    continue;
                }
                if reachable.contains(&next) {
                    touches_reachable = true;
                } else {
                    touches_unreachable = true;
                }
            }

            if touches_reachable && touches_unreachable {
                return Some(cell);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_joins_split_corridors() {
        let mut maze = Maze::filled(7, 3, Cell::Wall);
        for x in [1, 2, 4, 5] {
            maze.set(CellCoord::new(x, 1), Cell::Path);
        }

        assert!(!is_goal_reachable(&maze));
        assert_eq!(ensure_connected(&mut maze), 1);
        assert!(maze.is_path(CellCoord::new(3, 1)));
        assert!(is_goal_reachable(&maze));
    }

    #[test]
    fn reachable_from_wall_is_empty() {
        let maze = Maze::filled(5, 5, Cell::Wall);
        assert!(reachable_from(&maze, CellCoord::new(2, 2)).is_empty());
    }
}
