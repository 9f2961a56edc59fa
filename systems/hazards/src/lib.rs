#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Dynamic hazards: patrolling walls and flickering glitch zones.

use std::time::Duration;

use hexmaze_core::{
    whole_periods, CellCoord, CellRect, Direction, Event, GlitchZone, Hazards, Maze, MovingWall,
};
use rand::Rng;

const MOVING_WALL_COUNT: usize = 3;
const MOVING_WALL_MIN_LEVEL: u32 = 2;
const MIN_STEP_INTERVAL_MS: u64 = 1_000;
const MAX_STEP_INTERVAL_MS: u64 = 2_000;

const GLITCH_ZONE_COUNT: usize = 2;
const GLITCH_ZONE_MIN_LEVEL: u32 = 3;
const GLITCH_ZONE_EXTENT: u32 = 3;
const GLITCH_ZONE_MARGIN: u32 = 2;
const GLITCH_TOGGLE_PERIOD: Duration = Duration::from_secs(3);

/// Creates the hazards of a one-based level laid over the provided maze.
///
/// Moving walls are placed anywhere in the grid and ignore its geometry.
pub fn generate<R: Rng + ?Sized>(level: u32, maze: &Maze, rng: &mut R) -> Hazards {
    let mut hazards = Hazards::default();
    let columns = maze.columns();
    let rows = maze.rows();

    if level >= MOVING_WALL_MIN_LEVEL && columns > 0 && rows > 0 {
        hazards.moving_walls = (0..MOVING_WALL_COUNT)
            .map(|_| MovingWall {
                cell: CellCoord::new(rng.gen_range(0..columns), rng.gen_range(0..rows)),
                facing: Direction::ALL[rng.gen_range(0..Direction::ALL.len())],
                step_interval: Duration::from_millis(
                    rng.gen_range(MIN_STEP_INTERVAL_MS..MAX_STEP_INTERVAL_MS),
                ),
                elapsed: Duration::ZERO,
            })
            .collect();
    }

    if level >= GLITCH_ZONE_MIN_LEVEL {
        let column_span = columns.saturating_sub(2 * GLITCH_ZONE_MARGIN).max(1);
        let row_span = rows.saturating_sub(2 * GLITCH_ZONE_MARGIN).max(1);
        hazards.glitch_zones = (0..GLITCH_ZONE_COUNT)
            .map(|_| GlitchZone {
                area: CellRect::new(
                    CellCoord::new(
                        rng.gen_range(0..column_span) + GLITCH_ZONE_MARGIN,
                        rng.gen_range(0..row_span) + GLITCH_ZONE_MARGIN,
                    ),
                    GLITCH_ZONE_EXTENT,
                    GLITCH_ZONE_EXTENT,
                ),
                active: false,
                elapsed: Duration::ZERO,
            })
            .collect();
    }

    hazards
}

/// Advances every hazard by `dt` inside a grid of the provided size.
///
/// A wall whose next step would leave the grid reverses its facing instead of
/// moving. Emits one event per wall step and per zone toggle. Whole cycles
/// that return a hazard to its current state are skipped once one has been
/// reported.
pub fn advance(
    hazards: &Hazards,
    dt: Duration,
    columns: u32,
    rows: u32,
    out_events: &mut Vec<Event>,
) -> Hazards {
    let mut next = hazards.clone();

    for (index, wall) in next.moving_walls.iter_mut().enumerate() {
        if wall.step_interval.is_zero() {
            continue;
        }
        let (steps, remainder) =
            whole_periods(wall.elapsed.saturating_add(dt), wall.step_interval);
        wall.elapsed = remainder;
        for _ in 0..bounded_steps(steps, wall_cycle(wall, columns, rows)) {
            step_wall(wall, columns, rows);
            out_events.push(Event::MovingWallAdvanced {
                wall: index,
                cell: wall.cell,
                facing: wall.facing,
            });
        }
    }

    for (index, zone) in next.glitch_zones.iter_mut().enumerate() {
        let (toggles, remainder) =
            whole_periods(zone.elapsed.saturating_add(dt), GLITCH_TOGGLE_PERIOD);
        zone.elapsed = remainder;
        for _ in 0..bounded_steps(toggles, 2) {
            zone.active = !zone.active;
            out_events.push(Event::GlitchZoneToggled {
                zone: index,
                active: zone.active,
            });
        }
    }

    next
}

/// Steps after which a wall is back on its cell with its facing.
fn wall_cycle(wall: &MovingWall, columns: u32, rows: u32) -> u128 {
    let extent = match wall.facing {
        Direction::East | Direction::West => columns,
        Direction::North | Direction::South => rows,
    };
    2 * u128::from(extent.max(1))
}

fn bounded_steps(steps: u128, cycle: u128) -> u128 {
    if steps > cycle {
        cycle + steps % cycle
    } else {
        steps
    }
}

fn step_wall(wall: &mut MovingWall, columns: u32, rows: u32) {
    match wall.cell.step(wall.facing) {
        Some(cell) if cell.column() < columns && cell.row() < rows => wall.cell = cell,
        _ => wall.facing = wall.facing.reversed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall_at(column: u32, row: u32, facing: Direction) -> MovingWall {
        MovingWall {
            cell: CellCoord::new(column, row),
            facing,
            step_interval: Duration::from_secs(1),
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn wall_reverses_at_bounds_without_moving() {
        let mut wall = wall_at(4, 0, Direction::North);
        step_wall(&mut wall, 5, 5);
        assert_eq!(wall.cell, CellCoord::new(4, 0));
        assert_eq!(wall.facing, Direction::South);

        let mut wall = wall_at(4, 2, Direction::East);
        step_wall(&mut wall, 5, 5);
        assert_eq!(wall.cell, CellCoord::new(4, 2));
        assert_eq!(wall.facing, Direction::West);
    }

    #[test]
    fn wall_waits_for_its_interval() {
        let hazards = Hazards {
            moving_walls: vec![wall_at(2, 2, Direction::East)],
            glitch_zones: Vec::new(),
        };
        let mut events = Vec::new();

        let hazards = advance(&hazards, Duration::from_millis(600), 9, 9, &mut events);
        assert!(events.is_empty());
        assert_eq!(hazards.moving_walls[0].cell, CellCoord::new(2, 2));

        let hazards = advance(&hazards, Duration::from_millis(600), 9, 9, &mut events);
        assert_eq!(hazards.moving_walls[0].cell, CellCoord::new(3, 2));
        assert_eq!(hazards.moving_walls[0].elapsed, Duration::from_millis(200));
        assert_eq!(
            events,
            vec![Event::MovingWallAdvanced {
                wall: 0,
                cell: CellCoord::new(3, 2),
                facing: Direction::East,
            }]
        );
    }

    #[test]
    fn huge_steps_land_where_the_cycle_remainder_does() {
        let hazards = Hazards {
            moving_walls: vec![wall_at(2, 2, Direction::East)],
            glitch_zones: Vec::new(),
        };
        let mut short = Vec::new();
        let expected = advance(&hazards, Duration::from_secs(3), 5, 5, &mut short);
        assert_eq!(expected.moving_walls[0].cell, CellCoord::new(4, 2));
        assert_eq!(expected.moving_walls[0].facing, Direction::West);

        let mut events = Vec::new();
        let skipped = advance(&hazards, Duration::from_secs(1_000_000_003), 5, 5, &mut events);
        assert_eq!(skipped, expected);
        assert_eq!(events.len(), 13, "one full cycle plus the remainder");
    }

    #[test]
    fn huge_steps_keep_the_toggle_parity() {
        let hazards = Hazards {
            moving_walls: Vec::new(),
            glitch_zones: vec![GlitchZone {
                area: CellRect::new(CellCoord::new(2, 2), 3, 3),
                active: false,
                elapsed: Duration::ZERO,
            }],
        };
        let mut events = Vec::new();
        let next = advance(&hazards, Duration::from_secs(3_000_000_003), 9, 9, &mut events);
        assert!(next.glitch_zones[0].active, "odd number of toggles");
        assert_eq!(next.glitch_zones[0].elapsed, Duration::ZERO);
        assert_eq!(events.len(), 3);

        let mut events = Vec::new();
        let next = advance(&hazards, Duration::MAX, 9, 9, &mut events);
        assert!(events.len() <= 3);
        assert!(next.glitch_zones[0].elapsed < GLITCH_TOGGLE_PERIOD);
    }
}
