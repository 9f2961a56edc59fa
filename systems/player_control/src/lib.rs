#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Player movement, maze collision and moving-wall contact resolution.

use std::time::Duration;

use glam::Vec2;
use hexmaze_core::{Cell, DirectionSet, Event, Maze, MovingWall, Player, CELL_SIZE};

const DEFAULT_SPEED: f32 = 90.0;
const MAX_SUB_STEP: f32 = 4.0;
const HIT_ENERGY_COST: u32 = 10;
const PUSH_DISTANCE: f32 = 15.0;
const EDGE_MARGIN: f32 = 5.0;
const SEARCH_STEP: f32 = 10.0;
const SEARCH_RINGS: u32 = 5;

/// Configuration parameters required to construct the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    speed: f32,
}

impl Config {
    /// Creates a configuration with the provided speed in world units per second.
    #[must_use]
    pub const fn new(speed: f32) -> Self {
        Self { speed }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

/// Stateless controller that resolves one movement step at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerControl {
    config: Config,
}

impl PlayerControl {
    /// Creates a controller using the supplied configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Moves the player under the held directions and resolves moving-wall hits.
    ///
    /// Horizontal movement is resolved before vertical movement so a blocked
    /// axis never cancels the other. Emits `PlayerHit` for every wall contact
    /// and `PlayerMoved` when the player ends in a different cell.
    pub fn step(
        &self,
        player: &Player,
        held: DirectionSet,
        maze: &Maze,
        moving_walls: &[MovingWall],
        dt: Duration,
        out_events: &mut Vec<Event>,
    ) -> Player {
        let mut next = *player;
        let from = player.cell();

        let (dx, dy) = held.axis();
        let distance = self.config.speed * dt.as_secs_f32();
        next.velocity = Vec2::new(dx, dy) * self.config.speed;
        next.position.x = slide(maze, next.position, next.size, Vec2::X, dx * distance).x;
        next.position.y = slide(maze, next.position, next.size, Vec2::Y, dy * distance).y;

        for wall in moving_walls {
            if next.energy == 0 {
                break;
            }
            if !touches(&next, wall) {
                continue;
            }

            next.energy = next.energy.saturating_sub(HIT_ENERGY_COST);
            out_events.push(Event::PlayerHit {
                energy: next.energy,
            });
            next.position = push_away(maze, &next, wall);
        }

        let to = next.cell();
        if to != from {
            out_events.push(Event::PlayerMoved { from, to });
        }

        next
    }
}

/// Reports whether a hitbox at `position` overlaps a wall or leaves the grid.
///
/// Only the four corners are probed; the hitbox is never larger than a cell.
#[must_use]
pub fn collides(maze: &Maze, position: Vec2, size: Vec2) -> bool {
    let left = cell_index(position.x);
    let top = cell_index(position.y);
    let right = cell_index(position.x + size.x - 1.0);
    let bottom = cell_index(position.y + size.y - 1.0);

    [(left, top), (right, top), (left, bottom), (right, bottom)]
        .into_iter()
        .any(|(column, row)| maze.cell_at(column, row) == Cell::Wall)
}

fn cell_index(coordinate: f32) -> i64 {
    (coordinate / CELL_SIZE).floor() as i64
}

fn slide(maze: &Maze, position: Vec2, size: Vec2, axis: Vec2, displacement: f32) -> Vec2 {
    if displacement == 0.0 {
        return position;
    }

    // Nothing travels further than the maze is wide.
    let reach = maze.columns().max(maze.rows()) as f32 * CELL_SIZE;
    let displacement = displacement.clamp(-reach, reach);
    let steps = (displacement.abs() / MAX_SUB_STEP).ceil().max(1.0) as u32;
    let increment = axis * (displacement / steps as f32);
    let mut current = position;
    for _ in 0..steps {
        let candidate = current + increment;
        if collides(maze, candidate, size) {
            break;
        }
        current = candidate;
    }
    current
}

fn touches(player: &Player, wall: &MovingWall) -> bool {
    let origin = wall.origin();
    player.position.x < origin.x + CELL_SIZE
        && player.position.x + player.size.x > origin.x
        && player.position.y < origin.y + CELL_SIZE
        && player.position.y + player.size.y > origin.y
}

fn push_away(maze: &Maze, player: &Player, wall: &MovingWall) -> Vec2 {
    let separation = player.center() - wall.center();
    let push = if separation.x.abs() >= separation.y.abs() {
        Vec2::new(PUSH_DISTANCE.copysign(separation.x), 0.0)
    } else {
        Vec2::new(0.0, PUSH_DISTANCE.copysign(separation.y))
    };

    let target = clamp_to_maze(maze, player.position + push, player.size);
    if !collides(maze, target, player.size) {
        return target;
    }

    for ring in 1..=SEARCH_RINGS {
        let distance = SEARCH_STEP * ring as f32;
        let offsets = [
            Vec2::new(distance, 0.0),
            Vec2::new(-distance, 0.0),
            Vec2::new(0.0, distance),
            Vec2::new(0.0, -distance),
        ];
        for offset in offsets {
            let candidate = clamp_to_maze(maze, player.position + offset, player.size);
            if !collides(maze, candidate, player.size) {
                return candidate;
            }
        }
    }

    player.position
}

fn clamp_to_maze(maze: &Maze, position: Vec2, size: Vec2) -> Vec2 {
    let max_x = maze.columns().saturating_sub(1) as f32 * CELL_SIZE - size.x - EDGE_MARGIN;
    let max_y = maze.rows().saturating_sub(1) as f32 * CELL_SIZE - size.y - EDGE_MARGIN;
    Vec2::new(
        position.x.min(max_x).max(EDGE_MARGIN),
        position.y.min(max_y).max(EDGE_MARGIN),
    )
}
