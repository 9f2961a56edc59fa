//! Player and hazard state shared between the world and the systems.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{CellCoord, CellRect, Direction, CELL_SIZE, MAX_ENERGY};

const PLAYER_SIZE: f32 = 20.0;
const SPAWN_OFFSET: f32 = 5.0;

/// Continuous-space avatar controlled through held directions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the hitbox in world units.
    pub position: Vec2,
    /// Width and height of the hitbox in world units.
    pub size: Vec2,
    /// Movement intent of the last step in world units per second.
    pub velocity: Vec2,
    /// Remaining energy in `0..=MAX_ENERGY`.
    pub energy: u32,
    /// Mini-games completed during the current level.
    pub checkpoints: u32,
}

impl Player {
    /// Creates a full-energy player standing inside the provided cell.
    #[must_use]
    pub fn spawn_at(cell: CellCoord) -> Self {
        Self {
            position: Vec2::new(
                cell.column() as f32 * CELL_SIZE + SPAWN_OFFSET,
                cell.row() as f32 * CELL_SIZE + SPAWN_OFFSET,
            ),
            size: Vec2::splat(PLAYER_SIZE),
            velocity: Vec2::ZERO,
            energy: MAX_ENERGY,
            checkpoints: 0,
        }
    }

    /// Center of the hitbox in world units.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Cell containing the center of the hitbox.
    #[must_use]
    pub fn cell(&self) -> CellCoord {
        let center = self.center() / CELL_SIZE;
        CellCoord::new(center.x.max(0.0) as u32, center.y.max(0.0) as u32)
    }
}

/// Grid-aligned hazard that patrols in a straight line and drains energy on contact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovingWall {
    /// Cell currently occupied by the wall.
    pub cell: CellCoord,
    /// Direction of the next step.
    pub facing: Direction,
    /// Simulated time between two steps.
    pub step_interval: Duration,
    /// Time accumulated toward the next step.
    pub elapsed: Duration,
}

impl MovingWall {
    /// Top-left corner of the occupied cell in world units.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(
            self.cell.column() as f32 * CELL_SIZE,
            self.cell.row() as f32 * CELL_SIZE,
        )
    }

    /// Center of the occupied cell in world units.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.origin() + Vec2::splat(CELL_SIZE * 0.5)
    }
}

/// Rectangular region that flickers on and off on a fixed period.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlitchZone {
    /// Cells covered by the zone.
    pub area: CellRect,
    /// Whether the zone is currently active.
    pub active: bool,
    /// Time accumulated toward the next toggle.
    pub elapsed: Duration,
}

/// All dynamic hazards of a level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hazards {
    /// Patrolling walls, present from level two onward.
    pub moving_walls: Vec<MovingWall>,
    /// Flickering regions, present from level three onward.
    pub glitch_zones: Vec<GlitchZone>,
}

impl Hazards {
    /// Reports whether an active glitch zone covers the provided cell.
    #[must_use]
    pub fn glitch_active_at(&self, cell: CellCoord) -> bool {
        self.glitch_zones
            .iter()
            .any(|zone| zone.active && zone.area.contains(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_places_hitbox_inside_start_cell() {
        let player = Player::spawn_at(CellCoord::new(1, 1));
        assert_eq!(player.position, Vec2::new(35.0, 35.0));
        assert_eq!(player.cell(), CellCoord::new(1, 1));
        assert_eq!(player.energy, MAX_ENERGY);
    }

    #[test]
    fn inactive_glitch_zones_are_ignored() {
        let area = CellRect::new(CellCoord::new(2, 2), 3, 3);
        let mut hazards = Hazards {
            moving_walls: Vec::new(),
            glitch_zones: vec![GlitchZone {
                area,
                active: false,
                elapsed: Duration::ZERO,
            }],
        };
        assert!(!hazards.glitch_active_at(CellCoord::new(3, 3)));

        hazards.glitch_zones[0].active = true;
        assert!(hazards.glitch_active_at(CellCoord::new(3, 3)));
        assert!(!hazards.glitch_active_at(CellCoord::new(5, 3)));
    }
}
