use std::{f32::consts::PI, time::Duration};

use glam::Vec2;
use hexmaze_core::{Action, DirectionSet, FailureReason, LaserBeam, LaserPuzzle, PowerUpKind};

use crate::{Progress, PuzzleRules};

/// Width of the laser arena in arena units.
pub const ARENA_WIDTH: f32 = 750.0;
/// Height of the laser arena in arena units.
pub const ARENA_HEIGHT: f32 = 570.0;
/// Top-left corner of the goal square.
pub const GOAL_ORIGIN: Vec2 = Vec2::new(690.0, 490.0);
/// Side length of the goal square.
pub const GOAL_SIZE: f32 = 40.0;

const PLAYFIELD_TOP: f32 = 120.0;
const BEAM_BOTTOM_MARGIN: f32 = 50.0;
const RUNNER_SIZE: f32 = 20.0;
const RUNNER_BOTTOM: f32 = ARENA_HEIGHT - 70.0;
const POWER_UP_SIZE: f32 = 15.0;
const SHIELD_DURATION: Duration = Duration::from_secs(5);
const BOOST_DURATION: Duration = Duration::from_secs(3);
const BOOST_FACTOR: f32 = 2.0;

impl PuzzleRules for LaserPuzzle {
    fn on_action(self, _action: Action) -> Progress<Self> {
        Progress::Ongoing(self)
    }

    fn on_tick(mut self, dt: Duration, held: DirectionSet) -> Progress<Self> {
        self.shield = count_down(self.shield, dt);
        self.boost = count_down(self.boost, dt);

        let seconds = dt.as_secs_f32();
        for beam in &mut self.beams {
            move_beam(beam, seconds);
        }

        let speed = if self.boost.is_some() {
            self.base_speed * BOOST_FACTOR
        } else {
            self.base_speed
        };
        let (dx, dy) = held.axis();
        self.runner += Vec2::new(dx, dy) * speed * seconds;
        self.runner.x = self.runner.x.clamp(0.0, ARENA_WIDTH - RUNNER_SIZE);
        self.runner.y = self.runner.y.clamp(PLAYFIELD_TOP, RUNNER_BOTTOM);

        let runner = self.runner;
        for power_up in self.power_ups.iter_mut().filter(|power_up| !power_up.collected) {
            if overlaps(runner, Vec2::splat(RUNNER_SIZE), power_up.position, Vec2::splat(POWER_UP_SIZE)) {
                power_up.collected = true;
                match power_up.kind {
                    PowerUpKind::Shield => self.shield = Some(SHIELD_DURATION),
                    PowerUpKind::Boost => self.boost = Some(BOOST_DURATION),
                }
            }
        }

        if self.shield.is_none()
            && self
                .beams
                .iter()
                .any(|beam| overlaps(runner, Vec2::splat(RUNNER_SIZE), beam.position, beam.size))
        {
            return Progress::Failed(FailureReason::LaserHit);
        }

        let center = runner + Vec2::splat(RUNNER_SIZE * 0.5);
        let goal_end = GOAL_ORIGIN + Vec2::splat(GOAL_SIZE);
        if center.x > GOAL_ORIGIN.x
            && center.x < goal_end.x
            && center.y > GOAL_ORIGIN.y
            && center.y < goal_end.y
        {
            return Progress::Completed;
        }

        Progress::Ongoing(self)
    }
}

fn count_down(timer: Option<Duration>, dt: Duration) -> Option<Duration> {
    timer
        .and_then(|left| left.checked_sub(dt))
        .filter(|left| !left.is_zero())
}

fn move_beam(beam: &mut LaserBeam, seconds: f32) {
    let step = Vec2::new(beam.heading.cos(), beam.heading.sin()) * beam.speed * seconds;
    beam.position += step;

    let max_x = ARENA_WIDTH - beam.size.x;
    let max_y = ARENA_HEIGHT - beam.size.y - BEAM_BOTTOM_MARGIN;
    if beam.position.x < 0.0 || beam.position.x > max_x {
        beam.heading = PI - beam.heading;
    }
    if beam.position.y < PLAYFIELD_TOP || beam.position.y > max_y {
        beam.heading = -beam.heading;
    }
    beam.position.x = beam.position.x.clamp(0.0, max_x.max(0.0));
    beam.position.y = beam.position.y.clamp(PLAYFIELD_TOP, max_y.max(PLAYFIELD_TOP));
}

fn overlaps(a: Vec2, a_size: Vec2, b: Vec2, b_size: Vec2) -> bool {
    a.x < b.x + b_size.x && a.x + a_size.x > b.x && a.y < b.y + b_size.y && a.y + a_size.y > b.y
}
