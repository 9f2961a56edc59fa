#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Mini-game construction and the reducers that drive every puzzle type.
//!
//! Each payload from `hexmaze_core` implements [`PuzzleRules`], a pair of pure
//! reducers that consume the payload by value and return a [`Progress`]. The
//! [`Puzzle`] tag dispatches to the matching payload, and
//! [`advance_attempt`] layers the shared time budget on top.

use std::time::Duration;

use hexmaze_core::{Action, DirectionSet, FailureReason, Puzzle};

mod attempt;
mod binary;
mod circuit;
mod factory;
mod hacking;
mod laser;
mod memory;

pub use attempt::{advance_attempt, begin_attempt};
pub use factory::{create, place_instances, random_kind};
pub use laser::{ARENA_HEIGHT, ARENA_WIDTH, GOAL_ORIGIN, GOAL_SIZE};

/// Outcome of feeding an action or a tick into a puzzle.
#[derive(Clone, Debug, PartialEq)]
pub enum Progress<T> {
    /// The puzzle continues with the updated state.
    Ongoing(T),
    /// The puzzle was solved.
    Completed,
    /// The puzzle ended unsolved.
    Failed(FailureReason),
}

impl<T> Progress<T> {
    /// Transforms the ongoing state, preserving terminal outcomes.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Progress<U> {
        match self {
            Self::Ongoing(state) => Progress::Ongoing(f(state)),
            Self::Completed => Progress::Completed,
            Self::Failed(reason) => Progress::Failed(reason),
        }
    }
}

/// Pure reducers implemented by every puzzle payload.
pub trait PuzzleRules: Sized {
    /// Applies a single pressed action.
    fn on_action(self, action: Action) -> Progress<Self>;

    /// Advances time-driven state by `dt` under the held directions.
    fn on_tick(self, _dt: Duration, _held: DirectionSet) -> Progress<Self> {
        Progress::Ongoing(self)
    }

    /// Reports whether the puzzle is solved and only waiting to report it.
    fn is_solved(&self) -> bool {
        false
    }
}

impl PuzzleRules for Puzzle {
    fn on_action(self, action: Action) -> Progress<Self> {
        match self {
            Puzzle::Memory(state) => state.on_action(action).map(Puzzle::Memory),
            Puzzle::Circuit(state) => state.on_action(action).map(Puzzle::Circuit),
            Puzzle::Laser(state) => state.on_action(action).map(Puzzle::Laser),
            Puzzle::Binary(state) => state.on_action(action).map(Puzzle::Binary),
            Puzzle::Hacking(state) => state.on_action(action).map(Puzzle::Hacking),
        }
    }

    fn on_tick(self, dt: Duration, held: DirectionSet) -> Progress<Self> {
        match self {
            Puzzle::Memory(state) => state.on_tick(dt, held).map(Puzzle::Memory),
            Puzzle::Circuit(state) => state.on_tick(dt, held).map(Puzzle::Circuit),
            Puzzle::Laser(state) => state.on_tick(dt, held).map(Puzzle::Laser),
            Puzzle::Binary(state) => state.on_tick(dt, held).map(Puzzle::Binary),
            Puzzle::Hacking(state) => state.on_tick(dt, held).map(Puzzle::Hacking),
        }
    }

    fn is_solved(&self) -> bool {
        match self {
            Puzzle::Memory(state) => state.is_solved(),
            Puzzle::Circuit(state) => state.is_solved(),
            Puzzle::Laser(state) => state.is_solved(),
            Puzzle::Binary(state) => state.is_solved(),
            Puzzle::Hacking(state) => state.is_solved(),
        }
    }
}
