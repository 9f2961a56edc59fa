//! Logical input consumed by the simulation.

use serde::{Deserialize, Serialize};

use crate::Direction;

/// Discrete actions pressed during a frame, already resolved from raw devices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Starts the mini-game next to the player.
    Interact,
    /// Toggles between playing and paused.
    Pause,
    /// Memory puzzle symbol in `0..=3`.
    Symbol(u8),
    /// Circuit puzzle input slot in `0..=3`.
    Connect(u8),
    /// Binary puzzle bit written at the cursor.
    Bit(bool),
    /// Moves the binary puzzle cursor toward the most significant bit.
    CursorLeft,
    /// Moves the binary puzzle cursor toward the least significant bit.
    CursorRight,
    /// Code-cracking digit in `0..=9`.
    Digit(u8),
    /// Removes the last code-cracking digit.
    Backspace,
    /// Submits the current puzzle answer.
    Confirm,
}

/// Set of directions held down during a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionSet {
    bits: u8,
}

impl DirectionSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Returns a copy of the set with the provided direction added.
    #[must_use]
    pub const fn with(self, direction: Direction) -> Self {
        Self {
            bits: self.bits | Self::bit(direction),
        }
    }

    /// Adds a direction to the set.
    pub fn insert(&mut self, direction: Direction) {
        self.bits |= Self::bit(direction);
    }

    /// Reports whether the direction is held.
    #[must_use]
    pub const fn contains(&self, direction: Direction) -> bool {
        self.bits & Self::bit(direction) != 0
    }

    /// Reports whether no direction is held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Unit axis intent: `-1`, `0` or `1` per axis. Opposite directions cancel.
    #[must_use]
    pub fn axis(&self) -> (f32, f32) {
        let horizontal = axis_value(self.contains(Direction::West), self.contains(Direction::East));
        let vertical = axis_value(self.contains(Direction::North), self.contains(Direction::South));
        (horizontal, vertical)
    }

    const fn bit(direction: Direction) -> u8 {
        match direction {
            Direction::North => 0b0001,
            Direction::East => 0b0010,
            Direction::South => 0b0100,
            Direction::West => 0b1000,
        }
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut set = Self::empty();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

fn axis_value(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// Input snapshot gathered by adapters before each tick.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Directions held down during the frame.
    pub held: DirectionSet,
    /// Actions pressed during the frame, in arrival order.
    pub pressed: Vec<Action>,
}

impl FrameInput {
    /// Creates an input that only holds the provided directions.
    #[must_use]
    pub fn holding(held: DirectionSet) -> Self {
        Self {
            held,
            pressed: Vec::new(),
        }
    }

    /// Creates an input that presses the provided actions in order.
    #[must_use]
    pub fn pressing(pressed: impl IntoIterator<Item = Action>) -> Self {
        Self {
            held: DirectionSet::empty(),
            pressed: pressed.into_iter().collect(),
        }
    }

    /// Reports whether the action was pressed during the frame.
    #[must_use]
    pub fn pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions_cancel() {
        let held: DirectionSet = [Direction::West, Direction::East, Direction::South]
            .into_iter()
            .collect();
        assert_eq!(held.axis(), (0.0, 1.0));
    }

    #[test]
    fn with_builds_sets_incrementally() {
        let held = DirectionSet::empty()
            .with(Direction::North)
            .with(Direction::East);
        assert!(held.contains(Direction::North));
        assert!(held.contains(Direction::East));
        assert!(!held.contains(Direction::South));
        assert!(!held.is_empty());
    }
}
