//! Mini-game instances and their typed puzzle payloads.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{CellCoord, InstanceId};

/// Enumerates the five puzzle types that can be embedded in a maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MiniGameKind {
    /// Repeat a displayed sequence of symbols.
    Memory,
    /// Wire four inputs in slot order.
    Circuit,
    /// Steer a runner through moving beams to a goal square.
    Laser,
    /// Enter the binary representation of a decimal target.
    Binary,
    /// Guess the access codes shown on screen.
    Hacking,
}

impl MiniGameKind {
    /// Every kind, in declaration order.
    pub const ALL: [MiniGameKind; 5] = [
        MiniGameKind::Memory,
        MiniGameKind::Circuit,
        MiniGameKind::Laser,
        MiniGameKind::Binary,
        MiniGameKind::Hacking,
    ];

    /// Time an attempt of this kind may take before it fails.
    #[must_use]
    pub const fn time_budget(self) -> Duration {
        match self {
            Self::Memory => Duration::from_secs(20),
            Self::Circuit => Duration::from_secs(30),
            Self::Laser => Duration::from_secs(40),
            Self::Binary | Self::Hacking => Duration::from_secs(60),
        }
    }

    /// Short lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Circuit => "circuit",
            Self::Laser => "laser",
            Self::Binary => "binary",
            Self::Hacking => "hacking",
        }
    }
}

/// Sequence-recall puzzle state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryPuzzle {
    /// Symbols to reproduce, each in `0..=3`.
    pub sequence: Vec<u8>,
    /// Symbols entered so far.
    pub entered: Vec<u8>,
    /// Whether the sequence is still being displayed.
    pub showing: bool,
    /// Index of the symbol currently displayed.
    pub display_index: usize,
    /// Time the current symbol has been displayed.
    pub display_elapsed: Duration,
}

/// One wire of the circuit puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// Input slot.
    pub from: u8,
    /// Output slot.
    pub to: u8,
}

/// Circuit-wiring puzzle state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitPuzzle {
    /// Accepted connections in slot order.
    pub connections: Vec<Connection>,
}

/// Moving obstacle of the laser puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaserBeam {
    /// Top-left corner in arena units.
    pub position: Vec2,
    /// Width and height in arena units.
    pub size: Vec2,
    /// Direction of travel in radians.
    pub heading: f32,
    /// Speed in arena units per second.
    pub speed: f32,
}

/// Effect granted by a collected power-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Temporary invulnerability to beams.
    Shield,
    /// Temporary double speed.
    Boost,
}

/// Collectible of the laser puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    /// Top-left corner in arena units.
    pub position: Vec2,
    /// Effect granted on pickup.
    pub kind: PowerUpKind,
    /// Whether the runner already picked it up.
    pub collected: bool,
}

/// Beam-dodging puzzle state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaserPuzzle {
    /// Top-left corner of the runner in arena units.
    pub runner: Vec2,
    /// Runner speed in arena units per second without boost.
    pub base_speed: f32,
    /// Remaining shield time, if shielded.
    pub shield: Option<Duration>,
    /// Remaining boost time, if boosted.
    pub boost: Option<Duration>,
    /// Moving obstacles.
    pub beams: Vec<LaserBeam>,
    /// Collectibles.
    pub power_ups: Vec<PowerUp>,
}

/// Decimal-to-binary puzzle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryPuzzle {
    /// Value to encode, in `1..=128`.
    pub target: u8,
    /// Entered bits, most significant first.
    pub bits: [bool; 8],
    /// Index of the bit the next write targets.
    pub cursor: usize,
}

impl BinaryPuzzle {
    /// Numeric value of the entered bits.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.bits
            .iter()
            .fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit))
    }

    /// Entered bits rendered as `0`/`1` characters, most significant first.
    #[must_use]
    pub fn bit_string(&self) -> String {
        self.bits
            .iter()
            .map(|bit| if *bit { '1' } else { '0' })
            .collect()
    }
}

/// Access code shown by the code-cracking puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessCode {
    /// Four-digit value in `1000..=9999`.
    pub value: u16,
    /// Whether the code was guessed.
    pub cracked: bool,
}

/// Code-cracking puzzle state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HackingPuzzle {
    /// Codes to crack.
    pub codes: Vec<AccessCode>,
    /// Digits typed since the last confirm.
    pub input: String,
    /// Wrong guesses still allowed.
    pub attempts: u32,
    /// Remaining delay before completion once every code is cracked.
    pub completion_delay: Option<Duration>,
}

impl HackingPuzzle {
    /// Reports whether every code was cracked.
    #[must_use]
    pub fn all_cracked(&self) -> bool {
        self.codes.iter().all(|code| code.cracked)
    }
}

/// Typed payload of a mini-game, tagged by kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Puzzle {
    /// Sequence-recall payload.
    Memory(MemoryPuzzle),
    /// Circuit-wiring payload.
    Circuit(CircuitPuzzle),
    /// Beam-dodging payload.
    Laser(LaserPuzzle),
    /// Decimal-to-binary payload.
    Binary(BinaryPuzzle),
    /// Code-cracking payload.
    Hacking(HackingPuzzle),
}

impl Puzzle {
    /// Kind tag of the payload.
    #[must_use]
    pub const fn kind(&self) -> MiniGameKind {
        match self {
            Self::Memory(_) => MiniGameKind::Memory,
            Self::Circuit(_) => MiniGameKind::Circuit,
            Self::Laser(_) => MiniGameKind::Laser,
            Self::Binary(_) => MiniGameKind::Binary,
            Self::Hacking(_) => MiniGameKind::Hacking,
        }
    }
}

/// Mini-game placed in a level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MiniGameInstance {
    /// Identifier unique within the level.
    pub id: InstanceId,
    /// Cell hosting the terminal.
    pub cell: CellCoord,
    /// Whether the instance was solved. Never reset within a level.
    pub completed: bool,
    /// Time an attempt may take.
    pub time_budget: Duration,
    /// Initial payload every attempt starts from.
    pub puzzle: Puzzle,
}

impl MiniGameInstance {
    /// Kind tag of the hosted puzzle.
    #[must_use]
    pub const fn kind(&self) -> MiniGameKind {
        self.puzzle.kind()
    }
}

/// Attempt in progress on one instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActiveMiniGame {
    /// Instance being attempted.
    pub instance: InstanceId,
    /// Working copy of the payload.
    pub puzzle: Puzzle,
    /// Time left before the attempt fails.
    pub time_left: Duration,
    /// Full time budget of the attempt.
    pub time_budget: Duration,
}

impl ActiveMiniGame {
    /// Kind tag of the attempted puzzle.
    #[must_use]
    pub const fn kind(&self) -> MiniGameKind {
        self.puzzle.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_value_reads_most_significant_bit_first() {
        let puzzle = BinaryPuzzle {
            target: 42,
            bits: [false, false, true, false, true, false, true, false],
            cursor: 0,
        };
        assert_eq!(puzzle.value(), 42);
        assert_eq!(puzzle.bit_string(), "00101010");
    }

    #[test]
    fn budgets_match_puzzle_difficulty() {
        let budgets: Vec<u64> = MiniGameKind::ALL
            .iter()
            .map(|kind| kind.time_budget().as_secs())
            .collect();
        assert_eq!(budgets, vec![20, 30, 40, 60, 60]);
    }

    #[test]
    fn puzzle_tag_matches_payload() {
        let puzzle = Puzzle::Circuit(CircuitPuzzle::default());
        assert_eq!(puzzle.kind(), MiniGameKind::Circuit);
        assert_eq!(puzzle.kind().label(), "circuit");
    }
}
