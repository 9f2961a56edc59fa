use hexmaze_core::{Action, CircuitPuzzle, Connection};

use crate::{Progress, PuzzleRules};

const REQUIRED_CONNECTIONS: usize = 4;

impl PuzzleRules for CircuitPuzzle {
    fn on_action(mut self, action: Action) -> Progress<Self> {
        let Action::Connect(slot) = action else {
            return Progress::Ongoing(self);
        };
        if usize::from(slot) != self.connections.len() {
            return Progress::Ongoing(self);
        }

        self.connections.push(Connection {
            from: slot,
            to: slot,
        });
        if self.connections.len() >= REQUIRED_CONNECTIONS {
            Progress::Completed
        } else {
            Progress::Ongoing(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_must_be_wired_in_order() {
        let state = CircuitPuzzle::default();
        let Progress::Ongoing(state) = state.on_action(Action::Connect(2)) else {
            panic!("out-of-order slot must not end the puzzle");
        };
        assert!(state.connections.is_empty());

        let mut progress = Progress::Ongoing(state);
        for slot in 0..4 {
            let Progress::Ongoing(state) = progress else {
                panic!("puzzle ended early at slot {slot}");
            };
            progress = state.on_action(Action::Connect(slot));
        }
        assert_eq!(progress, Progress::Completed);
    }
}
