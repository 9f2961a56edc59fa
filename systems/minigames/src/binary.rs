use hexmaze_core::{Action, BinaryPuzzle};

use crate::{Progress, PuzzleRules};

impl PuzzleRules for BinaryPuzzle {
    fn on_action(mut self, action: Action) -> Progress<Self> {
        let last = self.bits.len() - 1;
        match action {
            Action::Bit(bit) => {
                if let Some(slot) = self.bits.get_mut(self.cursor) {
                    *slot = bit;
                }
            }
            Action::CursorLeft => self.cursor = self.cursor.saturating_sub(1),
            Action::CursorRight => self.cursor = (self.cursor + 1).min(last),
            Action::Confirm if self.value() == self.target => return Progress::Completed,
            _ => {}
        }
        Progress::Ongoing(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter(target: u8, pattern: &str) -> Progress<BinaryPuzzle> {
        let mut state = BinaryPuzzle {
            target,
            bits: [false; 8],
            cursor: 0,
        };
        for (index, digit) in pattern.chars().enumerate() {
            if index > 0 {
                state = match state.on_action(Action::CursorRight) {
                    Progress::Ongoing(state) => state,
                    other => panic!("cursor move ended the puzzle: {other:?}"),
                };
            }
            state = match state.on_action(Action::Bit(digit == '1')) {
                Progress::Ongoing(state) => state,
                other => panic!("bit entry ended the puzzle: {other:?}"),
            };
        }
        state.on_action(Action::Confirm)
    }

    #[test]
    fn matching_bits_complete() {
        assert_eq!(enter(42, "00101010"), Progress::Completed);
    }

    #[test]
    fn mismatch_keeps_puzzle_open() {
        match enter(42, "00101011") {
            Progress::Ongoing(state) => assert_eq!(state.bit_string(), "00101011"),
            other => panic!("wrong answer must not end the puzzle: {other:?}"),
        }
    }

    #[test]
    fn cursor_is_clamped() {
        let state = BinaryPuzzle {
            target: 1,
            bits: [false; 8],
            cursor: 7,
        };
        let Progress::Ongoing(state) = state.on_action(Action::CursorRight) else {
            panic!("cursor move ended the puzzle");
        };
        assert_eq!(state.cursor, 7);

        let state = BinaryPuzzle { cursor: 0, ..state };
        let Progress::Ongoing(state) = state.on_action(Action::CursorLeft) else {
            panic!("cursor move ended the puzzle");
        };
        assert_eq!(state.cursor, 0);
    }
}
