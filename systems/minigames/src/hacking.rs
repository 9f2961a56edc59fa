use std::time::Duration;

use hexmaze_core::{Action, DirectionSet, FailureReason, HackingPuzzle};

use crate::{Progress, PuzzleRules};

const CODE_LENGTH: usize = 4;
const COMPLETION_DELAY: Duration = Duration::from_secs(1);

impl PuzzleRules for HackingPuzzle {
    fn on_action(mut self, action: Action) -> Progress<Self> {
        if self.completion_delay.is_some() {
            return Progress::Ongoing(self);
        }

        match action {
            Action::Digit(digit) if digit <= 9 && self.input.len() < CODE_LENGTH => {
                self.input.push(char::from(b'0' + digit));
            }
            Action::Backspace => {
                let _ = self.input.pop();
            }
            Action::Confirm if self.input.len() == CODE_LENGTH => {
                let guess = self.input.parse::<u16>().ok();
                self.input.clear();

                let mut found = false;
                for code in self.codes.iter_mut().filter(|code| !code.cracked) {
                    if Some(code.value) == guess {
                        code.cracked = true;
                        found = true;
                    }
                }

                if !found {
                    self.attempts = self.attempts.saturating_sub(1);
                    if self.attempts == 0 {
                        return Progress::Failed(FailureReason::OutOfAttempts);
                    }
                }
                if self.all_cracked() {
                    self.completion_delay = Some(COMPLETION_DELAY);
                }
            }
            _ => {}
        }

        Progress::Ongoing(self)
    }

    fn on_tick(mut self, dt: Duration, _held: DirectionSet) -> Progress<Self> {
        match self.completion_delay {
            Some(delay) if delay <= dt => Progress::Completed,
            Some(delay) => {
                self.completion_delay = Some(delay - dt);
                Progress::Ongoing(self)
            }
            None => Progress::Ongoing(self),
        }
    }

    fn is_solved(&self) -> bool {
        self.completion_delay.is_some()
    }
}

#[cfg(test)]
mod tests {
    use hexmaze_core::AccessCode;

    use super::*;

    fn puzzle(values: &[u16]) -> HackingPuzzle {
        HackingPuzzle {
            codes: values
                .iter()
                .map(|value| AccessCode {
                    value: *value,
                    cracked: false,
                })
                .collect(),
            input: String::new(),
            attempts: 3,
            completion_delay: None,
        }
    }

    fn guess(state: HackingPuzzle, code: &str) -> Progress<HackingPuzzle> {
        let mut state = state;
        for digit in code.bytes() {
            state = match state.on_action(Action::Digit(digit - b'0')) {
                Progress::Ongoing(state) => state,
                other => panic!("typing ended the puzzle: {other:?}"),
            };
        }
        state.on_action(Action::Confirm)
    }

    #[test]
    fn three_wrong_guesses_fail() {
        let mut state = puzzle(&[1234, 5678]);
        for _ in 0..2 {
            state = match guess(state, "9999") {
                Progress::Ongoing(state) => state,
                other => panic!("attempts remain: {other:?}"),
            };
        }
        assert_eq!(state.attempts, 1);
        assert_eq!(
            guess(state, "9999"),
            Progress::Failed(FailureReason::OutOfAttempts)
        );
    }

    #[test]
    fn correct_guess_cracks_every_matching_code() {
        let state = puzzle(&[1234, 5678, 1234]);
        let Progress::Ongoing(state) = guess(state, "1234") else {
            panic!("codes remain");
        };
        assert_eq!(state.attempts, 3, "correct guesses are free");
        assert!(state.codes[0].cracked && state.codes[2].cracked);
        assert!(!state.codes[1].cracked);
        assert!(state.input.is_empty());
    }

    #[test]
    fn completion_waits_for_the_delay() {
        let Progress::Ongoing(state) = guess(puzzle(&[4321]), "4321") else {
            panic!("completion is delayed");
        };
        assert_eq!(state.completion_delay, Some(COMPLETION_DELAY));

        let Progress::Ongoing(state) = state.on_tick(Duration::from_millis(600), DirectionSet::empty())
        else {
            panic!("delay not elapsed");
        };
        assert_eq!(
            state.on_tick(Duration::from_millis(400), DirectionSet::empty()),
            Progress::Completed
        );
    }

    #[test]
    fn input_is_capped_and_editable() {
        let mut state = puzzle(&[1111]);
        for digit in [1, 2, 3, 4, 5] {
            state = match state.on_action(Action::Digit(digit)) {
                Progress::Ongoing(state) => state,
                other => panic!("typing ended the puzzle: {other:?}"),
            };
        }
        assert_eq!(state.input, "1234");

        let Progress::Ongoing(state) = state.on_action(Action::Backspace) else {
            panic!("backspace ended the puzzle");
        };
        assert_eq!(state.input, "123");

        let Progress::Ongoing(state) = state.on_action(Action::Confirm) else {
            panic!("short confirm ended the puzzle");
        };
        assert_eq!(state.attempts, 3, "short input is not a guess");
        assert_eq!(state.input, "123");
    }
}
