use std::time::Duration;

use hexmaze_core::{whole_periods, Action, DirectionSet, MemoryPuzzle};

use crate::{Progress, PuzzleRules};

const SYMBOL_DISPLAY_TIME: Duration = Duration::from_secs(1);

impl PuzzleRules for MemoryPuzzle {
    fn on_action(mut self, action: Action) -> Progress<Self> {
        let Action::Symbol(symbol) = action else {
            return Progress::Ongoing(self);
        };
        if self.showing {
            return Progress::Ongoing(self);
        }

        self.entered.push(symbol);
        let position = self.entered.len() - 1;
        if self.sequence.get(position) != Some(&symbol) {
            self.entered.clear();
            return Progress::Ongoing(self);
        }

        if self.entered.len() == self.sequence.len() {
            Progress::Completed
        } else {
            Progress::Ongoing(self)
        }
    }

    fn on_tick(mut self, dt: Duration, _held: DirectionSet) -> Progress<Self> {
        if !self.showing {
            return Progress::Ongoing(self);
        }

        let (steps, remainder) =
            whole_periods(self.display_elapsed.saturating_add(dt), SYMBOL_DISPLAY_TIME);
        let remaining = self.sequence.len().saturating_sub(self.display_index);
        if steps > 0 && steps >= remaining as u128 {
            self.showing = false;
            self.display_index = 0;
            self.display_elapsed = Duration::ZERO;
        } else {
            self.display_index += usize::try_from(steps).unwrap_or(remaining);
            self.display_elapsed = remainder;
        }

        Progress::Ongoing(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puzzle(sequence: Vec<u8>) -> MemoryPuzzle {
        MemoryPuzzle {
            sequence,
            entered: Vec::new(),
            showing: true,
            display_index: 0,
            display_elapsed: Duration::ZERO,
        }
    }

    fn ongoing(progress: Progress<MemoryPuzzle>) -> MemoryPuzzle {
        match progress {
            Progress::Ongoing(state) => state,
            other => panic!("expected ongoing puzzle, got {other:?}"),
        }
    }

    #[test]
    fn display_advances_once_per_second() {
        let state = puzzle(vec![0, 1, 2, 3]);
        let state = ongoing(state.on_tick(Duration::from_millis(999), DirectionSet::empty()));
        assert_eq!(state.display_index, 0);

        let state = ongoing(state.on_tick(Duration::from_millis(1), DirectionSet::empty()));
        assert_eq!(state.display_index, 1);

        let state = ongoing(state.on_tick(Duration::from_secs(3), DirectionSet::empty()));
        assert!(!state.showing, "sequence finished displaying");
        assert_eq!(state.display_index, 0);
    }

    #[test]
    fn symbols_are_ignored_while_showing() {
        let state = ongoing(puzzle(vec![2, 2, 2, 2]).on_action(Action::Symbol(2)));
        assert!(state.entered.is_empty());
    }

    #[test]
    fn exact_sequence_completes() {
        let mut state = puzzle(vec![3, 0, 1, 1]);
        state.showing = false;
        for symbol in [3, 0, 1] {
            state = ongoing(state.on_action(Action::Symbol(symbol)));
        }
        assert_eq!(state.entered, vec![3, 0, 1]);
        assert_eq!(state.on_action(Action::Symbol(1)), Progress::Completed);
    }

    #[test]
    fn wrong_symbol_clears_progress_without_failing() {
        let mut state = puzzle(vec![3, 0, 1, 1]);
        state.showing = false;
        state = ongoing(state.on_action(Action::Symbol(3)));
        state = ongoing(state.on_action(Action::Symbol(2)));
        assert!(state.entered.is_empty());

        state = ongoing(state.on_action(Action::Symbol(3)));
        assert_eq!(state.entered, vec![3]);
    }

    #[test]
    fn long_ticks_skip_several_symbols_at_once() {
        let state = puzzle(vec![0, 1, 2, 3, 0, 1]);
        let state = ongoing(state.on_tick(Duration::from_millis(2_500), DirectionSet::empty()));
        assert!(state.showing);
        assert_eq!(state.display_index, 2);
        assert_eq!(state.display_elapsed, Duration::from_millis(500));

        let state = ongoing(state.on_tick(Duration::MAX, DirectionSet::empty()));
        assert!(!state.showing);
        assert_eq!(state.display_index, 0);
        assert_eq!(state.display_elapsed, Duration::ZERO);
    }
}
