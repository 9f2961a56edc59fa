use std::time::Duration;

use hexmaze_core::{ActiveMiniGame, FailureReason, FrameInput, MiniGameInstance};

use crate::{Progress, PuzzleRules};

/// Starts an attempt on a copy of the instance payload with the full budget.
#[must_use]
pub fn begin_attempt(instance: &MiniGameInstance) -> ActiveMiniGame {
    ActiveMiniGame {
        instance: instance.id,
        puzzle: instance.puzzle.clone(),
        time_left: instance.time_budget,
        time_budget: instance.time_budget,
    }
}

/// Advances an attempt by one tick.
///
/// Pressed actions are applied in arrival order and the first terminal
/// outcome wins. The time-driven reducer runs next, followed by the shared
/// budget: an attempt whose remaining time reaches zero fails as timed out,
/// unless its puzzle is already solved, in which case it completes.
pub fn advance_attempt(
    attempt: ActiveMiniGame,
    dt: Duration,
    input: &FrameInput,
) -> Progress<ActiveMiniGame> {
    let ActiveMiniGame {
        instance,
        mut puzzle,
        time_left,
        time_budget,
    } = attempt;

    for action in &input.pressed {
        puzzle = match puzzle.on_action(*action) {
            Progress::Ongoing(next) => next,
            Progress::Completed => return Progress::Completed,
            Progress::Failed(reason) => return Progress::Failed(reason),
        };
    }

    let puzzle = match puzzle.on_tick(dt, input.held) {
        Progress::Ongoing(next) => next,
        Progress::Completed => return Progress::Completed,
        Progress::Failed(reason) => return Progress::Failed(reason),
    };

    let time_left = time_left.saturating_sub(dt);
    if time_left.is_zero() {
        if puzzle.is_solved() {
            return Progress::Completed;
        }
        return Progress::Failed(FailureReason::TimedOut);
    }

    Progress::Ongoing(ActiveMiniGame {
        instance,
        puzzle,
        time_left,
        time_budget,
    })
}
