use std::time::Duration;

use hexmaze_core::{
    AccessCode, Action, CellCoord, CircuitPuzzle, FailureReason, FrameInput, HackingPuzzle,
    InstanceId, MiniGameInstance, MiniGameKind, Puzzle,
};
use hexmaze_system_minigames::{advance_attempt, begin_attempt, create, Progress};
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

fn circuit_instance() -> MiniGameInstance {
    MiniGameInstance {
        id: InstanceId::new(0),
        cell: CellCoord::new(3, 3),
        completed: false,
        time_budget: MiniGameKind::Circuit.time_budget(),
        puzzle: Puzzle::Circuit(CircuitPuzzle::default()),
    }
}

#[test]
fn attempt_starts_from_a_fresh_copy() {
    let instance = circuit_instance();
    let attempt = begin_attempt(&instance);
    assert_eq!(attempt.instance, instance.id);
    assert_eq!(attempt.time_left, Duration::from_secs(30));
    assert_eq!(attempt.puzzle, instance.puzzle);

    let input = FrameInput::pressing([Action::Connect(0), Action::Connect(1)]);
    let Progress::Ongoing(attempt) = advance_attempt(attempt, Duration::from_millis(16), &input)
    else {
        panic!("two connections do not finish the circuit");
    };
    let Puzzle::Circuit(circuit) = &attempt.puzzle else {
        panic!("payload changed kind");
    };
    assert_eq!(circuit.connections.len(), 2);
    assert_eq!(
        instance.puzzle,
        Puzzle::Circuit(CircuitPuzzle::default()),
        "stored instance is untouched"
    );
}

#[test]
fn actions_stop_at_the_first_terminal_outcome() {
    let attempt = begin_attempt(&circuit_instance());
    let input = FrameInput::pressing((0..4).map(Action::Connect).chain([Action::Connect(9)]));
    assert_eq!(
        advance_attempt(attempt, Duration::from_millis(16), &input),
        Progress::Completed
    );
}

#[test]
fn budget_exhaustion_times_out() {
    let mut attempt = begin_attempt(&circuit_instance());
    let idle = FrameInput::default();
    for _ in 0..599 {
        attempt = match advance_attempt(attempt, Duration::from_millis(50), &idle) {
            Progress::Ongoing(attempt) => attempt,
            other => panic!("budget not yet spent: {other:?}"),
        };
    }
    assert_eq!(attempt.time_left, Duration::from_millis(50));
    assert_eq!(
        advance_attempt(attempt, Duration::from_millis(50), &idle),
        Progress::Failed(FailureReason::TimedOut)
    );
}

#[test]
fn every_kind_produces_a_matching_payload() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xfeed);
    for kind in MiniGameKind::ALL {
        assert_eq!(create(kind, &mut rng).kind(), kind);
    }
}

#[test]
fn memory_sequences_have_bounded_length() {
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    for _ in 0..50 {
        let Puzzle::Memory(memory) = create(MiniGameKind::Memory, &mut rng) else {
            panic!("kind mismatch");
        };
        assert!((4..=7).contains(&memory.sequence.len()));
        assert!(memory.sequence.iter().all(|symbol| *symbol < 4));
        assert!(memory.showing);
    }
}

#[test]
fn binary_targets_stay_in_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..200 {
        let Puzzle::Binary(binary) = create(MiniGameKind::Binary, &mut rng) else {
            panic!("kind mismatch");
        };
        assert!((1..=128).contains(&binary.target));
        assert_eq!(binary.value(), 0);
    }
}

#[test]
fn cracked_terminal_completes_when_the_budget_runs_out_during_its_delay() {
    let instance = MiniGameInstance {
        id: InstanceId::new(1),
        cell: CellCoord::new(5, 5),
        completed: false,
        time_budget: Duration::from_millis(500),
        puzzle: Puzzle::Hacking(HackingPuzzle {
            codes: vec![AccessCode {
                value: 1234,
                cracked: false,
            }],
            input: String::new(),
            attempts: 3,
            completion_delay: None,
        }),
    };
    let step = Duration::from_millis(100);
    let guess = FrameInput::pressing([
        Action::Digit(1),
        Action::Digit(2),
        Action::Digit(3),
        Action::Digit(4),
        Action::Confirm,
    ]);

    let mut progress = advance_attempt(begin_attempt(&instance), step, &guess);
    for _ in 0..10 {
        progress = match progress {
            Progress::Ongoing(attempt) => advance_attempt(attempt, step, &FrameInput::default()),
            outcome => outcome,
        };
    }
    assert_eq!(progress, Progress::Completed);
}
