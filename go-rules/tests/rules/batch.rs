use go_rules::{Goban, GoError, Stone, Turn, Violation, batch_analyze, batch_apply};

use crate::common::{b, init_tracing, play_all, w};

fn sequence() -> Vec<Turn> {
    vec![
        b(2, 2),
        w(2, 3),
        b(3, 3),
        w(1, 2),
        b(2, 3), // overwrite
        w(9, 9), // never evaluated
        b(0, 0),
    ]
}

#[test]
fn batch_apply_matches_the_legal_prefix() {
    init_tracing();
    let start = Goban::new(9);
    let turns = sequence();

    let report = batch_apply(&start, &turns);
    let failure = report.failure.as_ref().unwrap();
    assert_eq!(failure.index, 4);
    assert_eq!(failure.turn, b(2, 3));
    assert_eq!(failure.reason.violations(), &[Violation::Overwrite]);

    assert_eq!(report.board, play_all(&start, &turns[..4]));
    assert_eq!(report.steps.len(), 4);
    assert!(report.steps.iter().enumerate().all(|(i, s)| s.index == i));
    assert!(start.is_empty());
}

#[test]
fn batch_incomplete_error_names_the_index() {
    let report = batch_apply(&Goban::new(9), &sequence());
    match report.into_result() {
        Err(GoError::BatchIncomplete { index, reason }) => {
            assert_eq!(index, 4);
            assert_eq!(reason.violations(), &[Violation::Overwrite]);
        }
        other => panic!("expected BatchIncomplete, got {other:?}"),
    }
}

#[test]
fn batch_analyze_reports_steps_and_failure() {
    init_tracing();
    let start = play_all(&Goban::new(9), &[b(0, 1), b(1, 0)]);
    let turns = [w(4, 4), w(0, 0), b(5, 5)];

    let check = batch_analyze(&start, &turns);
    assert_eq!(check.first_failure(), Some(1));
    assert_eq!(check.steps.len(), 1);

    let failure = check.failure.unwrap();
    let analysis = failure.analysis.unwrap();
    assert!(analysis.suicide);
    assert_eq!(start.stats().total, 2);
}

#[test]
fn batch_analyze_sees_earlier_captures() {
    // Step 4 captures the White stone; White returning to the emptied point is suicide.
    let turns = [
        b(0, 1),
        w(1, 1),
        b(1, 0),
        b(1, 2),
        b(2, 1),
        w(1, 1),
    ];
    let check = batch_analyze(&Goban::new(5), &turns);
    assert_eq!(check.first_failure(), Some(5));
    assert_eq!(
        check.failure.as_ref().unwrap().reason.violations(),
        &[Violation::Suicide]
    );
    assert!(check.steps[4].analysis.capturing);
    assert_eq!(check.steps[4].analysis.captured, vec![(1, 1)]);
}

#[test]
fn passes_are_always_legal_in_a_batch() {
    let turns = [Turn::pass(Stone::Black), Turn::pass(Stone::White), b(0, 0)];
    let report = batch_apply(&Goban::new(3), &turns);
    assert!(report.is_complete());
    assert!(report.steps[0].analysis.pass);
    assert_eq!(report.board.stone_at((0, 0)), Some(Stone::Black));
}

#[test]
fn with_turns_replays_onto_an_empty_board() {
    let board = Goban::with_turns(9, &[b(4, 4), w(4, 5)]).unwrap();
    assert_eq!(board.stats().total, 2);

    let err = Goban::with_turns(9, &[b(4, 4), w(4, 4)]).unwrap_err();
    assert!(matches!(err, GoError::BatchIncomplete { index: 1, .. }));
}
