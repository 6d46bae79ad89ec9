use go_rules::{Goban, Stone};

use crate::common::{b, play_all, w};

#[test]
fn mutating_a_clone_leaves_the_original() {
    // Ko in place on the original.
    let original = play_all(
        &Goban::new(9),
        &[b(1, 0), w(1, 1), b(0, 1), w(0, 2), b(2, 1), w(2, 2), b(8, 8), w(1, 3), b(1, 2)],
    );
    assert!(original.ko().is_some());
    let snapshot = original.clone();

    let copy = original.clone();
    let copy = copy.apply(&w(5, 5)).unwrap().board;
    let copy = copy.apply(&b(6, 6)).unwrap().board;

    assert_eq!(original, snapshot);
    assert_eq!(original.stone_at((5, 5)), None);
    assert!(original.ko().is_some());
    assert_ne!(copy.board(), original.board());
    assert!(copy.ko().is_none());
}

#[test]
fn clones_can_move_to_other_threads() {
    let board = Goban::new(9).play((4, 4), Stone::Black).unwrap();
    let handles: Vec<_> = [(0u8, 0u8), (8, 8)]
        .into_iter()
        .map(|pt| {
            let board = board.clone();
            std::thread::spawn(move || board.play(pt, Stone::White).map(|g| g.stats().total))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(2));
    }
    assert_eq!(board.stats().total, 1);
}
