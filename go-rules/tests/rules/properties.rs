use go_rules::{Goban, Stone, Turn, label_to_position, position_to_label};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::init_tracing;

/// Every stone on the board belongs to a group with at least one liberty.
fn assert_groups_breathe(board: &Goban) {
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            if board.stone_at((row, col)).is_some() {
                assert!(
                    !board.liberties((row, col)).is_empty(),
                    "group at ({row}, {col}) has no liberties\n{board}"
                );
            }
        }
    }
}

/// Random legal-or-not moves on a small board, checking invariants after each.
fn random_game(seed: u64, size: u8, moves: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Goban::new(size);
    let mut stone = Stone::Black;

    for _ in 0..moves {
        let turn = if rng.gen_range(0..20) == 0 {
            Turn::pass(stone)
        } else {
            Turn::play(stone, (rng.gen_range(0..size), rng.gen_range(0..size)))
        };

        let before = board.clone();
        let stats = board.stats();
        let analysis = board.analyze(&turn).unwrap();
        assert_eq!(board.analyze(&turn).unwrap(), analysis);
        assert_eq!(board.stats(), stats);
        assert_eq!(board, before);

        if analysis.capturing {
            assert!(!analysis.suicide);
        }

        match board.apply(&turn) {
            Ok(applied) => {
                assert!(analysis.is_legal());
                assert_eq!(applied.captured, analysis.captured);
                let after = applied.board.stats();
                let placed = u32::from(turn.is_play());
                assert_eq!(after.total + applied.captured.len() as u32, stats.total + placed);
                assert_eq!(after.total + after.empty, u32::from(size) * u32::from(size));
                board = applied.board;
                stone = stone.opp();
            }
            Err(err) => {
                assert!(!analysis.is_legal());
                assert_eq!(err.violations(), analysis.violations().as_slice());
                assert_eq!(board, before);
            }
        }
        assert_groups_breathe(&board);
    }
}

#[test]
fn random_games_keep_invariants() {
    init_tracing();
    for seed in 0..20 {
        random_game(seed, 7, 300);
    }
}

#[test]
fn labels_round_trip_on_full_board() {
    for row in 0..19 {
        for col in 0..19 {
            let label = position_to_label(19, (row, col)).unwrap();
            assert_eq!(label_to_position(19, &label), Some((row, col)));
        }
    }
    assert_eq!(position_to_label(19, (19, 0)), None);
    assert_eq!(label_to_position(19, "not a label"), None);
}

#[test]
fn opening_from_the_evaluation_demo() {
    // Q16 D16 Q4 D4 C3 C4 D3 E3 E2 F3 F2 G3 B4, alternating from Black.
    let labels = [
        "Q16", "D16", "Q4", "D4", "C3", "C4", "D3", "E3", "E2", "F3", "F2", "G3", "B4",
    ];
    let mut board = Goban::new(19);
    let mut stone = Stone::Black;
    for label in labels {
        let point = board.point(label).unwrap();
        board = board.play(point, stone).unwrap();
        stone = stone.opp();
    }
    assert_eq!(board.stats().total, 13);
    assert_eq!(board.captures().black, 0);

    // The White C4-D4 pair keeps three liberties.
    let c4 = board.point("C4").unwrap();
    assert_eq!(board.stone_at(c4), Some(Stone::White));
    assert_eq!(board.chain(c4).len(), 2);
    let mut libs: Vec<String> = board
        .liberties(c4)
        .into_iter()
        .filter_map(|p| board.label(p))
        .collect();
    libs.sort();
    assert_eq!(libs, ["C5", "D5", "E4"]);
}
