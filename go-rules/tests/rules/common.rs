#![allow(dead_code)]

use go_rules::{Goban, Stone, Turn};

/// Install a fmt subscriber once so `RUST_LOG=go_rules=debug` shows engine events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "go_rules=warn".into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn b(row: u8, col: u8) -> Turn {
    Turn::play(Stone::Black, (row, col))
}

pub fn w(row: u8, col: u8) -> Turn {
    Turn::play(Stone::White, (row, col))
}

/// Build a board from an ASCII layout. 'B' = Black, 'W' = White, anything else empty.
pub fn layout(rows: &[&str]) -> Goban {
    Goban::from_rows(
        rows.iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'B' => 1,
                        'W' => -1,
                        _ => 0,
                    })
                    .collect()
            })
            .collect(),
    )
}

/// Apply turns one at a time, panicking on the first failure.
pub fn play_all(board: &Goban, turns: &[Turn]) -> Goban {
    turns.iter().fold(board.clone(), |board, turn| {
        board
            .apply(turn)
            .unwrap_or_else(|e| panic!("{turn} failed: {e}"))
            .board
    })
}
