//! Conversion between `(row, col)` points and conventional Go labels such as `Q16`.
//!
//! Column letters skip `I`. Row numbers count down from the board size, so
//! row `0` is the top edge and carries the highest number.

use crate::Point;

/// Column letters in board order.
pub const COLUMN_LETTERS: &str = "ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Widest board that still has a letter for every column.
pub const MAX_LABELED_SIZE: u8 = 25;

/// A vertex parsed from text: either a point or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertex {
    Point(Point),
    Pass,
}

pub fn column_letter(col: u8) -> Option<char> {
    COLUMN_LETTERS.chars().nth(col as usize)
}

/// Label for `point` on a `size` board, or `None` when the point is off the
/// board or the board is too wide to label.
///
/// Only boards up to `MAX_LABELED_SIZE` have labels; the engine itself plays
/// on any size up to 255.
pub fn position_to_label(size: u8, (row, col): Point) -> Option<String> {
    if size > MAX_LABELED_SIZE || row >= size || col >= size {
        return None;
    }
    let letter = column_letter(col)?;
    Some(format!("{letter}{}", size - row))
}

/// Point named by `label` on a `size` board. Case and surrounding whitespace
/// are ignored; anything unrecognized or off the board yields `None`, as does
/// every label on a board wider than `MAX_LABELED_SIZE`.
pub fn label_to_position(size: u8, label: &str) -> Option<Point> {
    if size > MAX_LABELED_SIZE {
        return None;
    }
    let label = label.trim();
    let mut chars = label.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    let col = COLUMN_LETTERS.find(letter)? as u8;

    let digits = chars.as_str();
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number: u8 = digits.parse().ok()?;

    if col >= size || number == 0 || number > size {
        return None;
    }
    Some((size - number, col))
}

/// Parse a move target: a label, or `pass` in any case.
pub fn parse_vertex(size: u8, text: &str) -> Option<Vertex> {
    if text.trim().eq_ignore_ascii_case("pass") {
        return Some(Vertex::Pass);
    }
    label_to_position(size, text).map(Vertex::Point)
}
