use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;
use crate::analysis::MoveAnalysis;
use crate::batch;
use crate::coord;
use crate::error::GoError;
use crate::ko::Ko;
use crate::stone::Stone;
use crate::turn::Turn;

/// Conventional board size.
pub const DEFAULT_SIZE: u8 = 19;

/// Captures indexed by the color that made them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Captures {
    pub black: u32,
    pub white: u32,
}

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn credit(&mut self, stone: Stone, count: usize) {
        let total = match stone {
            Stone::Black => &mut self.black,
            Stone::White => &mut self.white,
        };
        *total += count as u32;
    }
}

/// Stone counts over the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub black: u32,
    pub white: u32,
    pub empty: u32,
    pub total: u32,
}

/// Result of a successful `Goban::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub board: Goban,
    pub captured: Vec<Point>,
}

/// A connected group of same-colored stones and its liberties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    pub stones: Vec<Point>,
    pub liberties: Vec<Point>,
}

/// A checked move: its analysis, and the resulting board when it is legal.
pub(crate) struct Checked {
    pub(crate) analysis: MoveAnalysis,
    pub(crate) board: Option<Goban>,
}

/// A square Go board stored as a flat row-major array of signs.
///
/// Every operation takes `&self`; moves produce a new `Goban`, so a clone is
/// never affected by play on the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goban {
    board: Vec<i8>,
    size: u8,
    captures: Captures,
    ko: Option<Ko>,
}

impl Goban {
    /// Create an empty board.
    ///
    /// Any size from 1 to 255 plays by the same rules, but only boards up to
    /// `coord::MAX_LABELED_SIZE` (25) have labels: `label` and `point` return
    /// `None` on wider ones.
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "board size must be positive");
        Goban {
            board: vec![0i8; size as usize * size as usize],
            size,
            captures: Captures::new(),
            ko: None,
        }
    }

    /// Create a board from a square row-major matrix of signs (`1`, `-1`, `0`).
    pub fn from_rows(rows: Vec<Vec<i8>>) -> Self {
        let size = rows.len();
        assert!(
            size > 0 && size <= u8::MAX as usize && rows.iter().all(|row| row.len() == size),
            "malformed board matrix"
        );

        Goban {
            board: rows.into_iter().flatten().map(i8::signum).collect(),
            size: size as u8,
            captures: Captures::new(),
            ko: None,
        }
    }

    /// Play `turns` in order onto an empty board, failing on the first illegal one.
    pub fn with_turns(size: u8, turns: &[Turn]) -> Result<Self, GoError> {
        batch::batch_apply(&Goban::new(size), turns).into_result()
    }

    // -- Accessors --

    pub fn board(&self) -> &[i8] {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    pub fn ko(&self) -> Option<&Ko> {
        self.ko.as_ref()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_sign(self.board[self.idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.board.iter().all(|&s| s == 0)
    }

    // -- Derived views --

    pub fn stats(&self) -> Stats {
        let mut stats = Stats::default();
        for &s in &self.board {
            match Stone::from_sign(s) {
                Some(Stone::Black) => stats.black += 1,
                Some(Stone::White) => stats.white += 1,
                None => stats.empty += 1,
            }
        }
        stats.total = stats.black + stats.white;
        stats
    }

    /// The grid as a row-major matrix of signs.
    pub fn to_rows(&self) -> Vec<Vec<i8>> {
        self.board
            .chunks(self.size as usize)
            .map(<[i8]>::to_vec)
            .collect()
    }

    pub fn label(&self, point: Point) -> Option<String> {
        coord::position_to_label(self.size, point)
    }

    pub fn point(&self, label: &str) -> Option<Point> {
        coord::label_to_position(self.size, label)
    }

    // -- Game actions --

    /// Report what `turn` would do without committing it.
    ///
    /// Rule violations are data in the returned analysis; only an off-board
    /// point is an error.
    pub fn analyze(&self, turn: &Turn) -> Result<MoveAnalysis, GoError> {
        self.check(turn).map(|checked| checked.analysis)
    }

    /// Apply `turn`, returning the resulting board and the stones it captured.
    /// On error `self` is left exactly as it was.
    pub fn apply(&self, turn: &Turn) -> Result<Applied, GoError> {
        let Checked { analysis, board } = self.check(turn)?;
        match board {
            Some(board) => {
                if analysis.capturing {
                    tracing::trace!("{turn} captured {} stone(s)", analysis.captured.len());
                }
                Ok(Applied {
                    board,
                    captured: analysis.captured,
                })
            }
            None => {
                let err = GoError::IllegalMove(analysis.violations());
                tracing::debug!("rejected {turn}: {err}");
                Err(err)
            }
        }
    }

    /// Place a stone. Returns a new Goban with the move applied, or an error.
    pub fn play(&self, point: Point, stone: Stone) -> Result<Goban, GoError> {
        self.apply(&Turn::play(stone, point)).map(|applied| applied.board)
    }

    /// Pass: same grid, ko cleared.
    pub fn pass(&self) -> Goban {
        Goban {
            ko: None,
            ..self.clone()
        }
    }

    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        self.analyze(&Turn::play(stone, point))
            .is_ok_and(|analysis| analysis.is_legal())
    }

    /// Analyze `turn` and, when it is legal, build the board it leads to.
    ///
    /// The stone goes down on a scratch copy and dead opponent groups come
    /// off before the mover's own liberties are counted: a move that kills
    /// something is never suicide.
    pub(crate) fn check(&self, turn: &Turn) -> Result<Checked, GoError> {
        let Some(point) = turn.pos else {
            return Ok(Checked {
                analysis: MoveAnalysis::pass(),
                board: Some(self.pass()),
            });
        };
        self.check_on_board(point)?;

        if self.stone_at(point).is_some() {
            return Ok(Checked {
                analysis: MoveAnalysis::overwrite(),
                board: None,
            });
        }

        let stone = turn.stone;
        let mut next = self.clone();
        next.ko = None;
        next.set(point, Some(stone));

        let mut touched: Vec<Group> = Vec::new();
        for n in next.neighbors(point) {
            if next.stone_at(n) != Some(stone.opp()) || touched.iter().any(|g| g.stones.contains(&n)) {
                continue;
            }
            touched.push(next.group(n));
        }
        let captured: Vec<Point> = touched
            .into_iter()
            .filter(|g| g.liberties.is_empty())
            .flat_map(|g| g.stones)
            .collect();

        for &p in &captured {
            next.set(p, None);
        }
        if !captured.is_empty() {
            next.captures.credit(stone, captured.len());
        }

        let own = next.group(point);
        let analysis = MoveAnalysis {
            ko: self.ko.is_some_and(|ko| ko.forbids(point, stone)),
            suicide: own.liberties.is_empty(),
            capturing: !captured.is_empty(),
            captured,
            ..Default::default()
        };

        let board = analysis.is_legal().then(|| {
            next.ko = ko_after(&own, &analysis.captured, stone);
            next
        });
        Ok(Checked { analysis, board })
    }

    // -- Groups --

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        [
            (row.checked_sub(1), Some(col)),
            (row.checked_add(1), Some(col)),
            (Some(row), col.checked_sub(1)),
            (Some(row), col.checked_add(1)),
        ]
        .into_iter()
        .filter_map(|(r, c)| Some((r?, c?)))
        .filter(|&p| self.on_board(p))
        .collect()
    }

    /// The group containing `point` and its liberties, from one flood fill.
    /// Empty when the point holds no stone.
    pub fn group(&self, point: Point) -> Group {
        let mut group = Group::default();
        let Some(stone) = self.stone_at(point) else {
            return group;
        };

        let mut seen = vec![false; self.board.len()];
        seen[self.idx(point)] = true;
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            group.stones.push(p);
            for n in self.neighbors(p) {
                let i = self.idx(n);
                if seen[i] {
                    continue;
                }
                match self.stone_at(n) {
                    None => {
                        seen[i] = true;
                        group.liberties.push(n);
                    }
                    Some(s) if s == stone => {
                        seen[i] = true;
                        stack.push(n);
                    }
                    Some(_) => {}
                }
            }
        }

        group
    }

    pub fn chain(&self, point: Point) -> Vec<Point> {
        self.group(point).stones
    }

    pub fn liberties(&self, point: Point) -> Vec<Point> {
        self.group(point).liberties
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, (row, col): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }

    fn check_on_board(&self, point: Point) -> Result<(), GoError> {
        if self.on_board(point) {
            Ok(())
        } else {
            Err(GoError::OutOfRange {
                point,
                size: self.size,
            })
        }
    }

    /// Write an occupant; callers pass on-board points only.
    fn set(&mut self, point: Point, stone: Option<Stone>) {
        let i = self.idx(point);
        self.board[i] = stone.map_or(0, Stone::sign);
    }
}

/// The classic ko shape: a lone stone took exactly one stone and its only
/// liberty is the point it just emptied.
fn ko_after(own: &Group, captured: &[Point], stone: Stone) -> Option<Ko> {
    match (own.stones.as_slice(), own.liberties.as_slice(), captured) {
        ([_], [liberty], [taken]) if liberty == taken => Some(Ko {
            pos: *taken,
            illegal: stone.opp(),
        }),
        _ => None,
    }
}

impl fmt::Display for Goban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.size.to_string().len();

        write!(f, "{:width$} ", "")?;
        for col in 0..self.size {
            write!(f, " {}", coord::column_letter(col).unwrap_or('?'))?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            write!(f, "{:>width$} ", self.size - row)?;
            for col in 0..self.size {
                let glyph = self.stone_at((row, col)).map_or('·', Stone::glyph);
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
