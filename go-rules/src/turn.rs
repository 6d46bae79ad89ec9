use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;
use crate::stone::Stone;

/// A candidate move: a stone color and either a target point or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub stone: Stone,
    pub pos: Option<Point>,
}

impl Turn {
    pub fn play(stone: Stone, point: Point) -> Self {
        Turn {
            stone,
            pos: Some(point),
        }
    }

    pub fn pass(stone: Stone) -> Self {
        Turn { stone, pos: None }
    }

    pub fn is_play(&self) -> bool {
        self.pos.is_some()
    }

    pub fn is_pass(&self) -> bool {
        self.pos.is_none()
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pos {
            Some((row, col)) => write!(f, "{} ({row}, {col})", self.stone.letter()),
            None => write!(f, "{} pass", self.stone.letter()),
        }
    }
}
