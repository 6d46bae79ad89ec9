use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// A live ko: the point just emptied by a single-stone capture, and the color
/// that may not retake it on the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
    pub illegal: Stone,
}

impl Ko {
    pub fn forbids(&self, point: Point, stone: Stone) -> bool {
        self.pos == point && self.illegal == stone
    }
}
