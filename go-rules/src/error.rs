use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;

/// A rule a candidate move breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Violation {
    Overwrite,
    Suicide,
    Ko,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Overwrite => write!(f, "overwrite"),
            Violation::Suicide => write!(f, "suicide"),
            Violation::Ko => write!(f, "ko violation"),
        }
    }
}

/// Every rule a single move can break at once.
pub type Violations = ArrayVec<Violation, 3>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoError {
    #[error("point {point:?} is outside a {size}x{size} board")]
    OutOfRange { point: Point, size: u8 },

    #[error("illegal move: {}", join(.0))]
    IllegalMove(Violations),

    #[error("batch stopped at move {index}: {reason}")]
    BatchIncomplete { index: usize, reason: Box<GoError> },
}

impl GoError {
    /// The rules broken, if this is an illegal-move error (directly or as a batch stop reason).
    pub fn violations(&self) -> &[Violation] {
        match self {
            GoError::IllegalMove(v) => v.as_slice(),
            GoError::BatchIncomplete { reason, .. } => reason.violations(),
            GoError::OutOfRange { .. } => &[],
        }
    }
}

fn join(violations: &Violations) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
