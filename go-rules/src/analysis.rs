use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::{Violation, Violations};

/// What a candidate move would do, computed without committing it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveAnalysis {
    pub pass: bool,
    pub overwrite: bool,
    pub ko: bool,
    pub suicide: bool,
    pub capturing: bool,
    /// Opponent stones removed by the move.
    pub captured: Vec<Point>,
}

impl MoveAnalysis {
    pub fn pass() -> Self {
        MoveAnalysis {
            pass: true,
            ..Default::default()
        }
    }

    pub fn overwrite() -> Self {
        MoveAnalysis {
            overwrite: true,
            ..Default::default()
        }
    }

    pub fn is_legal(&self) -> bool {
        self.violations().is_empty()
    }

    pub fn violations(&self) -> Violations {
        let mut v = Violations::new();
        if self.overwrite {
            v.push(Violation::Overwrite);
        }
        if self.suicide {
            v.push(Violation::Suicide);
        }
        if self.ko {
            v.push(Violation::Ko);
        }
        v
    }
}
