//! Sequential application and checking of move lists.
//!
//! Both entry points stop at the first move that fails and never look at
//! the moves after it. A failure is reported in the returned value, never
//! raised.

use serde::Serialize;

use crate::analysis::MoveAnalysis;
use crate::error::GoError;
use crate::goban::{Checked, Goban};
use crate::turn::Turn;

/// A move that was played successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub index: usize,
    pub turn: Turn,
    pub analysis: MoveAnalysis,
}

/// The move that stopped a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    pub index: usize,
    pub turn: Turn,
    pub reason: GoError,
    /// `None` when the move could not be analyzed at all (off-board point).
    pub analysis: Option<MoveAnalysis>,
}

/// Outcome of `batch_apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// The board after the successful prefix.
    pub board: Goban,
    pub steps: Vec<Step>,
    pub failure: Option<BatchFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// The final board, or `BatchIncomplete` naming the move that stopped the batch.
    pub fn into_result(self) -> Result<Goban, GoError> {
        match self.failure {
            None => Ok(self.board),
            Some(failure) => Err(GoError::BatchIncomplete {
                index: failure.index,
                reason: Box::new(failure.reason),
            }),
        }
    }
}

/// Outcome of `batch_analyze`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCheck {
    pub steps: Vec<Step>,
    pub failure: Option<BatchFailure>,
}

impl BatchCheck {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    pub fn first_failure(&self) -> Option<usize> {
        self.failure.as_ref().map(|f| f.index)
    }
}

/// Apply `turns` in order starting from `board`.
pub fn batch_apply(board: &Goban, turns: &[Turn]) -> BatchReport {
    let mut board = board.clone();
    let mut steps = Vec::with_capacity(turns.len());

    for (index, turn) in turns.iter().enumerate() {
        let Checked { analysis, board: next } = match board.check(turn) {
            Ok(checked) => checked,
            Err(reason) => return stopped(board, steps, index, turn, reason, None),
        };

        let Some(next) = next else {
            let reason = GoError::IllegalMove(analysis.violations());
            return stopped(board, steps, index, turn, reason, Some(analysis));
        };

        board = next;
        steps.push(Step {
            index,
            turn: *turn,
            analysis,
        });
    }

    BatchReport {
        board,
        steps,
        failure: None,
    }
}

/// Check `turns` in order against a scratch copy of `board`.
pub fn batch_analyze(board: &Goban, turns: &[Turn]) -> BatchCheck {
    let BatchReport { steps, failure, .. } = batch_apply(board, turns);
    BatchCheck { steps, failure }
}

fn stopped(
    board: Goban,
    steps: Vec<Step>,
    index: usize,
    turn: &Turn,
    reason: GoError,
    analysis: Option<MoveAnalysis>,
) -> BatchReport {
    tracing::debug!("batch stopped at move {index} ({turn}): {reason}");
    BatchReport {
        board,
        steps,
        failure: Some(BatchFailure {
            index,
            turn: *turn,
            reason,
            analysis,
        }),
    }
}
