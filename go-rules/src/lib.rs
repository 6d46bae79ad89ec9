pub mod analysis;
pub mod batch;
pub mod coord;
pub mod error;
pub mod goban;
pub mod ko;
pub mod stone;
pub mod turn;

/// A board position as `(row, col)`, row 0 at the top edge.
pub type Point = (u8, u8);

pub use analysis::MoveAnalysis;
pub use batch::{BatchCheck, BatchFailure, BatchReport, Step, batch_analyze, batch_apply};
pub use coord::{Vertex, label_to_position, parse_vertex, position_to_label};
pub use error::{GoError, Violation, Violations};
pub use goban::{Applied, Captures, DEFAULT_SIZE, Goban, Group, Stats};
pub use ko::Ko;
pub use stone::Stone;
pub use turn::Turn;
