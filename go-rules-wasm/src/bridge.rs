//! JSON boundary between move records produced by evaluation tooling and the
//! rules engine. Everything here is plain Rust so it can be tested natively;
//! `lib.rs` only wraps it for `wasm-bindgen`.

use go_rules::{
    BatchFailure, Captures, DEFAULT_SIZE, Goban, Ko, MoveAnalysis, Point, Stats, Step, Stone,
    Turn, Vertex, Violations, batch_analyze, batch_apply, parse_vertex, position_to_label,
};
use serde::{Deserialize, Serialize};

/// Request options. An empty string means all defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    pub size: u8,
}

impl Default for Options {
    fn default() -> Self {
        Options { size: DEFAULT_SIZE }
    }
}

/// A move target as sent by callers: `[row, col]` or a label such as `"D4"` or `"pass"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VertexInput {
    Coords([i32; 2]),
    Label(String),
}

/// `{"sign": 1 | -1, "vertex": ...}`. A missing or null vertex is a pass.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveInput {
    pub sign: Stone,
    #[serde(default)]
    pub vertex: Option<VertexInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutput {
    /// 1-based move number.
    pub step: usize,
    pub sign: Stone,
    pub vertex: Option<[u8; 2]>,
    pub label: Option<String>,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Rule violations of a failed step; empty for played moves and
    /// off-board points.
    pub violations: Violations,
    pub captured: Vec<[u8; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchMoveOutput {
    pub success: bool,
    pub board: Vec<Vec<i8>>,
    pub steps: Vec<StepOutput>,
    pub stats: Stats,
    pub ko: Option<Ko>,
    pub captures: Captures,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_step: Option<usize>,
    #[serde(skip_serializing_if = "Violations::is_empty")]
    pub violations: Violations,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOutput {
    pub size: u8,
    pub board: Vec<Vec<i8>>,
    pub stats: Stats,
    pub ko: Option<Ko>,
    pub captures: Captures,
    pub render: String,
}

pub fn parse_options(json: &str) -> Result<Options, String> {
    let options = if json.trim().is_empty() {
        Options::default()
    } else {
        serde_json::from_str::<Options>(json).map_err(|e| format!("invalid options: {e}"))?
    };
    if options.size == 0 {
        return Err("board size must be positive".to_string());
    }
    Ok(options)
}

/// Parse a JSON move list into turns for a `size` board.
///
/// `[-1, -1]` is a pass. Coordinates that fit a `u8` are passed through even
/// when off the board, so the engine reports them in the batch result.
pub fn parse_moves(json: &str, size: u8) -> Result<Vec<Turn>, String> {
    let moves: Vec<MoveInput> =
        serde_json::from_str(json).map_err(|e| format!("invalid move list: {e}"))?;

    moves
        .iter()
        .enumerate()
        .map(|(i, m)| to_turn(m, size).map_err(|e| format!("move {}: {e}", i + 1)))
        .collect()
}

fn to_turn(m: &MoveInput, size: u8) -> Result<Turn, String> {
    match &m.vertex {
        None | Some(VertexInput::Coords([-1, -1])) => Ok(Turn::pass(m.sign)),
        Some(VertexInput::Coords([row, col])) => {
            let point = u8::try_from(*row)
                .ok()
                .zip(u8::try_from(*col).ok())
                .ok_or_else(|| format!("vertex [{row}, {col}] is off the board"))?;
            Ok(Turn::play(m.sign, point))
        }
        Some(VertexInput::Label(label)) => match parse_vertex(size, label) {
            Some(Vertex::Point(point)) => Ok(Turn::play(m.sign, point)),
            Some(Vertex::Pass) => Ok(Turn::pass(m.sign)),
            None => Err(format!("unrecognized label {label:?}")),
        },
    }
}

/// Play `moves_json` on top of `board`, stopping at the first illegal move.
/// Returns the board after the legal prefix along with the report.
pub fn apply_moves(board: &Goban, moves_json: &str) -> Result<(Goban, BatchMoveOutput), String> {
    let turns = parse_moves(moves_json, board.size())?;
    let report = batch_apply(board, &turns);
    let size = report.board.size();

    let output = BatchMoveOutput {
        success: report.is_complete(),
        board: report.board.to_rows(),
        steps: step_outputs(size, &report.steps, report.failure.as_ref()),
        stats: report.board.stats(),
        ko: report.board.ko().copied(),
        captures: report.board.captures().clone(),
        message: report.failure.as_ref().map(|f| f.reason.to_string()),
        failed_step: report.failure.as_ref().map(|f| f.index + 1),
        violations: report.failure.as_ref().map(failure_violations).unwrap_or_default(),
    };
    Ok((report.board, output))
}

/// Apply a move list to an empty board.
pub fn quick_batch_move(moves_json: &str, options_json: &str) -> Result<BatchMoveOutput, String> {
    let options = parse_options(options_json)?;
    apply_moves(&Goban::new(options.size), moves_json).map(|(_, output)| output)
}

/// Check a move list against an empty board without keeping the result.
pub fn quick_batch_check(moves_json: &str, options_json: &str) -> Result<Vec<StepOutput>, String> {
    let options = parse_options(options_json)?;
    let turns = parse_moves(moves_json, options.size)?;
    let check = batch_analyze(&Goban::new(options.size), &turns);
    Ok(step_outputs(options.size, &check.steps, check.failure.as_ref()))
}

/// Build the final position from a move list; any illegal move is an error.
pub fn create_game_from_moves(moves_json: &str, options_json: &str) -> Result<GameOutput, String> {
    let options = parse_options(options_json)?;
    let turns = parse_moves(moves_json, options.size)?;
    let board = Goban::with_turns(options.size, &turns).map_err(|e| e.to_string())?;
    Ok(game_output(&board))
}

pub fn game_output(board: &Goban) -> GameOutput {
    GameOutput {
        size: board.size(),
        board: board.to_rows(),
        stats: board.stats(),
        ko: board.ko().copied(),
        captures: board.captures().clone(),
        render: board.to_string(),
    }
}

pub fn analyze(board: &Goban, sign: i8, row: u8, col: u8) -> Result<MoveAnalysis, String> {
    let stone = Stone::from_sign(sign).ok_or_else(|| format!("invalid sign {sign}"))?;
    board
        .analyze(&Turn::play(stone, (row, col)))
        .map_err(|e| e.to_string())
}

fn step_outputs(size: u8, steps: &[Step], failure: Option<&BatchFailure>) -> Vec<StepOutput> {
    let mut out: Vec<StepOutput> = steps
        .iter()
        .map(|s| StepOutput {
            step: s.index + 1,
            sign: s.turn.stone,
            vertex: s.turn.pos.map(pair),
            label: s.turn.pos.and_then(|p| position_to_label(size, p)),
            is_valid: true,
            reason: None,
            violations: Violations::new(),
            captured: s.analysis.captured.iter().copied().map(pair).collect(),
        })
        .collect();

    if let Some(f) = failure {
        out.push(StepOutput {
            step: f.index + 1,
            sign: f.turn.stone,
            vertex: f.turn.pos.map(pair),
            label: f.turn.pos.and_then(|p| position_to_label(size, p)),
            is_valid: false,
            reason: Some(f.reason.to_string()),
            violations: failure_violations(f),
            captured: Vec::new(),
        });
    }
    out
}

fn failure_violations(f: &BatchFailure) -> Violations {
    f.reason.violations().iter().copied().collect()
}

fn pair((row, col): Point) -> [u8; 2] {
    [row, col]
}

/// Serialize a bridge result, turning failures into `{"error": "..."}`.
pub fn to_json<T: Serialize>(result: Result<T, String>) -> String {
    let value = match result.and_then(|v| serde_json::to_value(v).map_err(|e| e.to_string())) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("bridge request failed: {e}");
            serde_json::json!({ "error": e })
        }
    };
    value.to_string()
}
