use go_rules::{DEFAULT_SIZE, Goban, Stone, Turn};
use wasm_bindgen::prelude::*;

pub mod bridge;

/// Apply a JSON move list to an empty board.
/// Returns JSON: `{ success, board, steps, stats, ko, captures, message?, failedStep?, violations? }`
/// On malformed input: `{ "error": "message" }`
#[wasm_bindgen(js_name = quickBatchMove)]
pub fn quick_batch_move(moves_json: &str, options_json: &str) -> String {
    bridge::to_json(bridge::quick_batch_move(moves_json, options_json))
}

/// Check a JSON move list without keeping the resulting board.
/// Returns JSON array: `[{ step, sign, vertex, label, isValid, reason?, violations, captured }]`
#[wasm_bindgen(js_name = quickBatchCheck)]
pub fn quick_batch_check(moves_json: &str, options_json: &str) -> String {
    bridge::to_json(bridge::quick_batch_check(moves_json, options_json))
}

/// Build the final position from a JSON move list; any illegal move yields `{ "error": ... }`.
#[wasm_bindgen(js_name = createGameFromMoves)]
pub fn create_game_from_moves(moves_json: &str, options_json: &str) -> String {
    bridge::to_json(bridge::create_game_from_moves(moves_json, options_json))
}

#[wasm_bindgen]
pub struct WasmBoard {
    inner: Goban,
}

#[wasm_bindgen]
impl WasmBoard {
    /// A size of 0 falls back to 19.
    #[wasm_bindgen(constructor)]
    pub fn new(size: u8) -> Self {
        let size = if size == 0 { DEFAULT_SIZE } else { size };
        Self {
            inner: Goban::new(size),
        }
    }

    // -- Game actions --

    pub fn try_play(&mut self, sign: i8, row: u8, col: u8) -> bool {
        let Some(stone) = Stone::from_sign(sign) else {
            return false;
        };
        match self.inner.apply(&Turn::play(stone, (row, col))) {
            Ok(applied) => {
                self.inner = applied.board;
                true
            }
            Err(_) => false,
        }
    }

    pub fn pass(&mut self) {
        self.inner = self.inner.pass();
    }

    /// JSON `MoveAnalysis` for a candidate move, or `{ "error": ... }`.
    pub fn analyze(&self, sign: i8, row: u8, col: u8) -> String {
        bridge::to_json(bridge::analyze(&self.inner, sign, row, col))
    }

    /// Play a JSON move list from the current position. The board keeps the
    /// legal prefix even when a later move fails.
    pub fn apply_moves(&mut self, moves_json: &str) -> String {
        let result = bridge::apply_moves(&self.inner, moves_json).map(|(board, output)| {
            self.inner = board;
            output
        });
        bridge::to_json(result)
    }

    /// Independent copy of this board.
    pub fn snapshot(&self) -> WasmBoard {
        WasmBoard {
            inner: self.inner.clone(),
        }
    }

    // -- Accessors (WASM-friendly types) --

    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.inner.board())
    }

    pub fn size(&self) -> u8 {
        self.inner.size()
    }

    pub fn captures_black(&self) -> u32 {
        self.inner.captures().get(Stone::Black)
    }

    pub fn captures_white(&self) -> u32 {
        self.inner.captures().get(Stone::White)
    }

    pub fn is_legal(&self, sign: i8, row: u8, col: u8) -> bool {
        Stone::from_sign(sign).is_some_and(|stone| self.inner.is_legal((row, col), stone))
    }

    pub fn has_ko(&self) -> bool {
        self.inner.ko().is_some()
    }

    pub fn ko_row(&self) -> i32 {
        self.inner.ko().map_or(-1, |ko| i32::from(ko.pos.0))
    }

    pub fn ko_col(&self) -> i32 {
        self.inner.ko().map_or(-1, |ko| i32::from(ko.pos.1))
    }

    pub fn stats_json(&self) -> String {
        bridge::to_json(Ok(self.inner.stats()))
    }

    pub fn state_json(&self) -> String {
        bridge::to_json(Ok(bridge::game_output(&self.inner)))
    }

    /// Label such as `D4`, or an empty string when the point has none.
    pub fn label(&self, row: u8, col: u8) -> String {
        self.inner.label((row, col)).unwrap_or_default()
    }

    /// `[row, col]` for a label, or `[-1, -1]` when it is not recognized.
    pub fn vertex(&self, label: &str) -> Vec<i32> {
        match self.inner.point(label) {
            Some((row, col)) => vec![i32::from(row), i32::from(col)],
            None => vec![-1, -1],
        }
    }

    pub fn render(&self) -> String {
        self.inner.to_string()
    }
}
