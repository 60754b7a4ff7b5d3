use weiqi_engine::{Engine, GameConfig, Stone};
use wasm_bindgen::prelude::*;

/// Validate a JSON config such as `{"size": 9}`.
/// Returns an empty string when valid, otherwise the error message.
#[wasm_bindgen]
pub fn check_config(json: &str) -> String {
    match GameConfig::from_json(json) {
        Ok(_) => String::new(),
        Err(e) => e.to_string(),
    }
}

#[wasm_bindgen]
pub struct WasmEngine {
    inner: Engine,
}

#[wasm_bindgen]
impl WasmEngine {
    /// Returns `None` (JS `undefined`) for a board size outside the supported range.
    pub fn new(size: u8) -> Option<WasmEngine> {
        let config = GameConfig::new(size).ok()?;
        Some(Self {
            inner: Engine::with_config(config),
        })
    }

    /// Returns `None` (JS `undefined`) if the config is invalid; see [`check_config`].
    pub fn from_config_json(json: &str) -> Option<WasmEngine> {
        let config = GameConfig::from_json(json).ok()?;
        Some(Self {
            inner: Engine::with_config(config),
        })
    }

    // -- Game actions --

    pub fn place_stone(&mut self, col: u8, row: u8) -> bool {
        // Off-board clicks are a UI slip, not a reason to abort the module
        self.inner.try_play((col, row)).is_ok()
    }

    pub fn pass_turn(&mut self) -> bool {
        self.inner.pass_turn()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    // -- Engine accessors (WASM-friendly types) --

    pub fn size(&self) -> u8 {
        self.inner.size()
    }

    /// Row-major board: 1 = Black, -1 = White, 0 = empty.
    pub fn board(&self) -> js_sys::Int8Array {
        let cells: Vec<i8> = self
            .inner
            .snapshot()
            .into_iter()
            .map(|s| s.to_int())
            .collect();
        js_sys::Int8Array::from(cells.as_slice())
    }

    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    pub fn stage(&self) -> String {
        self.inner.stage().to_string()
    }

    pub fn current_turn_stone(&self) -> i8 {
        self.inner.current_turn().to_int()
    }

    pub fn captures_black(&self) -> u32 {
        self.inner.captured().get(Stone::Black)
    }

    pub fn captures_white(&self) -> u32 {
        self.inner.captured().get(Stone::White)
    }

    pub fn is_legal(&self, col: u8, row: u8) -> bool {
        self.inner.is_legal((col, row))
    }

    pub fn has_ko(&self) -> bool {
        self.inner.ko().is_some()
    }

    pub fn ko_col(&self) -> i8 {
        match self.inner.ko() {
            Some(ko) => ko.pos.0 as i8,
            None => -1,
        }
    }

    pub fn ko_row(&self) -> i8 {
        match self.inner.ko() {
            Some(ko) => ko.pos.1 as i8,
            None => -1,
        }
    }

    // -- JSON serialization (WASM boundary) --

    /// Returns JSON: `{ size, stones, game_over, turn }`.
    pub fn view_json(&self) -> String {
        serde_json::to_string(&self.inner.view()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Returns JSON score object:
    /// `{"score":n,"ownership":[...],"black":{"stones":n,"territory":n},"white":{...},"result":"B+3"}`
    pub fn score_json(&self) -> String {
        let score = self.inner.score();
        let mut value = match serde_json::to_value(&score) {
            Ok(v) => v,
            Err(e) => return format!(r#"{{"error":"{}"}}"#, e),
        };
        value["result"] = serde_json::Value::String(score.result());
        value.to_string()
    }
}
