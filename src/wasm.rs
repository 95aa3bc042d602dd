use wasm_bindgen::prelude::*;

use crate::board::Color;
use crate::game::GameState;
use crate::moves::Move;
use crate::square::Square;

/// Browser-facing handle on one game session.
#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a new game from the standard position.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        console_error_panic_hook::set_once();
        WasmGame {
            state: GameState::new(),
        }
    }

    /// Replace the position. Returns true on success; on failure the old position stays.
    pub fn set_position(&mut self, position: &str) -> bool {
        match GameState::from_position_string(position) {
            Ok(state) => {
                self.state = state;
                true
            }
            Err(_) => false,
        }
    }

    /// Full six-field position string.
    pub fn position(&self) -> String {
        self.state.to_position_string()
    }

    /// Board notation only.
    pub fn board(&self) -> String {
        self.state.board().to_notation()
    }

    /// Piece letter on `square` (e.g. "e4"), or undefined when empty or malformed.
    pub fn piece_at(&self, square: &str) -> Option<String> {
        let sq = Square::from_name(square).ok()?;
        self.state.get_piece_at(sq).map(|p| p.to_char().to_string())
    }

    /// Apply a coordinate move such as "e2e4". Returns false if it was refused.
    pub fn apply_move(&mut self, text: &str) -> bool {
        match text.parse::<Move>() {
            Ok(mv) => self.state.play(mv).is_ok(),
            Err(_) => false,
        }
    }

    /// Take back the last move. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.state.undo_move().is_some()
    }

    /// "light" or "dark"
    pub fn side_to_move(&self) -> String {
        match self.state.side_to_move() {
            Color::Light => "light".to_string(),
            Color::Dark => "dark".to_string(),
        }
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        WasmGame::new()
    }
}
