//! Browser-facing wrapper around [`GameInstance`].
//!
//! Values cross the boundary as plain JS objects via `serde-wasm-bindgen`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::GameInstance;
use crate::types::{Controller, Side};

#[wasm_bindgen]
pub struct WasmGame {
    inner: GameInstance,
}

#[wasm_bindgen]
impl WasmGame {
    /// `config` may be `undefined` for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmGame, JsValue> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            inner: GameInstance::from_config(config),
        })
    }

    pub fn select_at(&mut self, row: i32, col: i32) -> bool {
        self.inner.select_at(row, col)
    }

    pub fn clear_selection(&mut self) {
        self.inner.clear_selection();
    }

    pub fn move_to(&mut self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        to_js(&self.inner.move_to(row, col))
    }

    pub fn automated_turn(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.automated_turn())
    }

    pub fn needs_automated_turn(&self) -> bool {
        self.inner.needs_automated_turn()
    }

    /// `side` is `"black"` or `"green"`, `controller` is `"Human"` or `"AI"`.
    pub fn set_controller(&mut self, side: JsValue, controller: JsValue) -> Result<(), JsValue> {
        let side: Side = serde_wasm_bindgen::from_value(side)?;
        let controller: Controller = serde_wasm_bindgen::from_value(controller)?;
        self.inner.set_controller(side, controller);
        Ok(())
    }

    pub fn toggle_controller(&mut self, side: JsValue) -> Result<JsValue, JsValue> {
        let side: Side = serde_wasm_bindgen::from_value(side)?;
        to_js(&self.inner.toggle_controller(side))
    }

    pub fn legal_moves_for_selection(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.legal_moves_for_selection())
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.to_game_state())
    }

    pub fn seed(&self) -> u64 {
        self.inner.seed()
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}
