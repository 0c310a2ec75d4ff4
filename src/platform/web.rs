//! wasm-bindgen surface for a JS front end
//!
//! JS calls `submitFingertip` from its tracking loop whenever the model
//! reports a hand, calls `tick` from `setInterval(tickIntervalMs)`, and draws
//! from `snapshotJson`. Clearing the interval is the teardown.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::engine::Engine;
use crate::input::PaddleInput;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub struct WebGame {
    engine: Engine,
    input: PaddleInput,
}

#[wasm_bindgen]
impl WebGame {
    /// Default tuning on a field matching the game view
    #[wasm_bindgen(constructor)]
    pub fn new(field_width: f32, field_height: f32) -> Result<WebGame, JsValue> {
        Self::with_config(GameConfig::with_field(field_width, field_height))
    }

    /// Full config as JSON (missing keys take defaults)
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<WebGame, JsValue> {
        let config = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::with_config(config)
    }

    /// Index fingertip x from the tracker, in pixels of a frame `frame_width` wide
    #[wasm_bindgen(js_name = submitFingertip)]
    pub fn submit_fingertip(&self, raw_x: f32, frame_width: f32) -> bool {
        self.input.submit_camera_sample_in(raw_x, frame_width)
    }

    /// Advance one tick; returns this tick's events as JSON
    pub fn tick(&mut self) -> String {
        let events = self.engine.step();
        serde_json::to_string(&events).unwrap_or_default()
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        self.engine.snapshot().to_json()
    }

    #[wasm_bindgen(js_name = restartRound)]
    pub fn restart_round(&mut self) {
        self.engine.restart_round();
    }

    #[wasm_bindgen(js_name = tickIntervalMs)]
    pub fn tick_interval_ms(&self) -> u32 {
        self.engine.config().tick_interval_ms_u32()
    }
}

impl WebGame {
    fn with_config(config: GameConfig) -> Result<WebGame, JsValue> {
        let engine = Engine::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let input = engine.input();
        Ok(WebGame { engine, input })
    }
}
