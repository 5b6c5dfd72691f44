use multibits_common::Square;
use multibits_session::{Board, SessionConfig};
use wasm_bindgen::prelude::*;

use crate::utils::{js_error, session_error, to_js_value};

fn square(index: u32) -> Result<Square, JsValue> {
    Square::try_new(index).map_err(|e| js_error(e.to_string()))
}

/// Board editor state for one page: square inputs, paste field and result line.
#[wasm_bindgen]
pub struct BoardSession {
    inner: Board,
}

#[wasm_bindgen]
impl BoardSession {
    /// `config` is an optional plain object matching `SessionConfig`
    /// (`{ edit_policy: "reject", palette: { high: "#ff0000" } }`).
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<BoardSession, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value::<SessionConfig>(config)
                .map_err(|e| js_error(format!("Invalid session config: {e}")))?
        };
        Ok(BoardSession {
            inner: Board::with_config(config),
        })
    }

    /// Handle input typed into square `index`'s field.
    #[wasm_bindgen(js_name = "setSquare")]
    pub fn set_square(&mut self, index: u32, text: &str) -> Result<(), JsValue> {
        let square = square(index)?;
        self.inner
            .edit_square(square, text)
            .map_err(|e| session_error(&e))
    }

    #[wasm_bindgen(js_name = "setValue")]
    pub fn set_value(&mut self, index: u32, value: u64) -> Result<(), JsValue> {
        let square = square(index)?;
        self.inner.set_value(square, value);
        Ok(())
    }

    /// Handle a change of the paste field. Throws on an unparseable list; the
    /// board then follows the configured paste-failure policy.
    pub fn paste(&mut self, text: &str) -> Result<(), JsValue> {
        self.inner.paste(text).map_err(|e| session_error(&e))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn result(&self) -> String {
        self.inner.result().to_string()
    }

    #[wasm_bindgen(getter, js_name = "inputText")]
    pub fn input_text(&self) -> String {
        self.inner.input_text().to_string()
    }

    #[wasm_bindgen(getter, js_name = "maxValue")]
    pub fn max_value(&self) -> u64 {
        self.inner.max_value()
    }

    #[wasm_bindgen(getter, js_name = "planeCount")]
    pub fn plane_count(&self) -> usize {
        self.inner.planes().width()
    }

    pub fn value(&self, index: u32) -> Result<u64, JsValue> {
        Ok(self.inner.value(square(index)?))
    }

    /// All 64 values in square-index order.
    pub fn values(&self) -> Vec<u64> {
        self.inner.values().to_vec()
    }

    pub fn intensity(&self, index: u32) -> Result<f64, JsValue> {
        Ok(self.inner.intensity(square(index)?))
    }

    /// CSS `rgb(r, g, b)` for square `index` under the session palette.
    pub fn color(&self, index: u32) -> Result<String, JsValue> {
        Ok(self.inner.color(square(index)?).to_css())
    }

    /// Square indices in grid order, rank 8 first.
    #[wasm_bindgen(js_name = "displayOrder")]
    pub fn display_order() -> Vec<u32> {
        Square::display_order().map(|s| s.index() as u32).collect()
    }

    #[wasm_bindgen(js_name = "squareName")]
    pub fn square_name(index: u32) -> Result<String, JsValue> {
        Ok(square(index)?.to_string())
    }

    #[wasm_bindgen(js_name = "toJSON")]
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        to_js_value(self.inner.snapshot())
    }

    #[wasm_bindgen(js_name = "toString")]
    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> String {
        format!(
            "BoardSession(max {}, {} planes)",
            self.inner.max_value(),
            self.inner.planes().width()
        )
    }
}
