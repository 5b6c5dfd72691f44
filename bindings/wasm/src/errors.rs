use multibits_parse::ParseError;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// A rejected literal from a paste, exposed to JS as the `cause` of the thrown `Error`.
#[wasm_bindgen]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralError {
    message: String,
    token_index: usize,
    start: usize,
    end: usize,
}

#[wasm_bindgen]
impl LiteralError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: String, token_index: usize, start: usize, end: usize) -> LiteralError {
        LiteralError {
            message,
            token_index,
            start,
            end,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    #[wasm_bindgen(getter, js_name = "tokenIndex")]
    pub fn token_index(&self) -> usize {
        self.token_index
    }

    #[wasm_bindgen(getter)]
    pub fn start(&self) -> usize {
        self.start
    }

    #[wasm_bindgen(getter)]
    pub fn end(&self) -> usize {
        self.end
    }

    #[wasm_bindgen(js_name = "toString")]
    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> String {
        format!(
            "LiteralError: {} at {}..{} (literal {})",
            self.message, self.start, self.end, self.token_index
        )
    }
}

impl From<&ParseError> for LiteralError {
    fn from(err: &ParseError) -> Self {
        LiteralError {
            message: err.kind.to_string(),
            token_index: err.index,
            start: err.start,
            end: err.end,
        }
    }
}
