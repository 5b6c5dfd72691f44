use multibits_codec::ValueGrid;
use wasm_bindgen::prelude::*;

mod board;
mod errors;
mod utils;

pub use board::*;
pub use errors::*;

#[wasm_bindgen(start)]
pub fn init() {
    utils::set_panic_hook();
}

/// Encode values given in square-index order (missing squares are 0) into
/// the `0x..` literal list.
#[wasm_bindgen]
pub fn encode(values: Vec<u64>) -> Result<String, JsValue> {
    let grid = ValueGrid::from_slice(&values).map_err(|e| utils::js_error(e.to_string()))?;
    Ok(multibits_codec::encode(&grid).to_literals())
}

/// Decode a literal list into 64 values in square-index order.
#[wasm_bindgen]
pub fn decode(literals: &str) -> Result<Vec<u64>, JsValue> {
    multibits_codec::parse_and_decode(literals)
        .map(|grid| grid.to_vec())
        .map_err(|e| utils::codec_error(&e))
}

#[wasm_bindgen(js_name = "planeCount")]
pub fn plane_count(max_value: u64) -> usize {
    multibits_codec::plane_count(max_value)
}
