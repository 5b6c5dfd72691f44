use multibits_codec::CodecError;
use multibits_parse::ParseError;
use multibits_session::SessionError;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::errors::LiteralError;

pub fn set_panic_hook() {
    #[cfg(feature = "console_panic")]
    console_error_panic_hook::set_once();
}

pub fn js_error(message: impl AsRef<str>) -> JsValue {
    js_sys::Error::new(message.as_ref()).into()
}

/// A JS `Error`; when a literal was rejected its [`LiteralError`] becomes the
/// `cause` so the page can highlight the token.
fn literal_error(message: String, literal: Option<&ParseError>) -> JsValue {
    let error = js_sys::Error::new(&message);
    if let Some(parse) = literal {
        let cause: JsValue = LiteralError::from(parse).into();
        let _ = js_sys::Reflect::set(&error, &JsValue::from_str("cause"), &cause);
    }
    error.into()
}

pub fn session_error(err: &SessionError) -> JsValue {
    literal_error(err.to_string(), err.parse_error())
}

pub fn codec_error(err: &CodecError) -> JsValue {
    let literal = match err {
        CodecError::Parse(parse) => Some(parse),
        _ => None,
    };
    literal_error(err.to_string(), literal)
}

/// Snapshots as plain objects; `u64` fields become `BigInt` so values past
/// 2^53 survive the trip.
pub fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new()
        .serialize_maps_as_objects(true)
        .serialize_large_number_types_as_bigints(true);
    value
        .serialize(&serializer)
        .map_err(|e| js_error(format!("Serialization failed: {e}")))
}
