use multibits_common::Square;
use multibits_parse::ParseError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("{planes} planes cannot be decoded into 64-bit values (max {max})", max = multibits_common::MAX_PLANES)]
    TooManyPlanes { planes: usize },

    #[error("plane width {width} exceeds {max}", max = multibits_common::MAX_PLANES)]
    WidthTooLarge { width: usize },

    #[error("value {value} on {square} does not fit in {width} planes")]
    ValueOverflow {
        square: Square,
        value: u64,
        width: usize,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("colour {0:?} is not of the form #rrggbb")]
    InvalidHex(String),
}
