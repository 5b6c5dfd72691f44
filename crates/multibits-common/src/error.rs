//! Errors raised while constructing squares and value grids from unchecked input.

use thiserror::Error;

/// Errors returned when constructing a [`Square`](crate::Square) from unchecked inputs.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SquareError {
    #[error("square index {0} exceeds 63")]
    IndexOutOfRange(u32),
    #[error("rank {0} exceeds 7")]
    RankOutOfRange(u8),
    #[error("file {0} exceeds 7")]
    FileOutOfRange(u8),
    #[error("'{0}' is not a square index (0-63) or name (a1-h8)")]
    InvalidName(String),
}

/// Errors returned when building a [`ValueGrid`](crate::ValueGrid) from a flat sequence.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GridError {
    #[error("a board holds 64 squares, got {0} values")]
    TooManyValues(usize),
}
