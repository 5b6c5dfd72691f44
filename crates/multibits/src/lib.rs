//! MultiBitsBoards: N bits of data per chessboard square, stored as N
//! 64-bit literals.
//!
//! Paste a literal list into a [`Board`] (or call [`parse_and_decode`]) to get
//! the per-square values back; edit squares and read [`Board::result`] to get
//! the list to embed. The `codec` feature alone gives the pure
//! [`encode`]/[`decode`] pair without the session layer.

#[cfg(feature = "common")]
pub use multibits_common as common;

#[cfg(feature = "parse")]
pub use multibits_parse as parse;

#[cfg(feature = "codec")]
pub use multibits_codec as codec;

#[cfg(feature = "session")]
pub use multibits_session as session;

#[cfg(feature = "common")]
pub use multibits_common::{MAX_PLANES, Square, ValueGrid, plane_count};

#[cfg(feature = "parse")]
pub use multibits_parse::{ParseError, Radix, parse_literals, render_literals};

#[cfg(feature = "codec")]
pub use multibits_codec::{
    CodecError, OverflowPolicy, Palette, PlaneSet, Rgb, decode, encode, encode_with_width,
    intensities, intensity, parse_and_decode,
};

#[cfg(feature = "session")]
pub use multibits_session::{
    Board, EditPolicy, PasteFailurePolicy, SessionConfig, SessionError, Snapshot,
};
