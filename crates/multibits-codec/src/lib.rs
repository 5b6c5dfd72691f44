//! Bit-plane encoding of per-square board values.
//!
//! [`encode`] turns a [`ValueGrid`] into a [`PlaneSet`] whose width is derived
//! from the grid maximum; [`decode`] reverses it, taking the plane count from
//! the number of masks supplied. Heat-map helpers live in [`intensity`] and
//! [`palette`].

pub mod codec;
pub mod error;
pub mod intensity;
pub mod palette;
pub mod planes;

pub use codec::{OverflowPolicy, decode, decode_square, encode, encode_with_width, parse_and_decode};
pub use error::{CodecError, ColorError};
pub use intensity::{intensities, intensity};
pub use palette::{Palette, Rgb};
pub use planes::PlaneSet;

// Re-export common types
pub use multibits_common::{MAX_PLANES, Square, ValueGrid, plane_count};
pub use multibits_parse::{ParseError, Radix};
