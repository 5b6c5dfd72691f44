use multibits_common::{MAX_PLANES, Square, ValueGrid, plane_count};
use multibits_parse::parse_literals;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::planes::PlaneSet;

/// What [`encode_with_width`] does with a value wider than the requested width.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Keep the low `width` bits and drop the rest.
    #[default]
    Truncate,
    /// Fail with [`CodecError::ValueOverflow`].
    Reject,
}

/// Encode `values` using exactly as many planes as the grid maximum needs.
///
/// An all-zero grid encodes to no planes at all.
pub fn encode(values: &ValueGrid) -> PlaneSet {
    let width = values.plane_count();
    #[cfg(feature = "tracing")]
    tracing::trace!(width, max = values.max_value(), "encoding grid");
    pack(values, width)
}

/// Encode `values` at a caller-chosen width.
///
/// Widths larger than the grid needs produce leading all-zero planes; smaller
/// widths are handled according to `overflow`.
pub fn encode_with_width(
    values: &ValueGrid,
    width: usize,
    overflow: OverflowPolicy,
) -> Result<PlaneSet, CodecError> {
    if width > MAX_PLANES {
        return Err(CodecError::WidthTooLarge { width });
    }
    if overflow == OverflowPolicy::Reject {
        if let Some((square, value)) = values.iter().find(|&(_, v)| plane_count(v) > width) {
            return Err(CodecError::ValueOverflow {
                square,
                value,
                width,
            });
        }
    }
    Ok(pack(values, width))
}

// Digit `plane` of a `width`-digit MSB-first value sits at bit `width - 1 - plane`.
fn pack(values: &ValueGrid, width: usize) -> PlaneSet {
    let mut planes = vec![0u64; width];
    for square in Square::all().rev() {
        let value = values.get(square);
        for (plane, mask) in planes.iter_mut().enumerate() {
            let shift = width - 1 - plane;
            if (value >> shift) & 1 == 1 {
                *mask |= square.bit();
            } else {
                *mask &= !square.bit();
            }
        }
    }
    PlaneSet::new(planes)
}

/// Read one square's value back out of `masks`, plane 0 as the most significant digit.
///
/// Only the low 64 digits survive if more than 64 masks are supplied; use
/// [`decode`] for a checked conversion.
pub fn decode_square(masks: &[u64], square: Square) -> u64 {
    masks
        .iter()
        .fold(0u64, |acc, mask| (acc << 1) | ((mask >> square.index()) & 1))
}

/// Rebuild the grid from `masks`; the plane count is `masks.len()`.
///
/// Every 64-bit pattern is accepted. No masks decode to an all-zero grid.
pub fn decode(masks: &[u64]) -> Result<ValueGrid, CodecError> {
    if masks.len() > MAX_PLANES {
        return Err(CodecError::TooManyPlanes {
            planes: masks.len(),
        });
    }
    let mut grid = ValueGrid::zeroed();
    for square in Square::all() {
        grid.set(square, decode_square(masks, square));
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(planes = masks.len(), max = grid.max_value(), "decoded grid");
    Ok(grid)
}

/// The paste path: parse a literal list, then decode it.
pub fn parse_and_decode(text: &str) -> Result<ValueGrid, CodecError> {
    let masks = parse_literals(text)?;
    decode(&masks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(pairs: &[(u8, u64)]) -> ValueGrid {
        let mut grid = ValueGrid::zeroed();
        for &(index, value) in pairs {
            grid.set(Square::new(index), value);
        }
        grid
    }

    #[test]
    fn zero_grid_has_no_planes() {
        let planes = encode(&ValueGrid::zeroed());
        assert!(planes.is_empty());
        assert_eq!(decode(&[]).unwrap(), ValueGrid::zeroed());
    }

    #[test]
    fn single_max_on_h8() {
        let planes = encode(&grid(&[(63, 1)]));
        assert_eq!(planes.as_slice(), &[1u64 << 63]);
        assert_eq!(planes.to_string(), "0x8000000000000000");
    }

    #[test]
    fn plane_zero_is_most_significant() {
        // 6 = 0b110 on a1, 1 = 0b001 on b1
        let planes = encode(&grid(&[(0, 6), (1, 1)]));
        assert_eq!(planes.as_slice(), &[0b01, 0b01, 0b10]);
    }

    #[test]
    fn plane_count_boundaries() {
        assert_eq!(encode(&grid(&[(10, 3)])).width(), 2);
        assert_eq!(encode(&grid(&[(10, 4)])).width(), 3);
    }

    #[test]
    fn roundtrip_mixed_values() {
        let values = grid(&[(0, 5), (7, 2), (28, 7), (56, 1), (63, 4)]);
        let planes = encode(&values);
        assert_eq!(decode(planes.as_slice()).unwrap(), values);
    }

    #[test]
    fn full_width_values() {
        let values = grid(&[(0, u64::MAX), (1, 1 << 63), (2, 1)]);
        let planes = encode(&values);
        assert_eq!(planes.width(), MAX_PLANES);
        assert_eq!(decode(planes.as_slice()).unwrap(), values);
    }

    #[test]
    fn wider_width_adds_leading_zero_planes() {
        let values = grid(&[(5, 3)]);
        let planes = encode_with_width(&values, 4, OverflowPolicy::Truncate).unwrap();
        assert_eq!(planes.as_slice(), &[0, 0, 1 << 5, 1 << 5]);
        assert_eq!(decode(planes.as_slice()).unwrap(), values);
    }

    #[test]
    fn narrow_width_truncates_to_low_bits() {
        // 5 = 0b101 at width 2 keeps 0b01
        let values = grid(&[(9, 5), (10, 2)]);
        let planes = encode_with_width(&values, 2, OverflowPolicy::Truncate).unwrap();
        let decoded = decode(planes.as_slice()).unwrap();
        assert_eq!(decoded.get(Square::new(9)), 1);
        assert_eq!(decoded.get(Square::new(10)), 2);
    }

    #[test]
    fn narrow_width_rejects_when_asked() {
        let values = grid(&[(9, 5), (10, 2)]);
        let err = encode_with_width(&values, 2, OverflowPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            CodecError::ValueOverflow {
                square: Square::new(9),
                value: 5,
                width: 2,
            }
        );
        assert_eq!(err.to_string(), "value 5 on b2 does not fit in 2 planes");
    }

    #[test]
    fn width_limit() {
        assert_eq!(
            encode_with_width(&ValueGrid::zeroed(), 65, OverflowPolicy::Truncate),
            Err(CodecError::WidthTooLarge { width: 65 })
        );
    }

    #[test]
    fn decode_accepts_arbitrary_patterns() {
        let decoded = decode(&[u64::MAX, 0]).unwrap();
        assert!(decoded.iter().all(|(_, v)| v == 2));
    }

    #[test]
    fn decode_rejects_more_than_64_planes() {
        assert_eq!(
            decode(&[0; 65]),
            Err(CodecError::TooManyPlanes { planes: 65 })
        );
    }

    #[test]
    fn paste_path() {
        let values = parse_and_decode("0x8000000000000000").unwrap();
        assert_eq!(values.get(Square::H8), 1);
        assert_eq!(values.max_value(), 1);
        assert!(matches!(
            parse_and_decode("1, abc, 3"),
            Err(CodecError::Parse(_))
        ));
    }

    #[test]
    fn paste_path_empty_tokens_and_wide_literals() {
        assert_eq!(parse_and_decode("0x1, 0x2,").unwrap().get(Square::A1), 4);
        assert_eq!(parse_and_decode("0x1,,0x1").unwrap().get(Square::A1), 5);
        let wide = parse_and_decode("0x10000000000000001").unwrap();
        assert_eq!(wide.get(Square::A1), 1);
        assert_eq!(wide.max_value(), 1);
    }
}
