use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use multibits_common::{MAX_PLANES, Square};
use multibits_parse::{ParseError, Radix, parse_literals, render_literals_with};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered bit-planes, plane 0 (most significant digit) first.
///
/// Bit `square` of plane `p` is digit `p` of that square's value. The plane
/// count is the encoding width; it is carried by the length alone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlaneSet(Vec<u64>);

impl PlaneSet {
    pub fn new(planes: Vec<u64>) -> Self {
        Self(planes)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of planes, i.e. the bit-width of every square's value.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.0
    }

    /// Whether `square` has digit `plane` set.
    #[inline]
    pub fn bit(&self, plane: usize, square: Square) -> bool {
        self.0[plane] & square.bit() != 0
    }

    /// All digits of `square`, plane 0 first.
    pub fn column(&self, square: Square) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().map(move |mask| mask & square.bit() != 0)
    }

    /// Whether every square fits in a 64-bit value.
    pub fn is_decodable(&self) -> bool {
        self.0.len() <= MAX_PLANES
    }

    pub fn to_literals(&self) -> String {
        self.to_literals_with(Radix::Hex)
    }

    pub fn to_literals_with(&self, radix: Radix) -> String {
        render_literals_with(&self.0, radix)
    }
}

impl Index<usize> for PlaneSet {
    type Output = u64;

    fn index(&self, plane: usize) -> &Self::Output {
        &self.0[plane]
    }
}

impl From<Vec<u64>> for PlaneSet {
    fn from(planes: Vec<u64>) -> Self {
        Self(planes)
    }
}

impl From<&[u64]> for PlaneSet {
    fn from(planes: &[u64]) -> Self {
        Self(planes.to_vec())
    }
}

impl AsRef<[u64]> for PlaneSet {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

/// Canonical `0x..` literal list, `", "` separated.
impl fmt::Display for PlaneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literals())
    }
}

impl FromStr for PlaneSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_literals(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse() {
        let planes: PlaneSet = "0x1, 0x8000000000000000".parse().unwrap();
        assert_eq!(planes.width(), 2);
        assert_eq!(planes[1], 1 << 63);
        assert_eq!(planes.to_string(), "0x1, 0x8000000000000000");
        assert_eq!(planes.to_literals_with(Radix::Decimal), "1, 9223372036854775808");
    }

    #[test]
    fn column_reads_plane_order() {
        let planes = PlaneSet::new(vec![0b100, 0b000, 0b100]);
        let digits: Vec<bool> = planes.column(Square::new(2)).collect();
        assert_eq!(digits, vec![true, false, true]);
        assert!(planes.bit(0, Square::new(2)));
        assert!(!planes.bit(1, Square::new(2)));
    }

    #[test]
    fn empty_is_decodable() {
        let planes = PlaneSet::empty();
        assert!(planes.is_empty());
        assert!(planes.is_decodable());
        assert_eq!(planes.to_string(), "");
        assert!(!PlaneSet::new(vec![0; 65]).is_decodable());
    }
}
