//! Compact square representation shared by the codec, session and bindings.
//!
//! A `Square` is a board index in `0..64` laid out rank-major:
//! `index = rank * 8 + file`, so a1 is 0 (bottom-left) and h8 is 63
//! (top-right). Bit `index` of every bit-plane belongs to this square, which
//! makes the layout part of the literal format and not just a display concern.

use core::fmt;
use core::str::FromStr;

use crate::SquareError;

const FILES: u8 = 8;
const RANKS: u8 = 8;
const FILE_MASK: u8 = FILES - 1;
const RANK_SHIFT: u8 = 3;

/// One of the 64 board squares.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = (FILES as usize) * (RANKS as usize);

    pub const A1: Self = Self(0);
    pub const H1: Self = Self(7);
    pub const A8: Self = Self(56);
    pub const H8: Self = Self(63);

    /// Construct a square, panicking if the index exceeds 63.
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < Self::COUNT, "square index exceeds 63");
        Self(index)
    }

    /// Fallible constructor that reports overflow rather than panicking.
    pub fn try_new(index: u32) -> Result<Self, SquareError> {
        if index as usize >= Self::COUNT {
            return Err(SquareError::IndexOutOfRange(index));
        }
        Ok(Self(index as u8))
    }

    /// Construct from 0-based rank (0 = rank 1) and file (0 = file a).
    pub fn from_rank_file(rank: u8, file: u8) -> Result<Self, SquareError> {
        if rank >= RANKS {
            return Err(SquareError::RankOutOfRange(rank));
        }
        if file >= FILES {
            return Err(SquareError::FileOutOfRange(file));
        }
        Ok(Self((rank << RANK_SHIFT) | file))
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self.0 >> RANK_SHIFT
    }

    #[inline(always)]
    pub const fn file(self) -> u8 {
        self.0 & FILE_MASK
    }

    /// Single-bit mask selecting this square within a bit-plane.
    #[inline(always)]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// All squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Squares in on-screen order: rank 8 down to rank 1, each rank a to h.
    pub fn display_order() -> impl Iterator<Item = Square> {
        (0..RANKS)
            .rev()
            .flat_map(|rank| (0..FILES).map(move |file| Square((rank << RANK_SHIFT) | file)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{file}{rank}")
    }
}

/// Accepts either a decimal index (`"28"`) or an algebraic name (`"e4"`, `"E4"`).
impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<u32>() {
            return Self::try_new(index);
        }
        match trimmed.as_bytes() {
            [file @ (b'a'..=b'h' | b'A'..=b'H'), rank @ b'1'..=b'8'] => {
                Self::from_rank_file(rank - b'1', file.to_ascii_lowercase() - b'a')
            }
            _ => Err(SquareError::InvalidName(trimmed.to_string())),
        }
    }
}

impl From<Square> for usize {
    fn from(square: Square) -> Self {
        square.index()
    }
}

impl TryFrom<u32> for Square {
    type Error = SquareError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        let index = u32::try_from(value).unwrap_or(u32::MAX);
        Self::try_new(index)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = <u32 as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_new(index).map_err(serde::de::Error::custom)
    }
}
