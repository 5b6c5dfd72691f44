use core::fmt;
use core::ops::Index;

use crate::{GridError, Square};

/// Widest encoding a 64-bit square value can need.
pub const MAX_PLANES: usize = u64::BITS as usize;

/// Number of bit-planes needed to hold `max_value`: `ceil(log2(max_value + 1))`.
///
/// Zero needs no planes at all.
#[inline]
pub const fn plane_count(max_value: u64) -> usize {
    (u64::BITS - max_value.leading_zeros()) as usize
}

/// One non-negative value per board square.
///
/// Grids are small `Copy` snapshots; edits produce a new grid via
/// [`ValueGrid::with_value`] or mutate a local copy with [`ValueGrid::set`].
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ValueGrid([u64; Square::COUNT]);

impl Default for ValueGrid {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl ValueGrid {
    pub const fn zeroed() -> Self {
        Self([0; Square::COUNT])
    }

    pub const fn from_array(values: [u64; Square::COUNT]) -> Self {
        Self(values)
    }

    /// Build from values in square-index order; missing trailing squares are 0.
    pub fn from_slice(values: &[u64]) -> Result<Self, GridError> {
        if values.len() > Square::COUNT {
            return Err(GridError::TooManyValues(values.len()));
        }
        let mut grid = Self::zeroed();
        grid.0[..values.len()].copy_from_slice(values);
        Ok(grid)
    }

    #[inline]
    pub fn get(&self, square: Square) -> u64 {
        self.0[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, value: u64) {
        self.0[square.index()] = value;
    }

    /// Copy of this grid with a single square replaced.
    #[must_use]
    pub fn with_value(mut self, square: Square, value: u64) -> Self {
        self.set(square, value);
        self
    }

    pub fn max_value(&self) -> u64 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Planes the current maximum needs; see [`plane_count`].
    pub fn plane_count(&self) -> usize {
        plane_count(self.max_value())
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0)
    }

    /// `(square, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, u64)> + '_ {
        Square::all().map(move |square| (square, self.get(square)))
    }

    pub fn as_array(&self) -> &[u64; Square::COUNT] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u64> {
        self.0.to_vec()
    }
}

impl Index<Square> for ValueGrid {
    type Output = u64;

    fn index(&self, square: Square) -> &Self::Output {
        &self.0[square.index()]
    }
}

impl From<[u64; Square::COUNT]> for ValueGrid {
    fn from(values: [u64; Square::COUNT]) -> Self {
        Self(values)
    }
}

impl TryFrom<&[u64]> for ValueGrid {
    type Error = GridError;

    fn try_from(values: &[u64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

/// Renders the board as eight rows, rank 8 first, matching the on-screen layout.
impl fmt::Display for ValueGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .0
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        for (i, square) in Square::display_order().enumerate() {
            if i > 0 && i % 8 == 0 {
                writeln!(f)?;
            } else if i % 8 != 0 {
                write!(f, " ")?;
            }
            write!(f, "{:>width$}", self.get(square))?;
        }
        Ok(())
    }
}

impl fmt::Debug for ValueGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().filter(|(_, v)| *v != 0).map(|(s, v)| (s.to_string(), v)))
            .finish()
    }
}

// serde only derives fixed arrays up to 32 elements; go through a sequence.
#[cfg(feature = "serde")]
impl serde::Serialize for ValueGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ValueGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = <Vec<u64> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_slice(&values).map_err(serde::de::Error::custom)
    }
}
