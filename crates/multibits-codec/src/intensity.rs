//! Normalised per-square intensity for heat-map display.

use multibits_common::{Square, ValueGrid};

/// `value / max_value` for one square, or 0 when `max_value` is 0.
///
/// `max_value` is normally the grid maximum; a stale, smaller maximum still
/// yields at most 1.0.
pub fn intensity(values: &ValueGrid, max_value: u64, square: Square) -> f64 {
    if max_value == 0 {
        return 0.0;
    }
    (values.get(square) as f64 / max_value as f64).min(1.0)
}

/// Intensities for every square, normalised by the grid's own maximum.
pub fn intensities(values: &ValueGrid) -> [f64; Square::COUNT] {
    let max_value = values.max_value();
    let mut out = [0.0; Square::COUNT];
    for square in Square::all() {
        out[square.index()] = intensity(values, max_value, square);
    }
    out
}
