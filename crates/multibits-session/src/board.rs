//! The editable board behind the UI.
//!
//! A [`Board`] owns exactly one [`Snapshot`]. Every transition (`edit_square`,
//! `set_value`, `paste`, `load`) reads the current snapshot, builds a complete
//! new one and swaps it in; nothing is updated incrementally, so a snapshot is
//! always internally consistent (`max_value`, `planes` and `result` are all
//! derived from `values`).

use multibits_codec::{
    Palette, PlaneSet, Rgb, encode, encode_with_width, intensity, parse_and_decode,
};
use multibits_common::{Square, ValueGrid};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::{EditPolicy, PasteFailurePolicy, SessionConfig};
use crate::error::SessionError;

/// Immutable view of the board at one point in time.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    values: ValueGrid,
    max_value: u64,
    planes: PlaneSet,
    result: String,
    input_text: String,
}

impl Snapshot {
    /// Derive max, planes and literal list from `values`.
    pub fn new(values: ValueGrid, input_text: String) -> Self {
        let planes = encode(&values);
        Snapshot {
            max_value: values.max_value(),
            result: planes.to_literals(),
            planes,
            values,
            input_text,
        }
    }

    pub fn values(&self) -> &ValueGrid {
        &self.values
    }

    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    pub fn planes(&self) -> &PlaneSet {
        &self.planes
    }

    /// Generated literal list, e.g. `0x8000000000000000, 0x1`.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Raw contents of the paste field.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn intensity(&self, square: Square) -> f64 {
        intensity(&self.values, self.max_value, square)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    config: SessionConfig,
    current: Snapshot,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Board {
            config,
            current: Snapshot::default(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.current
    }

    pub fn values(&self) -> &ValueGrid {
        self.current.values()
    }

    pub fn value(&self, square: Square) -> u64 {
        self.current.values.get(square)
    }

    pub fn max_value(&self) -> u64 {
        self.current.max_value
    }

    pub fn planes(&self) -> &PlaneSet {
        self.current.planes()
    }

    pub fn result(&self) -> &str {
        self.current.result()
    }

    pub fn input_text(&self) -> &str {
        self.current.input_text()
    }

    pub fn palette(&self) -> &Palette {
        &self.config.palette
    }

    pub fn intensity(&self, square: Square) -> f64 {
        self.current.intensity(square)
    }

    pub fn color(&self, square: Square) -> Rgb {
        self.config.palette.color_at(self.intensity(square))
    }

    /// Apply the text typed into one square's field.
    ///
    /// The paste field is cleared, since it no longer describes the board.
    pub fn edit_square(&mut self, square: Square, text: &str) -> Result<(), SessionError> {
        let value = parse_square_value(text, self.config.edit_policy).ok_or_else(|| {
            SessionError::InvalidSquareValue {
                square,
                text: text.to_string(),
            }
        })?;
        self.set_value(square, value);
        Ok(())
    }

    /// Typed single-square edit; clears the paste field like [`Board::edit_square`].
    pub fn set_value(&mut self, square: Square, value: u64) {
        let values = self.current.values.with_value(square, value);
        #[cfg(feature = "tracing")]
        tracing::debug!(%square, value, "square edited");
        self.replace(Snapshot::new(values, String::new()));
    }

    /// Apply a pasted literal list.
    ///
    /// The paste field always shows `text`. When it does not parse (or has more
    /// planes than a 64-bit value holds) the error is returned and the grid is
    /// kept or cleared according to [`SessionConfig::paste_failure`].
    pub fn paste(&mut self, text: &str) -> Result<(), SessionError> {
        match parse_and_decode(text).map_err(SessionError::from) {
            Ok(values) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(max = values.max_value(), "paste decoded");
                self.replace(Snapshot::new(values, text.to_string()));
                Ok(())
            }
            Err(err) => {
                let values = match self.config.paste_failure {
                    PasteFailurePolicy::KeepPrevious => self.current.values,
                    PasteFailurePolicy::Clear => ValueGrid::zeroed(),
                };
                #[cfg(feature = "tracing")]
                tracing::warn!(%err, policy = ?self.config.paste_failure, "paste rejected");
                self.replace(Snapshot::new(values, text.to_string()));
                Err(err)
            }
        }
    }

    /// Replace every square at once, e.g. from a saved grid.
    pub fn load(&mut self, values: ValueGrid) {
        self.replace(Snapshot::new(values, String::new()));
    }

    /// Back to an empty board.
    pub fn reset(&mut self) {
        self.replace(Snapshot::default());
    }

    /// Encode the current values at an explicit width, honouring
    /// [`SessionConfig::overflow`].
    pub fn encode_with_width(&self, width: usize) -> Result<PlaneSet, SessionError> {
        Ok(encode_with_width(
            &self.current.values,
            width,
            self.config.overflow,
        )?)
    }

    fn replace(&mut self, next: Snapshot) {
        self.current = next;
    }
}

/// Interpret one square's text under `policy`; `None` means reject.
fn parse_square_value(text: &str, policy: EditPolicy) -> Option<u64> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Some(value);
    }
    match policy {
        EditPolicy::Reject => None,
        EditPolicy::Clamp => Some(clamp_square_value(trimmed)),
    }
}

/// Read the leading decimal digits (after an optional sign) and ignore the
/// rest, so `"12abc"` and `"3.9"` give 12 and 3.
fn clamp_square_value(text: &str) -> u64 {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if negative {
        return 0;
    }
    rest.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        })
}
