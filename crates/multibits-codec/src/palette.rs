//! Two-stop colour ramp used to paint intensities onto the board.

use std::fmt;
use std::str::FromStr;

use multibits_common::{Square, ValueGrid};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::intensity::intensities;

/// An 8-bit sRGB colour.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgb(r, g, b)`
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]` and NaN reads as 0.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidHex(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hex()
    }
}

/// Colours for intensity 0 (`low`) and intensity 1 (`high`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    pub low: Rgb,
    pub high: Rgb,
}

impl Palette {
    pub const DEFAULT_LOW: Rgb = Rgb::new(0x35, 0x35, 0x35);
    pub const DEFAULT_HIGH: Rgb = Rgb::new(0x00, 0xa2, 0xff);

    pub const fn new(low: Rgb, high: Rgb) -> Self {
        Self { low, high }
    }

    pub fn color_at(&self, intensity: f64) -> Rgb {
        self.low.lerp(self.high, intensity)
    }

    /// Colour for every square, normalised by the grid maximum.
    pub fn heat_map(&self, values: &ValueGrid) -> [Rgb; Square::COUNT] {
        intensities(values).map(|t| self.color_at(t))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOW, Self::DEFAULT_HIGH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let palette = Palette::default();
        assert_eq!(palette.color_at(0.0).to_hex(), "#353535");
        assert_eq!(palette.color_at(1.0).to_hex(), "#00a2ff");
        assert_eq!(palette.color_at(-3.0), Palette::DEFAULT_LOW);
        assert_eq!(palette.color_at(f64::NAN), Palette::DEFAULT_LOW);
        assert_eq!(palette.color_at(9.0), Palette::DEFAULT_HIGH);
    }

    #[test]
    fn midpoint_rounds() {
        let palette = Palette::new(Rgb::new(0, 0, 0), Rgb::new(255, 100, 1));
        assert_eq!(palette.color_at(0.5), Rgb::new(128, 50, 1));
        assert_eq!(palette.color_at(0.5).to_css(), "rgb(128, 50, 1)");
    }

    #[test]
    fn parse_hex() {
        assert_eq!("#00A2ff".parse::<Rgb>().unwrap(), Palette::DEFAULT_HIGH);
        assert!("00a2ff".parse::<Rgb>().is_err());
        assert!("#00a2f".parse::<Rgb>().is_err());
        assert!("#00a2fg".parse::<Rgb>().is_err());
    }

    #[test]
    fn heat_map_follows_intensity() {
        let values = ValueGrid::zeroed().with_value(Square::H8, 2);
        let map = Palette::default().heat_map(&values);
        assert_eq!(map[63], Palette::DEFAULT_HIGH);
        assert_eq!(map[0], Palette::DEFAULT_LOW);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn palette_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Palette::default()).unwrap();
        assert_eq!(json, r##"{"low":"#353535","high":"#00a2ff"}"##);
        let partial: Palette = serde_json::from_str(r##"{"high":"#ff0000"}"##).unwrap();
        assert_eq!(partial.low, Palette::DEFAULT_LOW);
        assert_eq!(partial.high, Rgb::new(255, 0, 0));
    }
}
