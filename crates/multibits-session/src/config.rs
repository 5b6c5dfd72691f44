use multibits_codec::{OverflowPolicy, Palette};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How per-square text that is not a non-negative integer is handled.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditPolicy {
    /// The leading decimal digits are used and the rest ignored (`"12abc"`
    /// is 12, `"3.9"` is 3). Blank, non-numeric and negative text become 0;
    /// values past `u64::MAX` saturate.
    #[default]
    Clamp,
    /// Anything but a plain non-negative decimal integer is an error and the
    /// board is left untouched.
    Reject,
}

/// What a failed paste does to the board.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PasteFailurePolicy {
    /// Leave the last valid grid displayed.
    #[default]
    KeepPrevious,
    /// Reset every square to 0.
    Clear,
}

/// Board session settings.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub edit_policy: EditPolicy,
    pub paste_failure: PasteFailurePolicy,
    /// Applied by [`Board::encode_with_width`](crate::Board::encode_with_width).
    pub overflow: OverflowPolicy,
    pub palette: Palette,
}

impl SessionConfig {
    pub fn with_edit_policy(mut self, policy: EditPolicy) -> Self {
        self.edit_policy = policy;
        self
    }

    pub fn with_paste_failure(mut self, policy: PasteFailurePolicy) -> Self {
        self.paste_failure = policy;
        self
    }

    pub fn with_overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use multibits_codec::Rgb;

    #[test]
    fn yaml_with_defaults() {
        let config: SessionConfig = serde_yaml::from_str(
            "edit_policy: reject\npalette:\n  high: \"#ff0000\"\n",
        )
        .unwrap();
        assert_eq!(config.edit_policy, EditPolicy::Reject);
        assert_eq!(config.paste_failure, PasteFailurePolicy::KeepPrevious);
        assert_eq!(config.overflow, OverflowPolicy::Truncate);
        assert_eq!(config.palette.high, Rgb::new(255, 0, 0));
        assert_eq!(config.palette.low, Palette::DEFAULT_LOW);
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = serde_yaml::from_str::<SessionConfig>("edit: clamp\n");
        assert!(err.is_err());
    }
}
