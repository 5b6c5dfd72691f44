use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base of an integer literal, identified by its prefix.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    #[default]
    Hex,
}

impl Radix {
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    pub const fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Decimal => "",
            Radix::Hex => "0x",
        }
    }

    /// Split a known prefix off `token`, defaulting to decimal.
    pub fn detect(token: &str) -> (Radix, &str) {
        let bytes = token.as_bytes();
        if bytes.len() >= 2 && bytes[0] == b'0' {
            let radix = match bytes[1] {
                b'x' | b'X' => Some(Radix::Hex),
                b'o' | b'O' => Some(Radix::Octal),
                b'b' | b'B' => Some(Radix::Binary),
                _ => None,
            };
            if let Some(radix) = radix {
                return (radix, &token[2..]);
            }
        }
        (Radix::Decimal, token)
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hex => "hex",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_prefixes() {
        assert_eq!(Radix::detect("0xff"), (Radix::Hex, "ff"));
        assert_eq!(Radix::detect("0XFF"), (Radix::Hex, "FF"));
        assert_eq!(Radix::detect("0b101"), (Radix::Binary, "101"));
        assert_eq!(Radix::detect("0o17"), (Radix::Octal, "17"));
        assert_eq!(Radix::detect("017"), (Radix::Decimal, "017"));
        assert_eq!(Radix::detect("0"), (Radix::Decimal, "0"));
        assert_eq!(Radix::detect("0x"), (Radix::Hex, ""));
    }
}
