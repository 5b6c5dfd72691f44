//! Literal-list output in the form downstream sources embed directly as array
//! initialisers: `0x` + lowercase hex with no padding, joined by `", "`.

use crate::types::Radix;

const JOINER: &str = ", ";

/// Render one mask in `radix` with its prefix (`0x1f`, `0b11111`, `31`).
pub fn render_literal(value: u64, radix: Radix) -> String {
    match radix {
        Radix::Binary => format!("0b{value:b}"),
        Radix::Octal => format!("0o{value:o}"),
        Radix::Decimal => value.to_string(),
        Radix::Hex => format!("0x{value:x}"),
    }
}

/// Canonical hex rendering, plane 0 first.
pub fn render_literals(values: &[u64]) -> String {
    render_literals_with(values, Radix::Hex)
}

pub fn render_literals_with(values: &[u64], radix: Radix) -> String {
    values
        .iter()
        .map(|&v| render_literal(v, radix))
        .collect::<Vec<_>>()
        .join(JOINER)
}
