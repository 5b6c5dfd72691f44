use std::fmt::{self, Display};

use thiserror::Error;

use crate::types::Radix;

const SEPARATOR: u8 = b',';

/// Why a single literal token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A radix prefix with no digits after it (`0x`).
    MissingDigits,
    /// A character that is not a digit of the literal's radix.
    InvalidDigit(char),
    /// A leading minus sign; masks are unsigned.
    Negative,
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDigits => f.write_str("missing digits after radix prefix"),
            Self::InvalidDigit(c) => write!(f, "invalid digit {c:?}"),
            Self::Negative => f.write_str("negative literal"),
        }
    }
}

/// A literal that failed to parse, with the position of the offending token.
///
/// `start..end` is the byte span of the trimmed token within the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} in literal {index} ({token:?}) at {start}..{end}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub index: usize,
    pub token: String,
    pub start: usize,
    pub end: usize,
}

/// One successfully parsed literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LiteralToken {
    pub value: u64,
    pub radix: Radix,
    pub start: usize,
    pub end: usize,
}

impl Display for LiteralToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {} @{}..{}>", self.radix, self.value, self.start, self.end)
    }
}

/// Splits a comma-separated literal list into parsed tokens.
///
/// Whitespace around each token is ignored. Every comma starts a new token,
/// and an empty token is a zero mask, so a list of `n` commas always yields
/// `n + 1` planes. Only input that is blank as a whole yields no tokens.
pub struct LiteralTokenizer<'a> {
    source: &'a str,
    offset: usize,
    index: usize,
    done: bool,
}

impl<'a> LiteralTokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        let blank = source.trim().is_empty();
        LiteralTokenizer {
            source,
            offset: 0,
            index: 0,
            done: blank,
        }
    }

    fn next_span(&mut self) -> (usize, usize, bool) {
        let rest = &self.source.as_bytes()[self.offset..];
        let (len, last) = match rest.iter().position(|&b| b == SEPARATOR) {
            Some(pos) => (pos, false),
            None => (rest.len(), true),
        };
        let raw_start = self.offset;
        let raw = &self.source[raw_start..raw_start + len];
        let lead = raw.len() - raw.trim_start().len();
        let trimmed = raw.trim();
        self.offset = raw_start + len + 1;
        let start = raw_start + lead;
        (start, start + trimmed.len(), last)
    }

    fn error(&self, kind: ParseErrorKind, start: usize, end: usize) -> ParseError {
        ParseError {
            kind,
            index: self.index,
            token: self.source[start..end].to_string(),
            start,
            end,
        }
    }
}

impl Iterator for LiteralTokenizer<'_> {
    type Item = Result<LiteralToken, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let (start, end, last) = self.next_span();
        if last {
            self.done = true;
        }
        let text = &self.source[start..end];
        let result = parse_literal(text)
            .map(|(value, radix)| LiteralToken {
                value,
                radix,
                start,
                end,
            })
            .map_err(|kind| self.error(kind, start, end));
        if result.is_err() {
            self.done = true;
        }
        self.index += 1;
        Some(result)
    }
}

/// Digits past the 64th bit wrap away: hex, octal and binary keep their low
/// bits and decimal is reduced mod 2^64, which is all a plane can hold.
fn parse_literal(text: &str) -> Result<(u64, Radix), ParseErrorKind> {
    if text.is_empty() {
        return Ok((0, Radix::Decimal));
    }
    let text = match text.as_bytes()[0] {
        b'-' => return Err(ParseErrorKind::Negative),
        b'+' => &text[1..],
        _ => text,
    };
    let (radix, digits) = Radix::detect(text);
    if digits.is_empty() {
        return Err(match radix {
            Radix::Decimal => ParseErrorKind::InvalidDigit('+'),
            _ => ParseErrorKind::MissingDigits,
        });
    }
    let base = radix.base();
    let mut value: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(base).ok_or(ParseErrorKind::InvalidDigit(c))?;
        value = value
            .wrapping_mul(base as u64)
            .wrapping_add(digit as u64);
    }
    Ok((value, radix))
}

/// Parse a full literal list into mask values, stopping at the first bad token.
///
/// Blank input yields an empty list.
pub fn parse_literals(source: &str) -> Result<Vec<u64>, ParseError> {
    let values = LiteralTokenizer::new(source)
        .map(|token| token.map(|t| t.value))
        .collect::<Result<Vec<_>, _>>();
    #[cfg(feature = "tracing")]
    {
        match &values {
            Ok(values) => tracing::trace!(count = values.len(), "parsed literal list"),
            Err(err) => tracing::debug!(%err, "literal list rejected"),
        }
    }
    values
}
