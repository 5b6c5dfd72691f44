pub mod render;
pub mod tokenizer;
pub mod types;

pub use render::{render_literal, render_literals, render_literals_with};
pub use tokenizer::{LiteralToken, LiteralTokenizer, ParseError, ParseErrorKind, parse_literals};
pub use types::Radix;
