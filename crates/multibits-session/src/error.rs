use multibits_codec::CodecError;
use multibits_common::Square;
use multibits_parse::ParseError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{text:?} is not a non-negative integer (square {square})")]
    InvalidSquareValue { square: Square, text: String },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl SessionError {
    /// The literal that broke a paste, if that is what failed.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            SessionError::Codec(CodecError::Parse(err)) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for SessionError {
    fn from(err: ParseError) -> Self {
        SessionError::Codec(CodecError::Parse(err))
    }
}
