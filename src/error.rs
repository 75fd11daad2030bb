//! Error types for parsing date/time patterns.

use thiserror::Error;

/// Errors that can occur when simplifying a date/time pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A run of letters does not match any supported LDML token.
    #[error("invalid token at position {position}: \"{token}\"")]
    InvalidToken { position: usize, token: String },

    /// The pattern ended inside a quoted literal.
    #[error("missing trailing \"'\" for quote opened at position {position}")]
    MissingTrailingQuote { position: usize },
}

impl ParseError {
    /// Returns the byte offset in the pattern where the error starts.
    pub fn position(&self) -> usize {
        match self {
            ParseError::InvalidToken { position, .. } => *position,
            ParseError::MissingTrailingQuote { position } => *position,
        }
    }
}
