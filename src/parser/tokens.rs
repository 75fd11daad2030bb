//! Token types for the pattern lexer.

use std::borrow::Cow;

/// A syntactic token in a date/time pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// A maximal run of ASCII letters, e.g. `yyyy` or `MMMd`.
    Letters(&'a str),
    /// The content of a quoted span, with doubled quotes collapsed.
    Quoted(Cow<'a, str>),
    /// A run of characters that are neither ASCII letters nor quotes.
    Punctuation(&'a str),

    // End of input
    Eof,
}

/// A token with its byte span in the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken<'a> {
    pub token: Token<'a>,
    pub start: usize,
    pub end: usize,
}
