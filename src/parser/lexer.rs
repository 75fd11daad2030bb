//! Lexer for tokenizing date/time patterns.
//!
//! Every position of a pattern falls into one of three categories:
//! - ASCII letters, grouped into maximal runs regardless of case (`yyyy`, `MMMd`)
//! - quoted literals (`'o''clock'`), where a doubled quote stands for one quote
//! - punctuation, any run of other characters including whitespace and non-ASCII text
//!
//! Letters and the quote are ASCII, so every boundary the lexer finds is a
//! valid `char` boundary of the input.

use std::borrow::Cow;

use crate::error::ParseError;
use crate::parser::tokens::{SpannedToken, Token};

const QUOTE: u8 = b'\'';

/// A lexer for date/time pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken<'a>, ParseError> {
        let start = self.position;
        let Some(&byte) = self.input.as_bytes().get(start) else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = if byte.is_ascii_alphabetic() {
            self.skip_while(|b| b.is_ascii_alphabetic());
            Token::Letters(&self.input[start..self.position])
        } else if byte == QUOTE {
            self.lex_quoted()?
        } else {
            self.skip_while(|b| !b.is_ascii_alphabetic() && b != QUOTE);
            Token::Punctuation(&self.input[start..self.position])
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Consumes bytes matching the predicate.
    fn skip_while<F>(&mut self, predicate: F)
    where
        F: Fn(u8) -> bool,
    {
        let bytes = self.input.as_bytes();
        while self.position < bytes.len() && predicate(bytes[self.position]) {
            self.position += 1;
        }
    }

    /// Lexes a quoted literal ('...').
    ///
    /// `''` inside the span is an escaped quote. A span closed right after it
    /// was opened is itself an escaped quote.
    fn lex_quoted(&mut self) -> Result<Token<'a>, ParseError> {
        let start = self.position;
        let content_start = start + 1;
        self.position = content_start;

        // Only allocated once an escaped quote has to be collapsed
        let mut unescaped: Option<String> = None;
        loop {
            let quote = match self.input[self.position..].find('\'') {
                Some(offset) => self.position + offset,
                None => return Err(ParseError::MissingTrailingQuote { position: start }),
            };

            if self.input.as_bytes().get(quote + 1) == Some(&QUOTE) {
                unescaped
                    .get_or_insert_with(String::new)
                    .push_str(&self.input[self.position..=quote]);
                self.position = quote + 2;
                continue;
            }

            let segment = &self.input[self.position..quote];
            self.position = quote + 1;
            return Ok(Token::Quoted(match unescaped {
                Some(mut text) => {
                    text.push_str(segment);
                    Cow::Owned(text)
                }
                None if quote == content_start => Cow::Borrowed("'"),
                None => Cow::Borrowed(segment),
            }));
        }
    }

    /// Returns all remaining tokens as a vector, ending with `Token::Eof`.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken<'a>>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted(input: &str) -> Token<'_> {
        Lexer::new(input).next_token().unwrap().token
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
        assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
    }

    #[test]
    fn test_quoted_borrows_without_escapes() {
        assert!(matches!(quoted("'at'"), Token::Quoted(Cow::Borrowed("at"))));
        assert!(matches!(quoted("''"), Token::Quoted(Cow::Borrowed("'"))));
        assert!(matches!(quoted("'o''clock'"), Token::Quoted(Cow::Owned(_))));
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(quoted("'o''clock'"), Token::Quoted("o'clock".into()));
        assert_eq!(quoted("''''"), Token::Quoted("'".into()));
        assert_eq!(quoted("'''x'"), Token::Quoted("'x".into()));
        assert_eq!(quoted("'a'''"), Token::Quoted("a'".into()));
    }

    #[test]
    fn test_unterminated_escape() {
        let err = Lexer::new("'''").next_token().unwrap_err();
        assert_eq!(err, ParseError::MissingTrailingQuote { position: 0 });
    }
}
