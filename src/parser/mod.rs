//! Parser turning a date/time pattern into placeholder parts.

pub mod lexer;
pub mod tokens;

use crate::error::ParseError;
use crate::options::SimplifyOptions;
use crate::part::{FieldType, Part};
use crate::symbols;
use lexer::Lexer;
use tokens::Token;

/// Parse a pattern into parts in a single left-to-right pass.
///
/// Adjacent literal text is merged into one part; field parts always start a
/// new one. Non-literal placeholders are uppercased when `opts` asks for it.
pub fn parse(pattern: &str, opts: &SimplifyOptions) -> Result<Vec<Part>, ParseError> {
    let uppercase = opts.is_uppercase();
    let mut lexer = Lexer::new(pattern);
    let mut parts = Vec::new();

    loop {
        let spanned = lexer.next_token()?;
        match spanned.token {
            Token::Eof => break,
            Token::Letters(letters) => {
                let symbol = symbols::lookup(letters).ok_or_else(|| ParseError::InvalidToken {
                    position: spanned.start,
                    token: letters.to_string(),
                })?;
                parts.push(symbol.to_part(uppercase));
            }
            Token::Quoted(text) => push_literal(&mut parts, &text),
            Token::Punctuation(text) => push_literal(&mut parts, text),
        }
    }

    Ok(parts)
}

/// Appends literal text, extending the last part if it is already a literal.
fn push_literal(parts: &mut Vec<Part>, text: &str) {
    if let Some(last) = parts.last_mut() {
        if last.field_type == FieldType::Literal {
            last.value.to_mut().push_str(text);
            return;
        }
    }
    parts.push(Part::literal(text));
}
