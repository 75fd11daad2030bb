//! datetime-placeholder - simplified date/time picker placeholders
//!
//! This crate converts a Unicode LDML date/time pattern such as `MM/dd/yyyy`
//! into a placeholder shown to the end-user of a date/time picker, either as a
//! string (`mm/dd/yyyy`) or as a sequence of typed parts compatible with the
//! part types of `Intl.DateTimeFormat.prototype.formatToParts`.
//!
//! Characters between two single quotes are copied verbatim. Two single quotes
//! in a row, inside or outside a quoted span, stand for one real quote:
//!
//! ```
//! use datetime_placeholder::to_placeholder_string_default;
//!
//! assert_eq!(to_placeholder_string_default("MM/dd/yyyy").unwrap(), "mm/dd/yyyy");
//! assert_eq!(to_placeholder_string_default("h 'o''clock'").unwrap(), "hh o'clock");
//! ```
//!
//! | Unit                         | Pattern   | Placeholder |
//! |------------------------------|-----------|-------------|
//! | Era                          | `G`...    | `ee`        |
//! | Calendar year                | `yy`      | `yy`        |
//! |                              | `y`, `yyy`... | `yyyy`  |
//! | Month                        | `M`, `MM` | `mm`        |
//! |                              | `MMM`...  | `mmm`       |
//! | Day of month                 | `d`, `dd` | `dd`        |
//! | Day of week                  | `E`...    | `www`       |
//! | Day period                   | `a`, `b`, `B`... | `aa` |
//! | Hour                         | `h`, `H`, `K`, `k` (1-2) | `hh` |
//! | Minute                       | `m`, `mm` | `mm`        |
//! | Second                       | `s`, `ss` | `ss`        |
//! | Fraction of second           | `S`...    | `mmm`       |
//! | Time zone                    | `Z`, `z`, `O`, `X`, `x`... | `zz` |

pub mod error;
pub mod options;
pub mod parser;
pub mod part;
pub mod symbols;

pub use error::ParseError;
pub use options::{LetterCase, SimplifyOptions};
pub use part::{FieldType, Part, Placeholder};

/// Simplify a pattern into an array of parts.
///
/// With [`LetterCase::Uppercase`] every non-literal placeholder is uppercased;
/// literal text is kept as written.
///
/// # Errors
///
/// Returns [`ParseError::InvalidToken`] for a run of letters that is not a
/// supported token and [`ParseError::MissingTrailingQuote`] for an unbalanced quote.
pub fn to_parts(pattern: &str, opts: &SimplifyOptions) -> Result<Vec<Part>, ParseError> {
    parser::parse(pattern, opts)
}

/// Simplify a pattern into an array of parts using default options.
pub fn to_parts_default(pattern: &str) -> Result<Vec<Part>, ParseError> {
    to_parts(pattern, &SimplifyOptions::default())
}

/// Simplify a pattern into a placeholder string.
///
/// With [`LetterCase::Uppercase`] the whole string is uppercased, literal text
/// included, unlike [`to_parts`].
pub fn to_placeholder_string(pattern: &str, opts: &SimplifyOptions) -> Result<String, ParseError> {
    let placeholder = Placeholder::parse(pattern)?;
    Ok(if opts.is_uppercase() {
        placeholder.to_uppercase_string()
    } else {
        placeholder.to_string()
    })
}

/// Simplify a pattern into a placeholder string using default options.
pub fn to_placeholder_string_default(pattern: &str) -> Result<String, ParseError> {
    to_placeholder_string(pattern, &SimplifyOptions::default())
}
