//! Simplification options.

use std::convert::Infallible;
use std::str::FromStr;

/// Letter case applied to the produced placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterCase {
    /// Placeholders are emitted as they appear in the symbol table (lowercase).
    #[default]
    Unchanged,
    /// Placeholders are converted to uppercase.
    Uppercase,
}

impl FromStr for LetterCase {
    type Err = Infallible;

    /// Only `"uppercase"` is meaningful; every other value leaves the case alone.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "uppercase" => LetterCase::Uppercase,
            _ => LetterCase::Unchanged,
        })
    }
}

/// Options for simplifying a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimplifyOptions {
    /// The letter case of the produced placeholders.
    pub letter_case: LetterCase,
}

impl SimplifyOptions {
    /// Options producing uppercase placeholders.
    pub fn uppercase() -> Self {
        Self {
            letter_case: LetterCase::Uppercase,
        }
    }

    pub(crate) fn is_uppercase(&self) -> bool {
        self.letter_case == LetterCase::Uppercase
    }
}
