//! Parts of a simplified date/time pattern.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::options::SimplifyOptions;

/// The semantic category of a part.
///
/// The names returned by [`FieldType::as_str`] match the part types produced by
/// `Intl.DateTimeFormat.prototype.formatToParts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FieldType {
    Era,
    Year,
    Month,
    Day,
    Weekday,
    Hour,
    Minute,
    Second,
    FractionalSecond,
    DayPeriod,
    TimeZoneName,
    Literal,
}

impl FieldType {
    /// Returns the `formatToParts` type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Era => "era",
            FieldType::Year => "year",
            FieldType::Month => "month",
            FieldType::Day => "day",
            FieldType::Weekday => "weekday",
            FieldType::Hour => "hour",
            FieldType::Minute => "minute",
            FieldType::Second => "second",
            FieldType::FractionalSecond => "fractionalSecond",
            FieldType::DayPeriod => "dayPeriod",
            FieldType::TimeZoneName => "timeZoneName",
            FieldType::Literal => "literal",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "era" => Ok(FieldType::Era),
            "year" => Ok(FieldType::Year),
            "month" => Ok(FieldType::Month),
            "day" => Ok(FieldType::Day),
            "weekday" => Ok(FieldType::Weekday),
            "hour" => Ok(FieldType::Hour),
            "minute" => Ok(FieldType::Minute),
            "second" => Ok(FieldType::Second),
            "fractionalSecond" => Ok(FieldType::FractionalSecond),
            "dayPeriod" => Ok(FieldType::DayPeriod),
            "timeZoneName" => Ok(FieldType::TimeZoneName),
            "literal" => Ok(FieldType::Literal),
            _ => Err(()),
        }
    }
}

/// A typed piece of a simplified pattern.
///
/// Field parts borrow their placeholder from the static symbol table until a
/// case transform forces an owned copy. Literal parts own their text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Part {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub field_type: FieldType,
    pub value: Cow<'static, str>,
}

impl Part {
    /// Creates a literal part.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            field_type: FieldType::Literal,
            value: Cow::Owned(text.into()),
        }
    }

    /// Returns true if this part is literal text.
    pub fn is_literal(&self) -> bool {
        self.field_type == FieldType::Literal
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A parsed pattern, as an ordered sequence of parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placeholder {
    parts: Vec<Part>,
}

impl Placeholder {
    /// Parse a pattern with default options.
    pub fn parse(pattern: &str) -> Result<Self, ParseError> {
        Self::parse_with(pattern, &SimplifyOptions::default())
    }

    /// Parse a pattern, applying the letter case to every non-literal part.
    pub fn parse_with(pattern: &str, opts: &SimplifyOptions) -> Result<Self, ParseError> {
        crate::parser::parse(pattern, opts).map(|parts| Self { parts })
    }

    /// Returns the parts in pattern order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Consumes the placeholder and returns its parts.
    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    /// Returns true if the pattern produced no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Concatenates all parts and uppercases the result, literal text included.
    pub fn to_uppercase_string(&self) -> String {
        self.to_string().to_uppercase()
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            f.write_str(&part.value)?;
        }
        Ok(())
    }
}

impl From<Placeholder> for Vec<Part> {
    fn from(placeholder: Placeholder) -> Self {
        placeholder.parts
    }
}
