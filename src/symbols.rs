//! The table of supported LDML date/time tokens.
//!
//! Only the "formatting" variants of the Unicode TR35 date field symbols are
//! recognised, the ones that can appear in patterns used to format dates with
//! `Intl.DateTimeFormat`. Stand-alone variants such as `L` or `c` are not.
//! Several tokens share one canonical symbol; the meaning of a repeated
//! placeholder (`mm` for month or minute) is clear from its neighbours.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::part::{FieldType, Part};

/// A canonical field type and placeholder pair.
#[derive(Debug, PartialEq, Eq)]
pub struct Symbol {
    pub field_type: FieldType,
    pub placeholder: &'static str,
}

impl Symbol {
    const fn new(field_type: FieldType, placeholder: &'static str) -> Self {
        Self {
            field_type,
            placeholder,
        }
    }

    /// Creates a part for this symbol.
    ///
    /// The shared placeholder is borrowed as-is; uppercasing allocates a copy.
    pub fn to_part(&'static self, uppercase: bool) -> Part {
        let value = if uppercase {
            Cow::Owned(self.placeholder.to_ascii_uppercase())
        } else {
            Cow::Borrowed(self.placeholder)
        };
        Part {
            field_type: self.field_type,
            value,
        }
    }
}

static ERA: Symbol = Symbol::new(FieldType::Era, "ee");
static YEAR2: Symbol = Symbol::new(FieldType::Year, "yy");
static YEAR4: Symbol = Symbol::new(FieldType::Year, "yyyy");
static MONTH_NUMBER: Symbol = Symbol::new(FieldType::Month, "mm");
static MONTH_NAME: Symbol = Symbol::new(FieldType::Month, "mmm");
static WEEKDAY: Symbol = Symbol::new(FieldType::Weekday, "www");
static DAY: Symbol = Symbol::new(FieldType::Day, "dd");
static HOUR: Symbol = Symbol::new(FieldType::Hour, "hh");
static MINUTE: Symbol = Symbol::new(FieldType::Minute, "mm");
static SECOND: Symbol = Symbol::new(FieldType::Second, "ss");
static FRACTION: Symbol = Symbol::new(FieldType::FractionalSecond, "mmm");
static DAY_PERIOD: Symbol = Symbol::new(FieldType::DayPeriod, "aa");
static TIME_ZONE: Symbol = Symbol::new(FieldType::TimeZoneName, "zz");

static TABLE: &[(&str, &Symbol)] = &[
    // Era
    ("G", &ERA),
    ("GG", &ERA),
    ("GGG", &ERA),
    ("GGGG", &ERA),
    ("GGGGG", &ERA),
    // Calendar year; only `yy` is the two-digit form
    ("y", &YEAR4),
    ("yy", &YEAR2),
    ("yyy", &YEAR4),
    ("yyyy", &YEAR4),
    ("yyyyy", &YEAR4),
    // Month number and month name
    ("M", &MONTH_NUMBER),
    ("MM", &MONTH_NUMBER),
    ("MMM", &MONTH_NAME),
    ("MMMM", &MONTH_NAME),
    ("MMMMM", &MONTH_NAME),
    // Day of week
    ("E", &WEEKDAY),
    ("EE", &WEEKDAY),
    ("EEE", &WEEKDAY),
    ("EEEE", &WEEKDAY),
    ("EEEEE", &WEEKDAY),
    // Day of month
    ("d", &DAY),
    ("dd", &DAY),
    // Hour [1-12], [0-23], [0-11], [1-24]
    ("h", &HOUR),
    ("hh", &HOUR),
    ("H", &HOUR),
    ("HH", &HOUR),
    ("K", &HOUR),
    ("KK", &HOUR),
    ("k", &HOUR),
    ("kk", &HOUR),
    ("m", &MINUTE),
    ("mm", &MINUTE),
    ("s", &SECOND),
    ("ss", &SECOND),
    ("S", &FRACTION),
    ("SS", &FRACTION),
    ("SSS", &FRACTION),
    ("SSSS", &FRACTION),
    // AM/PM, noon/midnight and flexible day periods
    ("a", &DAY_PERIOD),
    ("aa", &DAY_PERIOD),
    ("aaa", &DAY_PERIOD),
    ("aaaa", &DAY_PERIOD),
    ("aaaaa", &DAY_PERIOD),
    ("b", &DAY_PERIOD),
    ("bb", &DAY_PERIOD),
    ("bbb", &DAY_PERIOD),
    ("bbbb", &DAY_PERIOD),
    ("bbbbb", &DAY_PERIOD),
    ("B", &DAY_PERIOD),
    ("BB", &DAY_PERIOD),
    ("BBB", &DAY_PERIOD),
    ("BBBB", &DAY_PERIOD),
    ("BBBBB", &DAY_PERIOD),
    // Time zones
    ("Z", &TIME_ZONE),
    ("ZZ", &TIME_ZONE),
    ("ZZZ", &TIME_ZONE),
    ("ZZZZ", &TIME_ZONE),
    ("ZZZZZ", &TIME_ZONE),
    ("z", &TIME_ZONE),
    ("zz", &TIME_ZONE),
    ("zzz", &TIME_ZONE),
    ("zzzz", &TIME_ZONE),
    ("O", &TIME_ZONE),
    ("OOOO", &TIME_ZONE),
    ("X", &TIME_ZONE),
    ("XX", &TIME_ZONE),
    ("XXX", &TIME_ZONE),
    ("XXXX", &TIME_ZONE),
    ("XXXXX", &TIME_ZONE),
    ("x", &TIME_ZONE),
    ("xx", &TIME_ZONE),
    ("xxx", &TIME_ZONE),
    ("xxxx", &TIME_ZONE),
    ("xxxxx", &TIME_ZONE),
];

static INDEX: OnceLock<HashMap<&'static str, &'static Symbol>> = OnceLock::new();

/// Look up a token. Matching is exact and case-sensitive.
pub fn lookup(token: &str) -> Option<&'static Symbol> {
    INDEX
        .get_or_init(|| TABLE.iter().copied().collect())
        .get(token)
        .copied()
}

/// Iterates over every supported token and its symbol, in table order.
pub fn tokens() -> impl Iterator<Item = (&'static str, &'static Symbol)> {
    TABLE.iter().copied()
}
