//! Tests for simplifying patterns into parts.

use datetime_placeholder::{
    to_parts, to_parts_default, FieldType, Part, Placeholder, SimplifyOptions,
};

fn part(field_type: FieldType, value: &'static str) -> Part {
    Part {
        field_type,
        value: value.into(),
    }
}

fn single(pattern: &str) -> Part {
    let mut parts = to_parts_default(pattern).unwrap();
    assert_eq!(parts.len(), 1, "pattern {:?} gave {:?}", pattern, parts);
    parts.remove(0)
}

#[test]
fn test_era() {
    for token in ["G", "GG", "GGG", "GGGG", "GGGGG"] {
        assert_eq!(single(token), part(FieldType::Era, "ee"));
    }
}

#[test]
fn test_year() {
    assert_eq!(single("y"), part(FieldType::Year, "yyyy"));
    assert_eq!(single("yy"), part(FieldType::Year, "yy"));
    assert_eq!(single("yyy"), part(FieldType::Year, "yyyy"));
    assert_eq!(single("yyyyy"), part(FieldType::Year, "yyyy"));
}

#[test]
fn test_month() {
    assert_eq!(single("M"), part(FieldType::Month, "mm"));
    assert_eq!(single("MM"), part(FieldType::Month, "mm"));
    assert_eq!(single("MMM"), part(FieldType::Month, "mmm"));
    assert_eq!(single("MMMMM"), part(FieldType::Month, "mmm"));
}

#[test]
fn test_weekday_and_day() {
    assert_eq!(single("E"), part(FieldType::Weekday, "www"));
    assert_eq!(single("EEEE"), part(FieldType::Weekday, "www"));
    assert_eq!(single("d"), part(FieldType::Day, "dd"));
    assert_eq!(single("dd"), part(FieldType::Day, "dd"));
}

#[test]
fn test_time_fields() {
    for token in ["h", "hh", "H", "HH", "K", "KK", "k", "kk"] {
        assert_eq!(single(token), part(FieldType::Hour, "hh"));
    }
    assert_eq!(single("m"), part(FieldType::Minute, "mm"));
    assert_eq!(single("ss"), part(FieldType::Second, "ss"));
    assert_eq!(single("SSS"), part(FieldType::FractionalSecond, "mmm"));
}

#[test]
fn test_day_period_and_time_zone() {
    assert_eq!(single("a"), part(FieldType::DayPeriod, "aa"));
    assert_eq!(single("bbbb"), part(FieldType::DayPeriod, "aa"));
    assert_eq!(single("BBBBB"), part(FieldType::DayPeriod, "aa"));
    assert_eq!(single("z"), part(FieldType::TimeZoneName, "zz"));
    assert_eq!(single("OOOO"), part(FieldType::TimeZoneName, "zz"));
    assert_eq!(single("XXX"), part(FieldType::TimeZoneName, "zz"));
}

#[test]
fn test_middle_endian_date() {
    assert_eq!(
        to_parts_default("MM/dd/yyyy").unwrap(),
        vec![
            part(FieldType::Month, "mm"),
            Part::literal("/"),
            part(FieldType::Day, "dd"),
            Part::literal("/"),
            part(FieldType::Year, "yyyy"),
        ]
    );
}

#[test]
fn test_new_line_literal() {
    assert_eq!(
        to_parts_default("yy-MM-dd'\n'HH:mm:ss.").unwrap(),
        vec![
            part(FieldType::Year, "yy"),
            Part::literal("-"),
            part(FieldType::Month, "mm"),
            Part::literal("-"),
            part(FieldType::Day, "dd"),
            Part::literal("\n"),
            part(FieldType::Hour, "hh"),
            Part::literal(":"),
            part(FieldType::Minute, "mm"),
            Part::literal(":"),
            part(FieldType::Second, "ss"),
            Part::literal("."),
        ]
    );
}

#[test]
fn test_adjacent_fields_stay_separate() {
    assert_eq!(
        to_parts_default("HH'h'mm").unwrap(),
        vec![
            part(FieldType::Hour, "hh"),
            Part::literal("h"),
            part(FieldType::Minute, "mm"),
        ]
    );
}

#[test]
fn test_uppercase_parts_keep_literals() {
    let parts = to_parts("d 'de' MMMM", &SimplifyOptions::uppercase()).unwrap();
    assert_eq!(
        parts,
        vec![
            part(FieldType::Day, "DD"),
            Part::literal(" de "),
            part(FieldType::Month, "MMM"),
        ]
    );
}

#[test]
fn test_uppercase_does_not_touch_shared_placeholders() {
    to_parts("G", &SimplifyOptions::uppercase()).unwrap();
    assert_eq!(single("G"), part(FieldType::Era, "ee"));
}

#[test]
fn test_non_ascii_punctuation() {
    assert_eq!(
        to_parts_default("y年M月d日").unwrap(),
        vec![
            part(FieldType::Year, "yyyy"),
            Part::literal("年"),
            part(FieldType::Month, "mm"),
            Part::literal("月"),
            part(FieldType::Day, "dd"),
            Part::literal("日"),
        ]
    );
}

#[test]
fn test_empty_pattern() {
    assert!(to_parts_default("").unwrap().is_empty());
}

#[test]
fn test_placeholder_parse_with_uppercase() {
    let opts = SimplifyOptions::uppercase();
    let placeholder = Placeholder::parse_with("HH 'h' mm", &opts).unwrap();
    assert!(!placeholder.is_empty());
    assert_eq!(placeholder.to_string(), "HH h MM");
    assert_eq!(
        placeholder.clone().into_parts(),
        vec![
            part(FieldType::Hour, "HH"),
            Part::literal(" h "),
            part(FieldType::Minute, "MM"),
        ]
    );
    assert_eq!(Vec::from(placeholder), to_parts("HH 'h' mm", &opts).unwrap());
}

#[test]
fn test_placeholder_empty_pattern() {
    let placeholder = Placeholder::parse("").unwrap();
    assert!(placeholder.is_empty());
    assert!(placeholder.into_parts().is_empty());
}
