//! Small presentation helpers: dates and previews.

use crate::strings::DisplayStrings;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date of a timestamp as the server sends it.
///
/// Accepts RFC 3339, naive ISO-8601 date-times, plain `YYYY-MM-DD` and
/// RFC 2822 (email `Date:` headers). Offsets are kept, so the date is the
/// one in the timestamp's own zone.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Calendar date of a raw field value. Strings go through [`parse_date`];
/// integers are epoch milliseconds, read in UTC.
pub fn parse_date_value(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => parse_date(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}

/// Like [`format_date`] for a raw field value.
pub fn format_date_value(value: Option<&Value>, strings: &DisplayStrings) -> String {
    value
        .and_then(parse_date_value)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| strings.not_available.clone())
}

/// `YYYY-MM-DD`, or the "not available" marker.
pub fn format_date(value: Option<&str>, strings: &DisplayStrings) -> String {
    value
        .and_then(parse_date)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| strings.not_available.clone())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview<'a> {
    pub text: &'a str,
    pub truncated: bool,
}

/// The first `max_chars` characters of `text`.
pub fn preview(text: &str, max_chars: usize) -> Preview<'_> {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => Preview {
            text: &text[..end],
            truncated: true,
        },
        None => Preview {
            text,
            truncated: false,
        },
    }
}
