//! Date display helpers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Render a date or timestamp string as `YYYY-MM-DD`.
///
/// Accepts RFC 3339 timestamps (the date is taken in the timestamp's own
/// offset), naive `YYYY-MM-DD[ T]HH:MM[:SS[.fff]]` timestamps and plain
/// `YYYY-MM-DD` dates. Returns `None` for anything else.
pub fn format_date(input: &str) -> Option<String> {
    parse_date(input.trim()).map(|date| date.format(DISPLAY_FORMAT).to_string())
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(input, DISPLAY_FORMAT).ok()
}
