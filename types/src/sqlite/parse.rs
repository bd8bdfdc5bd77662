//! Value parsers for values read back from SQLite

use chrono::{DateTime, FixedOffset};

use crate::{ParseContext, SQLiteValue, TypeError};

/// Layouts a stored timestamp may come in, after the offset has been attached
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    // minute precision
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%dT%H:%M%:z",
];

/// Parse a stored DATE value.
///
/// Timestamps written by older releases carry no offset; a raw value without
/// a `+` gets `context.timezone` appended before parsing.
///
/// # Examples
///
/// ```
/// use sqlitejs_types::ParseContext;
/// use sqlitejs_types::sqlite::parse_date;
///
/// let legacy = parse_date("2020-01-01 00:00:00", &ParseContext::new("+02:00")).unwrap();
/// let stored = parse_date("2020-01-01 00:00:00.000 +02:00", &ParseContext::utc()).unwrap();
/// assert_eq!(legacy, stored);
/// ```
///
/// # Errors
///
/// [`TypeError::InvalidDate`] when the value does not read as a timestamp.
pub fn parse_date(raw: &str, context: &ParseContext) -> Result<DateTime<FixedOffset>, TypeError> {
    if raw.contains('+') {
        parse_timestamp(raw)
    } else {
        parse_timestamp(&format!("{raw}{}", context.timezone))
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, TypeError> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date);
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| TypeError::InvalidDate {
            raw: raw.to_string(),
        })
}

/// Parse a stored FLOAT, DOUBLE or REAL value.
///
/// The textual IEEE-754 specials map to their float values; anything else,
/// numeric text included, is returned as is.
///
/// ```
/// use sqlitejs_types::SQLiteValue;
/// use sqlitejs_types::sqlite::parse_float;
///
/// assert_eq!(parse_float("Infinity".into()), SQLiteValue::Real(f64::INFINITY));
/// assert_eq!(parse_float("3.14".into()), SQLiteValue::Text("3.14".into()));
/// ```
#[must_use]
pub fn parse_float(value: SQLiteValue) -> SQLiteValue {
    match value.as_text() {
        Some("NaN") => SQLiteValue::Real(f64::NAN),
        Some("Infinity") => SQLiteValue::Real(f64::INFINITY),
        Some("-Infinity") => SQLiteValue::Real(f64::NEG_INFINITY),
        _ => value,
    }
}
