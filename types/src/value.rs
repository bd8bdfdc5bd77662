//! Raw storage values and their parsed form

use chrono::{DateTime, FixedOffset};

/// Represents a value as it is read back from SQLite (owned version)
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
pub enum SQLiteValue {
    /// Integer value (i64)
    Integer(i64),
    /// Real value (f64)
    Real(f64),
    /// Text value (owned string)
    Text(String),
    /// Blob value (owned binary data)
    Blob(Box<[u8]>),
    /// NULL value
    #[default]
    Null,
}

impl SQLiteValue {
    /// Borrow the text payload, if this is a text value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SQLiteValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` for NULL
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, SQLiteValue::Null)
    }
}

impl core::fmt::Display for SQLiteValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SQLiteValue::Integer(i) => write!(f, "{i}"),
            SQLiteValue::Real(r) => write!(f, "{r}"),
            SQLiteValue::Text(s) => f.write_str(s),
            SQLiteValue::Blob(b) => f.write_str(&String::from_utf8_lossy(b)),
            SQLiteValue::Null => Ok(()),
        }
    }
}

impl From<i64> for SQLiteValue {
    fn from(value: i64) -> Self {
        SQLiteValue::Integer(value)
    }
}

impl From<i32> for SQLiteValue {
    fn from(value: i32) -> Self {
        SQLiteValue::Integer(value.into())
    }
}

impl From<f64> for SQLiteValue {
    fn from(value: f64) -> Self {
        SQLiteValue::Real(value)
    }
}

impl From<String> for SQLiteValue {
    fn from(value: String) -> Self {
        SQLiteValue::Text(value)
    }
}

impl From<&str> for SQLiteValue {
    fn from(value: &str) -> Self {
        SQLiteValue::Text(value.to_string())
    }
}

impl From<Vec<u8>> for SQLiteValue {
    fn from(value: Vec<u8>) -> Self {
        SQLiteValue::Blob(value.into_boxed_slice())
    }
}

impl<T: Into<SQLiteValue>> From<Option<T>> for SQLiteValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SQLiteValue::Null, Into::into)
    }
}

/// A stored value after the type's value parser ran
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    /// A DATE column value
    Date(DateTime<FixedOffset>),
    /// Any other value, possibly normalized (`"NaN"` to `f64::NAN`, ...)
    Value(SQLiteValue),
}

impl ParsedValue {
    /// The date, if this is a parsed DATE
    #[must_use]
    pub const fn as_date(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            ParsedValue::Date(date) => Some(date),
            ParsedValue::Value(_) => None,
        }
    }

    /// The underlying value, if this is not a DATE
    #[must_use]
    pub fn into_value(self) -> Option<SQLiteValue> {
        match self {
            ParsedValue::Value(value) => Some(value),
            ParsedValue::Date(_) => None,
        }
    }
}
