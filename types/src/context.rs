use std::borrow::Cow;

/// Context handed to value parsers by the row decoding layer.
///
/// `timezone` is the offset appended to stored timestamps that carry none,
/// in `±HH:MM` form.
///
/// ```
/// use sqlitejs_types::ParseContext;
///
/// assert_eq!(ParseContext::default().timezone, "+00:00");
/// assert_eq!(ParseContext::new("+05:30").timezone, "+05:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseContext {
    /// Offset for timestamps stored without one
    pub timezone: Cow<'static, str>,
}

impl ParseContext {
    /// Create a context with the given timezone offset
    #[must_use]
    pub fn new(timezone: impl Into<Cow<'static, str>>) -> Self {
        Self {
            timezone: timezone.into(),
        }
    }

    /// A context in UTC (`+00:00`)
    #[must_use]
    pub const fn utc() -> Self {
        Self {
            timezone: Cow::Borrowed("+00:00"),
        }
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::utc()
    }
}
