//! Dialect-independent logical column types

use crate::{DataType, ParseContext, ParsedValue, SQLiteValue, UnknownTypeError, sqlite};

/// A named logical column type.
///
/// Each variant is one entry of the native type registry. The variant decides
/// which renderer and value parser the SQLite dialect applies.
///
/// # Examples
///
/// ```
/// use sqlitejs_types::AbstractType;
///
/// let double = AbstractType::parse("double").unwrap();
/// assert_eq!(double.as_str(), "DOUBLE");
/// assert_eq!(double.default_key(), "DOUBLE PRECISION");
///
/// assert_eq!(AbstractType::parse("DOUBLE PRECISION"), Some(AbstractType::Double));
/// assert_eq!(AbstractType::parse("varchar"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum AbstractType {
    /// Date and time with offset
    Date,
    /// Variable-length string
    String,
    /// Fixed-length string
    Char,
    /// Unbounded text
    Text,
    /// 32-bit style integer
    Integer,
    /// 64-bit style integer
    BigInt,
    /// Single precision floating point
    Float,
    /// Double precision floating point
    Double,
    /// Floating point, REAL flavour
    Real,
    /// Fixed-point decimal
    Decimal,
    /// Boolean flag
    Boolean,
    /// Binary data
    Blob,
    /// UUID
    Uuid,
    /// Enumerated string
    Enum,
    /// Geometry
    Geometry,
    /// Time of day
    Time,
    /// Calendar date without time
    DateOnly,
}

impl AbstractType {
    /// Every abstract type, in registry order
    pub const ALL: [AbstractType; 17] = [
        Self::Date,
        Self::String,
        Self::Char,
        Self::Text,
        Self::Integer,
        Self::BigInt,
        Self::Float,
        Self::Time,
        Self::DateOnly,
        Self::Boolean,
        Self::Blob,
        Self::Decimal,
        Self::Uuid,
        Self::Enum,
        Self::Real,
        Self::Double,
        Self::Geometry,
    ];

    /// Get the registry name of this type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::String => "STRING",
            Self::Char => "CHAR",
            Self::Text => "TEXT",
            Self::Integer => "INTEGER",
            Self::BigInt => "BIGINT",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Real => "REAL",
            Self::Decimal => "DECIMAL",
            Self::Boolean => "BOOLEAN",
            Self::Blob => "BLOB",
            Self::Uuid => "UUID",
            Self::Enum => "ENUM",
            Self::Geometry => "GEOMETRY",
            Self::Time => "TIME",
            Self::DateOnly => "DATEONLY",
        }
    }

    /// The key a freshly constructed descriptor of this type carries.
    ///
    /// Only DOUBLE differs from its registry name.
    #[must_use]
    pub const fn default_key(&self) -> &'static str {
        match self {
            Self::Double => "DOUBLE PRECISION",
            _ => self.as_str(),
        }
    }

    /// Parse a type from its registry name or default key (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        // Use eq_ignore_ascii_case to avoid allocating an uppercased copy
        Self::ALL.into_iter().find(|kind| {
            s.eq_ignore_ascii_case(kind.as_str()) || s.eq_ignore_ascii_case(kind.default_key())
        })
    }

    /// Returns `true` for the types rendered by the shared numeric renderer
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::BigInt | Self::Float | Self::Double | Self::Real
        )
    }

    /// Returns `true` if values of this type go through a custom parser
    #[must_use]
    pub const fn has_value_parser(&self) -> bool {
        matches!(self, Self::Date | Self::Float | Self::Double | Self::Real)
    }

    /// Build a new descriptor of this type from an existing descriptor's options.
    ///
    /// The new descriptor owns a copy of the options and carries this type's
    /// default key: a key override on `old` is not carried over.
    #[must_use]
    pub fn extend(self, old: &DataType) -> DataType {
        DataType::new(self, old.options().clone())
    }

    /// Convert a raw stored value into its normalized runtime form.
    ///
    /// Types without a parser return the value unchanged.
    ///
    /// # Errors
    ///
    /// [`TypeError::InvalidDate`](crate::TypeError::InvalidDate) when a DATE
    /// value is not text or does not read as a timestamp.
    pub fn parse_value(
        self,
        raw: SQLiteValue,
        context: &ParseContext,
    ) -> crate::Result<ParsedValue> {
        match self {
            Self::Date => match raw {
                SQLiteValue::Text(text) => {
                    sqlite::parse_date(&text, context).map(ParsedValue::Date)
                }
                other => Err(crate::TypeError::InvalidDate {
                    raw: other.to_string(),
                }),
            },
            Self::Float | Self::Double | Self::Real => {
                Ok(ParsedValue::Value(sqlite::parse_float(raw)))
            }
            _ => Ok(ParsedValue::Value(raw)),
        }
    }
}

impl core::fmt::Display for AbstractType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for AbstractType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownTypeError::new(s))
    }
}
