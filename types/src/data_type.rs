//! Configured type descriptors

use std::borrow::Cow;

use crate::{AbstractType, ParseContext, ParsedValue, SQLiteValue, TypeOptions, sqlite};

/// Anything that renders to a column type declaration.
pub trait ToSqlType {
    /// Render the declaration used in DDL
    fn to_sql_type(&mut self) -> String;
}

/// An abstract type together with its key and options.
///
/// Construction never has side effects: every factory below goes through
/// [`DataType::new`], which defaults the key to the type's default key.
///
/// # Examples
///
/// ```
/// use sqlitejs_types::{DataType, TypeOptions};
///
/// let mut by_position = DataType::float((10, 2));
/// let mut by_options = DataType::float(TypeOptions::new().length(10).decimals(2));
/// assert_eq!(by_position.to_sql(), "FLOAT(10,2)");
/// assert_eq!(by_position.to_sql(), by_options.to_sql());
///
/// let mut text = DataType::text(100);
/// assert_eq!(text.to_sql(), "TEXT");
/// assert_eq!(text.options().length, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "serde_shape::DataTypeShape", into = "serde_shape::DataTypeShape")
)]
pub struct DataType {
    kind: AbstractType,
    key: Cow<'static, str>,
    options: TypeOptions,
}

impl DataType {
    /// Create a descriptor with the type's default key
    #[must_use]
    pub fn new(kind: AbstractType, options: impl Into<TypeOptions>) -> Self {
        Self {
            kind,
            key: Cow::Borrowed(kind.default_key()),
            options: options.into(),
        }
    }

    /// Override the key rendered by numeric types
    #[must_use]
    pub fn with_key(self, key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            ..self
        }
    }

    /// `INTEGER`, from a length or an options record
    #[must_use]
    pub fn integer(options: impl Into<TypeOptions>) -> Self {
        Self::new(AbstractType::Integer, options)
    }

    /// `BIGINT`, from a length or an options record
    #[must_use]
    pub fn bigint(options: impl Into<TypeOptions>) -> Self {
        Self::new(AbstractType::BigInt, options)
    }

    /// `FLOAT`, from `(length, decimals)`, a length or an options record
    #[must_use]
    pub fn float(options: impl Into<TypeOptions>) -> Self {
        Self::new(AbstractType::Float, options)
    }

    /// `DOUBLE PRECISION`, from `(length, decimals)`, a length or an options record
    #[must_use]
    pub fn double(options: impl Into<TypeOptions>) -> Self {
        Self::new(AbstractType::Double, options)
    }

    /// `REAL`, from `(length, decimals)`, a length or an options record
    #[must_use]
    pub fn real(options: impl Into<TypeOptions>) -> Self {
        Self::new(AbstractType::Real, options)
    }

    /// `VARCHAR`
    #[must_use]
    pub fn string(options: impl Into<TypeOptions>) -> Self {
        Self::new(AbstractType::String, options)
    }

    /// `CHAR`
    #[must_use]
    pub fn char(options: impl Into<TypeOptions>) -> Self {
        Self::new(AbstractType::Char, options)
    }

    /// `TEXT`
    #[must_use]
    pub fn text(options: impl Into<TypeOptions>) -> Self {
        Self::new(AbstractType::Text, options)
    }

    /// `DATETIME`
    #[must_use]
    pub fn date() -> Self {
        Self::new(AbstractType::Date, ())
    }

    /// An enum with the given members
    #[must_use]
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self::new(AbstractType::Enum, TypeOptions::new().values(values))
    }

    /// The abstract type
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> AbstractType {
        self.kind
    }

    /// The key numeric types render
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The configured options
    #[must_use]
    pub const fn options(&self) -> &TypeOptions {
        &self.options
    }

    /// Render the SQLite declaration.
    ///
    /// TEXT clears an unsupported `length` and warns, so rendering twice
    /// gives the same result.
    pub fn to_sql(&mut self) -> String {
        sqlite::render(self.kind, &self.key, &mut self.options)
    }

    /// A new descriptor of the same type built from these options.
    ///
    /// Mirrors [`AbstractType::extend`]: the key override is not kept.
    #[must_use]
    pub fn extend(&self) -> Self {
        self.kind.extend(self)
    }

    /// Run this type's value parser on a raw stored value
    ///
    /// # Errors
    ///
    /// See [`AbstractType::parse_value`].
    pub fn parse(&self, raw: SQLiteValue, context: &ParseContext) -> crate::Result<ParsedValue> {
        self.kind.parse_value(raw, context)
    }
}

impl ToSqlType for DataType {
    fn to_sql_type(&mut self) -> String {
        self.to_sql()
    }
}

impl From<AbstractType> for DataType {
    fn from(kind: AbstractType) -> Self {
        Self::new(kind, ())
    }
}

#[cfg(feature = "serde")]
mod serde_shape {
    use std::borrow::Cow;

    use crate::{AbstractType, TypeOptions};

    use super::DataType;

    /// `{ "type": "FLOAT", "key"?: "...", ...options }`
    #[derive(serde::Serialize, serde::Deserialize)]
    pub(super) struct DataTypeShape {
        #[serde(rename = "type")]
        kind: AbstractType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<Cow<'static, str>>,
        #[serde(flatten)]
        options: TypeOptions,
    }

    impl From<DataTypeShape> for DataType {
        fn from(shape: DataTypeShape) -> Self {
            let data_type = DataType::new(shape.kind, shape.options);
            match shape.key {
                Some(key) => data_type.with_key(key),
                None => data_type,
            }
        }
    }

    impl From<DataType> for DataTypeShape {
        fn from(data_type: DataType) -> Self {
            let key = (data_type.key != data_type.kind.default_key()).then_some(data_type.key);
            Self {
                kind: data_type.kind,
                key,
                options: data_type.options,
            }
        }
    }
}
