//! Configuration record carried by every type descriptor

use std::borrow::Cow;

/// Size flavour of a BLOB column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlobSize {
    /// `TINYBLOB`
    Tiny,
    /// `MEDIUMBLOB`
    Medium,
    /// `LONGBLOB`
    Long,
}

/// Options a type descriptor was configured with.
///
/// `length`, `decimals`, `unsigned`, `zerofill` and `binary` drive the SQLite
/// renderers. `precision`, `scale` and `size` are read by the generic DECIMAL
/// and BLOB renderers. `values` holds ENUM members, which SQLite never renders.
///
/// Positional constructor arguments normalize into this record:
///
/// ```
/// use sqlitejs_types::TypeOptions;
///
/// assert_eq!(TypeOptions::from(10), TypeOptions::new().length(10));
/// assert_eq!(
///     TypeOptions::from((10, 2)),
///     TypeOptions::new().length(10).decimals(2)
/// );
/// assert_eq!(TypeOptions::from(()), TypeOptions::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TypeOptions {
    /// Display width or character length
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub length: Option<u32>,
    /// Digits after the decimal point
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub decimals: Option<u32>,
    /// DECIMAL precision
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub precision: Option<u32>,
    /// DECIMAL scale
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub scale: Option<u32>,
    /// BLOB size flavour
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub size: Option<BlobSize>,
    /// Append `UNSIGNED`
    pub unsigned: bool,
    /// Append `ZEROFILL`
    pub zerofill: bool,
    /// Binary collation for STRING and CHAR
    pub binary: bool,
    /// ENUM members
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub values: Vec<Cow<'static, str>>,
}

impl TypeOptions {
    /// Create an empty options record
    #[must_use]
    pub const fn new() -> Self {
        Self {
            length: None,
            decimals: None,
            precision: None,
            scale: None,
            size: None,
            unsigned: false,
            zerofill: false,
            binary: false,
            values: Vec::new(),
        }
    }

    /// Set the length
    #[must_use]
    pub fn length(self, length: u32) -> Self {
        Self {
            length: Some(length),
            ..self
        }
    }

    /// Set the number of decimals
    #[must_use]
    pub fn decimals(self, decimals: u32) -> Self {
        Self {
            decimals: Some(decimals),
            ..self
        }
    }

    /// Set DECIMAL precision and scale
    #[must_use]
    pub fn precision(self, precision: u32, scale: Option<u32>) -> Self {
        Self {
            precision: Some(precision),
            scale,
            ..self
        }
    }

    /// Set the BLOB size flavour
    #[must_use]
    pub fn size(self, size: BlobSize) -> Self {
        Self {
            size: Some(size),
            ..self
        }
    }

    /// Mark as UNSIGNED
    #[must_use]
    pub fn unsigned(self) -> Self {
        Self {
            unsigned: true,
            ..self
        }
    }

    /// Mark as ZEROFILL
    #[must_use]
    pub fn zerofill(self) -> Self {
        Self {
            zerofill: true,
            ..self
        }
    }

    /// Mark as BINARY
    #[must_use]
    pub fn binary(self) -> Self {
        Self {
            binary: true,
            ..self
        }
    }

    /// Set the ENUM members
    #[must_use]
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Length, ignoring an explicit zero
    #[inline]
    pub(crate) fn effective_length(&self) -> Option<u32> {
        self.length.filter(|&length| length > 0)
    }
}

impl From<()> for TypeOptions {
    fn from((): ()) -> Self {
        Self::new()
    }
}

impl From<u32> for TypeOptions {
    fn from(length: u32) -> Self {
        Self::new().length(length)
    }
}

impl From<Option<u32>> for TypeOptions {
    fn from(length: Option<u32>) -> Self {
        Self {
            length,
            ..Self::new()
        }
    }
}

impl From<(u32, u32)> for TypeOptions {
    fn from((length, decimals): (u32, u32)) -> Self {
        Self::new().length(length).decimals(decimals)
    }
}

impl From<(Option<u32>, Option<u32>)> for TypeOptions {
    fn from((length, decimals): (Option<u32>, Option<u32>)) -> Self {
        Self {
            length,
            decimals,
            ..Self::new()
        }
    }
}
