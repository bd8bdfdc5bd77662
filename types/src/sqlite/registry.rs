//! Native type registry for the SQLite dialect

use crate::{AbstractType, UnknownTypeError};

/// Native column-type keywords a dialect accepts for an abstract type.
///
/// # Examples
///
/// ```
/// use sqlitejs_types::AbstractType;
/// use sqlitejs_types::sqlite::{NativeTypes, supported_native_types};
///
/// let string = supported_native_types(AbstractType::String);
/// assert_eq!(string.first(), Some("VARCHAR"));
/// assert!(string.contains("varchar binary"));
///
/// assert_eq!(supported_native_types(AbstractType::Enum), NativeTypes::Unsupported);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeTypes {
    /// Accepted keywords; the first one is canonical
    Supported(&'static [&'static str]),
    /// No native form, the type must be emulated
    Unsupported,
}

impl NativeTypes {
    /// Returns `true` if the dialect declares this type natively
    #[inline]
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        matches!(self, NativeTypes::Supported(_))
    }

    /// The canonical keyword
    #[must_use]
    pub const fn first(&self) -> Option<&'static str> {
        match *self {
            NativeTypes::Supported(&[first, ..]) => Some(first),
            NativeTypes::Supported(&[]) | NativeTypes::Unsupported => None,
        }
    }

    /// The accepted keywords, empty when unsupported
    #[must_use]
    pub const fn as_slice(&self) -> &'static [&'static str] {
        match *self {
            NativeTypes::Supported(keywords) => keywords,
            NativeTypes::Unsupported => &[],
        }
    }

    /// Check whether a keyword is accepted (case-insensitive)
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.as_slice()
            .iter()
            .any(|native| native.eq_ignore_ascii_case(keyword))
    }
}

/// Immutable table mapping every abstract type to its native keywords.
#[derive(Debug)]
pub struct TypeRegistry {
    entries: &'static [(AbstractType, NativeTypes)],
}

static SQLITE: TypeRegistry = TypeRegistry {
    entries: &[
        (AbstractType::Date, NativeTypes::Supported(&["DATETIME"])),
        (
            AbstractType::String,
            NativeTypes::Supported(&["VARCHAR", "VARCHAR BINARY"]),
        ),
        (
            AbstractType::Char,
            NativeTypes::Supported(&["CHAR", "CHAR BINARY"]),
        ),
        (AbstractType::Text, NativeTypes::Supported(&["TEXT"])),
        (AbstractType::Integer, NativeTypes::Supported(&["INTEGER"])),
        (AbstractType::BigInt, NativeTypes::Supported(&["BIGINT"])),
        (AbstractType::Float, NativeTypes::Supported(&["FLOAT"])),
        (AbstractType::Time, NativeTypes::Supported(&["TIME"])),
        (AbstractType::DateOnly, NativeTypes::Supported(&["DATE"])),
        (AbstractType::Boolean, NativeTypes::Supported(&["TINYINT"])),
        (
            AbstractType::Blob,
            NativeTypes::Supported(&["TINYBLOB", "BLOB", "LONGBLOB"]),
        ),
        (AbstractType::Decimal, NativeTypes::Supported(&["DECIMAL"])),
        (AbstractType::Uuid, NativeTypes::Supported(&["UUID"])),
        (AbstractType::Enum, NativeTypes::Unsupported),
        (AbstractType::Real, NativeTypes::Supported(&["REAL"])),
        (
            AbstractType::Double,
            NativeTypes::Supported(&["DOUBLE PRECISION"]),
        ),
        (AbstractType::Geometry, NativeTypes::Unsupported),
    ],
};

impl TypeRegistry {
    /// The SQLite registry
    #[must_use]
    pub fn sqlite() -> &'static TypeRegistry {
        &SQLITE
    }

    /// Native keywords for an abstract type
    #[must_use]
    pub fn supported_native_types(&self, kind: AbstractType) -> NativeTypes {
        self.entries
            .iter()
            .find_map(|&(entry, native)| (entry == kind).then_some(native))
            .unwrap_or(NativeTypes::Unsupported)
    }

    /// Native keywords for an abstract type given by name
    pub fn lookup(&self, name: &str) -> Result<NativeTypes, UnknownTypeError> {
        let kind: AbstractType = name.parse()?;
        Ok(self.supported_native_types(kind))
    }

    /// Iterate over all entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = (AbstractType, NativeTypes)> + '_ {
        self.entries.iter().copied()
    }
}

/// Native keywords the SQLite dialect accepts for an abstract type
#[must_use]
pub fn supported_native_types(kind: AbstractType) -> NativeTypes {
    TypeRegistry::sqlite().supported_native_types(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_is_registered() {
        let registry = TypeRegistry::sqlite();
        assert_eq!(registry.iter().count(), AbstractType::ALL.len());
        for kind in AbstractType::ALL {
            assert!(registry.iter().any(|(entry, _)| entry == kind), "{kind}");
        }
    }

    #[test]
    fn test_unsupported_types() {
        let unsupported: Vec<_> = TypeRegistry::sqlite()
            .iter()
            .filter(|(_, native)| !native.is_supported())
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(unsupported, vec![AbstractType::Enum, AbstractType::Geometry]);
    }

    #[test]
    fn test_canonical_keywords() {
        assert_eq!(
            supported_native_types(AbstractType::Date).first(),
            Some("DATETIME")
        );
        assert_eq!(
            supported_native_types(AbstractType::DateOnly).first(),
            Some("DATE")
        );
        assert_eq!(
            supported_native_types(AbstractType::Boolean).first(),
            Some("TINYINT")
        );
        assert_eq!(
            supported_native_types(AbstractType::Double).first(),
            Some("DOUBLE PRECISION")
        );
        assert_eq!(
            supported_native_types(AbstractType::Blob).as_slice(),
            &["TINYBLOB", "BLOB", "LONGBLOB"]
        );
        assert_eq!(supported_native_types(AbstractType::Geometry).first(), None);
        assert!(supported_native_types(AbstractType::Enum).as_slice().is_empty());
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = TypeRegistry::sqlite();
        assert!(registry.lookup("integer").unwrap().contains("INTEGER"));
        assert_eq!(registry.lookup("ENUM").unwrap(), NativeTypes::Unsupported);
        assert_eq!(
            registry.lookup("DOUBLE PRECISION").unwrap().first(),
            Some("DOUBLE PRECISION")
        );

        let err = registry.lookup("JSONB").unwrap_err();
        assert_eq!(err.name, "JSONB");
    }
}
