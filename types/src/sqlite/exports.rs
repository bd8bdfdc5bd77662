//! Types the SQLite dialect overrides, by export name

use crate::{AbstractType, DataType, TypeOptions};

/// Export names of the overridden types, in registration order.
///
/// Every export name doubles as the default key of descriptors built through
/// [`construct`]; `DOUBLE PRECISION` is the one name that differs from the
/// registry name.
pub static EXPORTS: [(&str, AbstractType); 10] = [
    ("DATE", AbstractType::Date),
    ("STRING", AbstractType::String),
    ("CHAR", AbstractType::Char),
    ("FLOAT", AbstractType::Float),
    ("REAL", AbstractType::Real),
    ("DOUBLE PRECISION", AbstractType::Double),
    ("INTEGER", AbstractType::Integer),
    ("BIGINT", AbstractType::BigInt),
    ("TEXT", AbstractType::Text),
    ("ENUM", AbstractType::Enum),
];

/// Resolve an export name (exact match)
#[must_use]
pub fn export(name: &str) -> Option<AbstractType> {
    EXPORTS
        .iter()
        .find_map(|&(export, kind)| (export == name).then_some(kind))
}

/// Returns `true` if the dialect replaces the generic renderer or parser
#[must_use]
pub fn overrides(kind: AbstractType) -> bool {
    EXPORTS.iter().any(|&(_, exported)| exported == kind)
}

/// Build a descriptor from an export name and its options.
///
/// Returns `None` for names the dialect does not export.
///
/// ```
/// use sqlitejs_types::sqlite::construct;
///
/// let mut double = construct("DOUBLE PRECISION", (10, 2)).unwrap();
/// assert_eq!(double.to_sql(), "DOUBLE PRECISION(10,2)");
/// assert!(construct("UUID", ()).is_none());
/// ```
pub fn construct(name: &str, options: impl Into<TypeOptions>) -> Option<DataType> {
    export(name).map(|kind| DataType::new(kind, options))
}
