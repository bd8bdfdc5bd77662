//! SQLite column type declarations
//!
//! Types SQLite handles differently from the generic renderer are dealt with
//! here; everything else falls through to the base renderer.

use crate::{AbstractType, TypeOptions, base};

/// Where warnings about unsupported type options point users to
pub const SQLITE_DATATYPE_DOCS: &str = "https://www.sqlite.org/datatype3.html";

/// Render the SQLite declaration of a type.
///
/// `options` is mutable because TEXT drops a length it cannot honour.
///
/// # Examples
///
/// ```
/// use sqlitejs_types::{AbstractType, TypeOptions};
/// use sqlitejs_types::sqlite::render;
///
/// let mut options = TypeOptions::new().length(10).decimals(2).unsigned();
/// assert_eq!(
///     render(AbstractType::Float, "FLOAT", &mut options),
///     "FLOAT UNSIGNED(10,2)"
/// );
///
/// let mut options = TypeOptions::new().values(["a", "b"]);
/// assert_eq!(render(AbstractType::Enum, "ENUM", &mut options), "TEXT");
/// ```
pub fn render(kind: AbstractType, key: &str, options: &mut TypeOptions) -> String {
    match kind {
        AbstractType::String => binary_sized(kind, key, "VARCHAR", options),
        AbstractType::Char => binary_sized(kind, key, "CHAR", options),
        AbstractType::Text => text(options),
        // No native enum, members are not enforced by the column type.
        AbstractType::Enum => "TEXT".to_string(),
        kind if kind.is_numeric() => render_number(key, options),
        kind => base::render(kind, key, options),
    }
}

/// Shared renderer for INTEGER, BIGINT, FLOAT, DOUBLE and REAL.
///
/// Produces `KEY [UNSIGNED] [ZEROFILL][(length[,decimals])]`.
#[must_use]
pub fn render_number(key: &str, options: &TypeOptions) -> String {
    let mut sql = key.to_string();

    if options.unsigned {
        sql.push_str(" UNSIGNED");
    }
    if options.zerofill {
        sql.push_str(" ZEROFILL");
    }

    if let Some(length) = options.effective_length() {
        sql.push('(');
        sql.push_str(&length.to_string());
        if let Some(decimals) = options.decimals {
            sql.push(',');
            sql.push_str(&decimals.to_string());
        }
        sql.push(')');
    }
    sql
}

fn binary_sized(kind: AbstractType, key: &str, keyword: &str, options: &TypeOptions) -> String {
    if !options.binary {
        return base::render(kind, key, options);
    }
    // Binary forms keep whatever length was configured, zero included.
    match options.length {
        Some(length) => format!("{keyword} BINARY({length})"),
        None => format!("{keyword} BINARY"),
    }
}

fn text(options: &mut TypeOptions) -> String {
    if options.effective_length().is_some() {
        sqlitejs_warn!(
            SQLITE_DATATYPE_DOCS,
            "SQLite does not support TEXT with options. Plain `TEXT` will be used instead."
        );
        options.length = None;
    }
    "TEXT".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_with(kind: AbstractType, options: TypeOptions) -> String {
        let mut options = options;
        render(kind, kind.default_key(), &mut options)
    }

    #[test]
    fn test_number_modifier_order() {
        let options = TypeOptions::new().length(5).unsigned().zerofill();
        assert_eq!(render_number("INTEGER", &options), "INTEGER UNSIGNED ZEROFILL(5)");
        assert_eq!(render_number("BIGINT", &TypeOptions::new()), "BIGINT");
        assert_eq!(
            render_number("BIGINT", &TypeOptions::new().zerofill()),
            "BIGINT ZEROFILL"
        );
    }

    #[test]
    fn test_number_decimals_need_length() {
        assert_eq!(
            render_number("REAL", &TypeOptions::new().decimals(2)),
            "REAL"
        );
        assert_eq!(
            render_number("REAL", &TypeOptions::new().length(0).decimals(2)),
            "REAL"
        );
        assert_eq!(
            render_number("REAL", &TypeOptions::new().length(6).decimals(0)),
            "REAL(6,0)"
        );
    }

    #[test]
    fn test_double_uses_its_key() {
        assert_eq!(
            render_with(AbstractType::Double, TypeOptions::from((10, 2))),
            "DOUBLE PRECISION(10,2)"
        );
    }

    #[test]
    fn test_binary_strings() {
        assert_eq!(
            render_with(AbstractType::String, TypeOptions::new().length(255).binary()),
            "VARCHAR BINARY(255)"
        );
        assert_eq!(
            render_with(AbstractType::Char, TypeOptions::new().length(36).binary()),
            "CHAR BINARY(36)"
        );
        assert_eq!(
            render_with(AbstractType::Char, TypeOptions::new().binary()),
            "CHAR BINARY"
        );
    }

    #[test]
    fn test_binary_strings_keep_zero_length() {
        assert_eq!(
            render_with(AbstractType::String, TypeOptions::new().length(0).binary()),
            "VARCHAR BINARY(0)"
        );
        assert_eq!(
            render_with(AbstractType::Char, TypeOptions::new().length(0).binary()),
            "CHAR BINARY(0)"
        );
    }

    #[test]
    fn test_plain_strings_use_base() {
        assert_eq!(
            render_with(AbstractType::String, TypeOptions::new().length(255)),
            "VARCHAR(255)"
        );
        assert_eq!(
            render_with(AbstractType::Char, TypeOptions::new().length(3)),
            "CHAR(3)"
        );
    }

    #[test]
    fn test_text_drops_length() {
        let mut options = TypeOptions::new().length(100);
        assert_eq!(render(AbstractType::Text, "TEXT", &mut options), "TEXT");
        assert_eq!(options.length, None);
        assert_eq!(render(AbstractType::Text, "TEXT", &mut options), "TEXT");
    }

    #[test]
    fn test_text_keeps_other_options() {
        let mut options = TypeOptions::new().length(100).binary();
        render(AbstractType::Text, "TEXT", &mut options);
        assert!(options.binary);
    }

    #[test]
    fn test_enum_ignores_members() {
        assert_eq!(render_with(AbstractType::Enum, TypeOptions::new()), "TEXT");
        assert_eq!(
            render_with(
                AbstractType::Enum,
                TypeOptions::new().values(["red", "green", "blue"])
            ),
            "TEXT"
        );
    }

    #[test]
    fn test_fallthrough_to_base() {
        assert_eq!(render_with(AbstractType::Date, TypeOptions::new()), "DATETIME");
        assert_eq!(render_with(AbstractType::Time, TypeOptions::new()), "TIME");
        assert_eq!(
            render_with(AbstractType::Decimal, TypeOptions::new().precision(8, Some(2))),
            "DECIMAL(8,2)"
        );
    }
}
