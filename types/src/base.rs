//! Generic renderers for types the SQLite dialect does not override

use crate::{AbstractType, BlobSize, TypeOptions};

/// Render the dialect-independent declaration of a type.
pub(crate) fn render(kind: AbstractType, key: &str, options: &TypeOptions) -> String {
    match kind {
        AbstractType::Date => "DATETIME".to_string(),
        AbstractType::DateOnly => "DATE".to_string(),
        AbstractType::Time => "TIME".to_string(),
        AbstractType::Uuid => "UUID".to_string(),
        AbstractType::Boolean => "TINYINT(1)".to_string(),
        AbstractType::Geometry => "GEOMETRY".to_string(),
        AbstractType::Text => "TEXT".to_string(),
        AbstractType::String => sized("VARCHAR", options),
        AbstractType::Char => sized("CHAR", options),
        AbstractType::Decimal => decimal(options),
        AbstractType::Blob => blob(options.size).to_string(),
        AbstractType::Enum => enumeration(options),
        // Numeric keys are user-visible, so the key rather than the name is used.
        AbstractType::Integer
        | AbstractType::BigInt
        | AbstractType::Float
        | AbstractType::Double
        | AbstractType::Real => number(key, options),
    }
}

fn sized(keyword: &str, options: &TypeOptions) -> String {
    let mut sql = match options.effective_length() {
        Some(length) => format!("{keyword}({length})"),
        None => keyword.to_string(),
    };
    if options.binary {
        sql.push_str(" BINARY");
    }
    sql
}

fn decimal(options: &TypeOptions) -> String {
    match (options.precision, options.scale) {
        (Some(precision), Some(scale)) => format!("DECIMAL({precision},{scale})"),
        (Some(precision), None) => format!("DECIMAL({precision})"),
        (None, _) => "DECIMAL".to_string(),
    }
}

const fn blob(size: Option<BlobSize>) -> &'static str {
    match size {
        Some(BlobSize::Tiny) => "TINYBLOB",
        Some(BlobSize::Medium) => "MEDIUMBLOB",
        Some(BlobSize::Long) => "LONGBLOB",
        None => "BLOB",
    }
}

fn enumeration(options: &TypeOptions) -> String {
    let members: Vec<String> = options
        .values
        .iter()
        .map(|value| format!("'{}'", value.replace('\'', "''")))
        .collect();
    format!("ENUM({})", members.join(", "))
}

// Dimensions before modifiers, the opposite of the SQLite numeric renderer.
fn number(key: &str, options: &TypeOptions) -> String {
    let mut sql = key.to_string();
    if let Some(length) = options.effective_length() {
        sql.push('(');
        sql.push_str(&length.to_string());
        if let Some(decimals) = options.decimals {
            sql.push(',');
            sql.push_str(&decimals.to_string());
        }
        sql.push(')');
    }
    if options.unsigned {
        sql.push_str(" UNSIGNED");
    }
    if options.zerofill {
        sql.push_str(" ZEROFILL");
    }
    sql
}
