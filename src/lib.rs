//! # sqlitejs
//!
//! SQLite dialect type adaptation for abstract ORM column types.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlitejs::prelude::*;
//!
//! // Render column declarations for DDL
//! let mut price = DataType::double((10, 2));
//! assert_eq!(price.to_sql(), "DOUBLE PRECISION(10,2)");
//!
//! let mut status = DataType::enumeration(["draft", "published"]);
//! assert_eq!(status.to_sql(), "TEXT");
//!
//! // Ask the registry what SQLite accepts natively
//! let registry = TypeRegistry::sqlite();
//! assert!(registry.supported_native_types(AbstractType::Integer).contains("INTEGER"));
//! assert!(!registry.supported_native_types(AbstractType::Geometry).is_supported());
//!
//! // Read stored values back
//! let ctx = ParseContext::new("+00:00");
//! let value = AbstractType::Float.parse_value(SQLiteValue::from("Infinity"), &ctx)?;
//! assert_eq!(value, ParsedValue::Value(SQLiteValue::Real(f64::INFINITY)));
//! # Ok::<(), sqlitejs::error::TypeError>(())
//! ```
//!
//! ## Features
//!
//! | Feature   | Default | Description                                      |
//! |-----------|---------|--------------------------------------------------|
//! | `tracing` | ✅      | Advisory warnings (e.g. TEXT with a length)      |
//! | `serde`   |         | (De)serialize type descriptors and parse context |

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for type adaptation operations
pub use sqlitejs_types::Result;

pub use sqlitejs_types::{
    AbstractType, BlobSize, DataType, ParseContext, ParsedValue, SQLiteValue, ToSqlType,
    TypeOptions,
};

/// Error types
pub mod error {
    pub use sqlitejs_types::{TypeError, UnknownTypeError};
}

/// SQLite dialect: native type registry, renderers and value parsers.
///
/// - [`TypeRegistry`](sqlite::TypeRegistry) - native keywords per abstract type
/// - [`render`](sqlite::render()) - column type declarations
/// - [`parse_date`](sqlite::parse_date) / [`parse_float`](sqlite::parse_float) - value parsers
/// - [`EXPORTS`](sqlite::EXPORTS) - the types SQLite overrides
pub use sqlitejs_types::sqlite;

/// Prelude module for commonly used types
pub mod prelude {
    pub use sqlitejs_types::prelude::*;
}
