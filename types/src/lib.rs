//! Abstract column types and their SQLite dialect adaptation
//!
//! This crate provides the type layer that sits between an ORM's
//! dialect-independent data types and the SQLite flavour of SQL:
//!
//! - [`AbstractType`] - the logical column types (DATE, STRING, FLOAT, ...)
//! - [`TypeOptions`] / [`DataType`] - a configured type descriptor
//! - [`SQLiteValue`] / [`ParsedValue`] - raw storage values and their parsed form
//! - the [`sqlite`] module - native type registry, DDL renderers and value parsers
//!
//! # Features
//!
//! - `tracing` - Emit advisory warnings through `tracing` (enabled by default)
//! - `serde` - Enable serde serialization/deserialization of descriptors

#[macro_use]
mod tracing;

mod abstract_type;
mod base;
mod context;
mod data_type;
mod error;
mod options;
pub mod sqlite;
mod value;

pub use abstract_type::AbstractType;
pub use context::ParseContext;
pub use data_type::{DataType, ToSqlType};
pub use error::{Result, TypeError, UnknownTypeError};
pub use options::{BlobSize, TypeOptions};
pub use value::{ParsedValue, SQLiteValue};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::sqlite::{NativeTypes, TypeRegistry};
    pub use crate::{
        AbstractType, BlobSize, DataType, ParseContext, ParsedValue, SQLiteValue, ToSqlType,
        TypeOptions,
    };
}
