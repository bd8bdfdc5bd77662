//! SQLite dialect adaptation
//!
//! This module provides the SQLite side of the type layer:
//!
//! - [`TypeRegistry`] / [`NativeTypes`] - native keywords per abstract type
//! - [`render()`] / [`render_number()`] - column type declarations for DDL
//! - [`parse_date`] / [`parse_float`] - value parsers for stored values
//! - [`EXPORTS`] - the types this dialect overrides, by export name

mod exports;
mod parse;
mod registry;
mod render;

pub use exports::{EXPORTS, construct, export, overrides};
pub use parse::{parse_date, parse_float};
pub use registry::{NativeTypes, TypeRegistry, supported_native_types};
pub use render::{SQLITE_DATATYPE_DOCS, render, render_number};
