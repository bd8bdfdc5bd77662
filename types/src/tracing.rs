//! Tracing utilities for advisory type diagnostics.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! The macro no-ops when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site.

/// Emit a warn-level event pointing at the dialect documentation.
///
/// ```ignore
/// sqlitejs_warn!(SQLITE_DATATYPE_DOCS, "SQLite does not support TEXT with options.");
/// ```
macro_rules! sqlitejs_warn {
    ($docs:expr, $message:literal) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!(docs = $docs, $message);
        #[cfg(not(feature = "tracing"))]
        let _ = $docs;
    };
}
