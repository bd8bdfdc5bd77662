use thiserror::Error;

/// Error returned when a string does not name an abstract type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown abstract type `{name}`")]
pub struct UnknownTypeError {
    /// The name that failed to resolve
    pub name: String,
}

impl UnknownTypeError {
    pub(crate) fn new(name: &str) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A stored date string could not be read as a date
    #[error("Invalid date: {raw:?}")]
    InvalidDate {
        /// The raw value as it was parsed, timezone suffix included
        raw: String,
    },

    /// Lookup by name failed
    #[error(transparent)]
    UnknownType(#[from] UnknownTypeError),
}

/// Result type for type adaptation operations
pub type Result<T> = core::result::Result<T, TypeError>;
