//! Row-level error types
//!
//! Row failures are isolated: the runner logs them and skips the row,
//! iteration over the remaining rows continues.

use thiserror::Error;

/// Result type for row operations
pub type RowResult<T> = Result<T, RowError>;

/// Errors raised while reading one result row
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// A column the transform requires is absent or null.
    ///
    /// Absence of `title` or of the last-modified timestamp is normal and
    /// never raises this; absence of the markup blob or the creation
    /// timestamp does.
    #[error("required column '{0}' is missing or null")]
    MissingColumn(&'static str),

    /// A column holds a value of an unusable type
    #[error("column '{column}' has an unexpected type, expected {expected}")]
    WrongType {
        /// Column name as aliased in the query
        column: &'static str,
        /// Human-readable expected type
        expected: &'static str,
    },
}
