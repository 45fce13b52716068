//! Schema error types
//!
//! Only one condition is an error at this layer: a required table missing
//! from the source database. It is fatal to the affected plugin instance
//! alone; other plugins in the host framework are unaffected.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema pre-flight errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A table the plugin's query joins against does not exist
    #[error("required table '{0}' is missing from the database")]
    MissingRequiredTable(String),
}
