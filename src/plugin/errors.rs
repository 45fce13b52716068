//! Plugin-level error types

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for plugin operations
pub type PluginResult<T> = Result<T, PluginError>;

/// Errors that abort a plugin run or registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    /// A plugin with the same name is already registered
    #[error("plugin '{0}' is already registered")]
    DuplicateName(String),

    /// Pre-flight schema check failed; this plugin declines to run against
    /// the current database, other plugins are unaffected
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
