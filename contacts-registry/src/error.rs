//! Error types for the custom data registry.

use thiserror::Error;

/// Result type alias for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No entry is registered for the mime type.
    #[error("missing custom data entry for {0}")]
    MissingRegistration(String),

    /// No registered entry owns the field.
    #[error("no registered entry owns field {column} of {mime_type}")]
    UnknownField { mime_type: String, column: String },

    /// Built-in kinds cannot be replaced by a custom entry.
    #[error("{0} is a built-in mime type")]
    BuiltInMimeType(String),
}
