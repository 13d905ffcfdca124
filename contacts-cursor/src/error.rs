//! Error types for row cursor loading.

use thiserror::Error;

/// Result type alias for cursor operations.
pub type CursorResult<T> = std::result::Result<T, CursorError>;

/// Errors raised while building a cursor. Reading from a positioned cursor
/// never fails; absent or malformed values read as `None`.
#[derive(Debug, Error)]
pub enum CursorError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("row has {actual} values but the cursor has {expected} columns")]
    RowWidth { expected: usize, actual: usize },

    #[error("duplicate column: {0}")]
    DuplicateColumn(String),
}
