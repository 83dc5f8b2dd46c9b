//! Error types for the table engine.

use thiserror::Error;

/// Errors raised while assembling a [`Table`](crate::Table).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one column.
    #[error("table has no columns")]
    NoColumns,

    /// Two columns share the same id.
    #[error("duplicate column id: {0}")]
    DuplicateColumn(String),

    /// The free-text filter targets a column that does not exist.
    #[error("unknown filter column: {0}")]
    UnknownFilterColumn(String),
}
