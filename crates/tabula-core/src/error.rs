//! Error types for tabula-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabula
///
/// Formatting a value never fails; these errors only come from parsing
/// string tags and from table operations that address columns.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Data type tag outside the known vocabulary
    #[error("Unknown data type: {0}")]
    UnknownDataType(String),

    /// Format option tag outside the known vocabulary
    #[error("Unknown format option: {0}")]
    UnknownFormatOption(String),

    /// Column id not present in the table
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Two columns share the same id
    #[error("Column id already exists: {0}")]
    DuplicateColumn(String),
}
