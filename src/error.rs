//! Error types for table configuration.

/// Errors raised when a table is configured with invalid column descriptors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("Table must have at least one column")]
    NoColumns,

    #[error("Column key cannot be empty")]
    EmptyColumnKey,

    #[error("Duplicate column key: {0}")]
    DuplicateColumnKey(String),

    #[error("Column '{0}': field accessor cannot be empty")]
    EmptyFieldAccessor(String),
}
