//! Column descriptors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Describes how one column is labeled, which record field it shows, and
/// whether it can be sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier within a column list
    pub key: String,
    /// Header label
    pub title: String,
    /// Record field shown in this column
    pub field: String,
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    /// Create a non-sortable column.
    pub fn new(key: impl Into<String>, title: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            field: field.into(),
            sortable: false,
        }
    }

    /// Mark the column as sortable.
    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Check a column list before a table is built from it.
pub fn validate_columns(columns: &[Column]) -> Result<(), TableError> {
    if columns.is_empty() {
        return Err(TableError::NoColumns);
    }

    let mut seen = HashSet::new();
    for column in columns {
        if column.key.is_empty() {
            return Err(TableError::EmptyColumnKey);
        }
        if column.field.is_empty() {
            return Err(TableError::EmptyFieldAccessor(column.key.clone()));
        }
        if !seen.insert(column.key.as_str()) {
            return Err(TableError::DuplicateColumnKey(column.key.clone()));
        }
    }

    Ok(())
}
