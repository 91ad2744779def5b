//! The record abstraction the table is generic over.

use std::fmt::Debug;

use serde_json::{Map, Value};

use super::value::CellValue;

/// One data item displayed as a table row.
///
/// The table only reads the fields named by its column descriptors, and
/// identifies rows by [`Record::row_key`] when tracking selection.
pub trait Record {
    /// Identity of a logical row. Two records with equal keys are the same
    /// row for selection purposes, even if they are distinct values.
    type Key: PartialEq + Clone + Debug;

    /// Value of the named field, or `None` if the record has no such field.
    fn field(&self, accessor: &str) -> Option<CellValue>;

    fn row_key(&self) -> Self::Key;
}

/// JSON objects key on their `id` field when present, otherwise on the whole
/// object.
impl Record for Map<String, Value> {
    type Key = String;

    fn field(&self, accessor: &str) -> Option<CellValue> {
        self.get(accessor).map(CellValue::from)
    }

    fn row_key(&self) -> String {
        match self.get("id") {
            Some(id) => id.to_string(),
            None => Value::Object(self.clone()).to_string(),
        }
    }
}

