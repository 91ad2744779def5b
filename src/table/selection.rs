//! Selection engine.

use super::record::Record;

/// Outcome of toggling one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
}

/// Ordered collection of selected records, compared by row key.
#[derive(Debug, Clone)]
pub struct Selection<R> {
    records: Vec<R>,
}

impl<R> Default for Selection<R> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<R: Record + Clone> Selection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected records in the order they were selected.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, record: &R) -> bool {
        self.position(&record.row_key()).is_some()
    }

    pub fn keys(&self) -> Vec<R::Key> {
        self.records.iter().map(|record| record.row_key()).collect()
    }

    fn position(&self, key: &R::Key) -> Option<usize> {
        self.records.iter().position(|selected| selected.row_key() == *key)
    }

    /// Swap each selected record for the record in `records` with the same
    /// key, dropping any whose key is no longer present.
    ///
    /// Returns how many selected records were dropped.
    pub fn refresh(&mut self, records: &[R]) -> usize {
        let before = self.records.len();
        self.records = self
            .records
            .iter()
            .filter_map(|selected| {
                let key = selected.row_key();
                records.iter().find(|record| record.row_key() == key).cloned()
            })
            .collect();
        before - self.records.len()
    }

    /// Remove `record` if it is selected, otherwise append it.
    pub fn toggle(&mut self, record: &R) -> SelectionChange {
        match self.position(&record.row_key()) {
            Some(index) => {
                self.records.remove(index);
                SelectionChange::Removed
            }
            None => {
                self.records.push(record.clone());
                SelectionChange::Added
            }
        }
    }
}

/// Pure form of [`Selection::toggle`]: the selection after toggling `record`.
pub fn toggle_selection<R: Record + Clone>(record: &R, selection: &Selection<R>) -> Selection<R> {
    let mut next = selection.clone();
    next.toggle(record);
    next
}
