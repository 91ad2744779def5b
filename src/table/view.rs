//! Render model for the table.
//!
//! A [`TableView`] is rebuilt from the table inputs on every render and is
//! what a front end paints. Building it never mutates table state.

use super::column::Column;
use super::record::Record;
use super::selection::Selection;
use super::sort::{derive_order, AriaSort, SortDirection, SortState};
use crate::constants::MISSING_CELL;

/// Which of the three mutually exclusive views is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Empty,
    Populated,
}

impl ViewState {
    /// Loading wins over everything, then an empty collection.
    #[must_use]
    pub fn resolve(loading: bool, record_count: usize) -> Self {
        if loading {
            ViewState::Loading
        } else if record_count == 0 {
            ViewState::Empty
        } else {
            ViewState::Populated
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub field: String,
    pub sortable: bool,
    /// Direction glyph to draw, set only on the active sort column
    pub indicator: Option<SortDirection>,
    pub aria_sort: AriaSort,
}

#[derive(Debug, Clone)]
pub struct RowView<'a, R> {
    pub record: &'a R,
    pub selected: bool,
    /// Checkbox state, present only when selection is enabled
    pub checkbox: Option<bool>,
    /// Display text per column, in column order
    pub cells: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum TableView<'a, R> {
    Loading,
    Empty,
    Populated {
        /// Whether the header starts with an empty selection cell
        selection_column: bool,
        header: Vec<HeaderCell>,
        rows: Vec<RowView<'a, R>>,
    },
}

impl<R> TableView<'_, R> {
    #[must_use]
    pub fn state(&self) -> ViewState {
        match self {
            TableView::Loading => ViewState::Loading,
            TableView::Empty => ViewState::Empty,
            TableView::Populated { .. } => ViewState::Populated,
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        match self {
            TableView::Populated { rows, .. } => rows.len(),
            _ => 0,
        }
    }
}

/// Everything a view is derived from.
pub struct ViewInputs<'a, R> {
    pub records: &'a [R],
    pub columns: &'a [Column],
    pub loading: bool,
    pub selectable: bool,
    pub sort: &'a SortState,
    pub selection: &'a Selection<R>,
}

pub fn header_cells(columns: &[Column], sort: &SortState) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|column| {
            let aria_sort = sort.aria_sort(&column.field);
            HeaderCell {
                key: column.key.clone(),
                title: column.title.clone(),
                field: column.field.clone(),
                sortable: column.sortable,
                indicator: (aria_sort != AriaSort::None).then(|| sort.direction()),
                aria_sort,
            }
        })
        .collect()
}

/// Display text for every column of `record`.
pub fn cell_texts<R: Record>(record: &R, columns: &[Column]) -> Vec<String> {
    columns
        .iter()
        .map(|column| match record.field(&column.field) {
            Some(value) => value.to_string(),
            None => {
                log::debug!("Record has no field '{}' for column '{}'", column.field, column.key);
                MISSING_CELL.to_string()
            }
        })
        .collect()
}

pub fn build_view<'a, R: Record + Clone>(inputs: &ViewInputs<'a, R>) -> TableView<'a, R> {
    match ViewState::resolve(inputs.loading, inputs.records.len()) {
        ViewState::Loading => TableView::Loading,
        ViewState::Empty => TableView::Empty,
        ViewState::Populated => {
            let rows = derive_order(inputs.records, inputs.sort)
                .into_iter()
                .map(|record| {
                    let selected = inputs.selectable && inputs.selection.contains(record);
                    RowView {
                        record,
                        selected,
                        checkbox: inputs.selectable.then_some(selected),
                        cells: cell_texts(record, inputs.columns),
                    }
                })
                .collect();

            TableView::Populated {
                selection_column: inputs.selectable,
                header: header_cells(inputs.columns, inputs.sort),
                rows,
            }
        }
    }
}
