//! The table component state, independent of any terminal.
//!
//! [`DataTable`] owns the sort and selection state and takes the record
//! collection and the loading flag from its caller. Everything shown on
//! screen is derived from those through [`DataTable::view`].

pub mod column;
pub mod record;
pub mod selection;
pub mod sort;
pub mod value;
pub mod view;

pub use column::{validate_columns, Column};
pub use record::Record;
pub use selection::{toggle_selection, Selection, SelectionChange};
pub use sort::{derive_order, AriaSort, SortDirection, SortState};
pub use value::CellValue;
pub use view::{HeaderCell, RowView, TableView, ViewInputs, ViewState};

use crate::error::TableError;

/// Invoked with the full selection every time it changes.
pub type RowSelectCallback<R> = Box<dyn FnMut(&[R])>;

/// A table over records of type `R`: columns, data, and its sort and selection state.
pub struct DataTable<R: Record> {
    columns: Vec<Column>,
    data: Vec<R>,
    loading: bool,
    selectable: bool,
    sort: SortState,
    selection: Selection<R>,
    on_row_select: Option<RowSelectCallback<R>>,
}

impl<R: Record + Clone> DataTable<R> {
    /// Build a table over `columns`, rejecting invalid descriptors.
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        validate_columns(&columns)?;

        Ok(Self {
            columns,
            data: Vec::new(),
            loading: false,
            selectable: false,
            sort: SortState::default(),
            selection: Selection::new(),
            on_row_select: None,
        })
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<R>) -> Self {
        self.set_data(data);
        self
    }

    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    #[must_use]
    pub fn on_row_select(mut self, callback: impl FnMut(&[R]) + 'static) -> Self {
        self.on_row_select = Some(Box::new(callback));
        self
    }

    /// Replace the record collection.
    ///
    /// The sort state is kept. Selected rows are matched to the new records
    /// by key; rows whose key is gone leave the selection.
    pub fn set_data(&mut self, data: Vec<R>) {
        self.data = data;
        let dropped = self.selection.refresh(&self.data);
        if dropped > 0 {
            log::debug!("{} selected row(s) no longer present", dropped);
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    pub fn set_on_row_select(&mut self, callback: Option<RowSelectCallback<R>>) {
        self.on_row_select = callback;
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &Selection<R> {
        &self.selection
    }

    pub fn selected_records(&self) -> &[R] {
        self.selection.records()
    }

    /// Which of loading, empty or populated the next render shows.
    pub fn view_state(&self) -> ViewState {
        ViewState::resolve(self.loading, self.data.len())
    }

    /// Records in display order under the current sort.
    pub fn derived_rows(&self) -> Vec<&R> {
        derive_order(&self.data, &self.sort)
    }

    pub fn view(&self) -> TableView<'_, R> {
        view::build_view(&ViewInputs {
            records: &self.data,
            columns: &self.columns,
            loading: self.loading,
            selectable: self.selectable,
            sort: &self.sort,
            selection: &self.selection,
        })
    }

    /// Header interaction on the column showing `field`.
    ///
    /// Returns false, leaving the state untouched, when no sortable column
    /// shows that field.
    pub fn toggle_sort(&mut self, field: &str) -> bool {
        let sortable = self
            .columns
            .iter()
            .any(|column| column.field == field && column.sortable);
        if !sortable {
            return false;
        }

        self.sort.toggle(field);
        log::debug!("Sort by '{}' {:?}", field, self.sort.direction());
        true
    }

    /// Header interaction on the column at `index`.
    pub fn toggle_sort_column(&mut self, index: usize) -> bool {
        match self.columns.get(index) {
            Some(column) => {
                let field = column.field.clone();
                self.toggle_sort(&field)
            }
            None => false,
        }
    }

    /// Row interaction with `record`.
    ///
    /// Ignored while selection is disabled. Otherwise toggles the record and
    /// hands the resulting selection to the callback once.
    pub fn toggle_row(&mut self, record: &R) -> Option<SelectionChange> {
        if !self.selectable {
            return None;
        }

        let change = self.selection.toggle(record);
        log::debug!(
            "Row {:?} {:?}, {} selected",
            record.row_key(),
            change,
            self.selection.len()
        );

        if let Some(callback) = self.on_row_select.as_mut() {
            callback(self.selection.records());
        }

        Some(change)
    }

    /// Row interaction on the `index`-th row of the derived view.
    ///
    /// Rows only exist while the populated view is shown.
    pub fn toggle_row_at(&mut self, index: usize) -> Option<SelectionChange> {
        if self.view_state() != ViewState::Populated {
            return None;
        }
        let record = self.derived_rows().get(index).map(|record| (*record).clone())?;
        self.toggle_row(&record)
    }
}
