use crate::fixtures::{columns, scored, user, User};
use datatable::constants::MISSING_CELL;
use datatable::table::{AriaSort, CellValue, Column, DataTable, Record, SortDirection, TableView, ViewState};

fn populated_table() -> DataTable<User> {
    DataTable::new(columns())
        .unwrap()
        .with_data(vec![scored(1, "Bob", 1.5), user(2, "Ann")])
}

#[test]
fn test_resolve_priority() {
    assert_eq!(ViewState::resolve(true, 0), ViewState::Loading);
    assert_eq!(ViewState::resolve(true, 10), ViewState::Loading);
    assert_eq!(ViewState::resolve(false, 0), ViewState::Empty);
    assert_eq!(ViewState::resolve(false, 3), ViewState::Populated);
}

#[test]
fn test_loading_hides_rows() {
    let table = populated_table().loading(true).selectable(true);
    let view = table.view();
    assert_eq!(view.state(), ViewState::Loading);
    assert_eq!(view.row_count(), 0);
}

#[test]
fn test_empty_without_loading() {
    let table = DataTable::<User>::new(columns()).unwrap();
    let view = table.view();
    assert!(matches!(view, TableView::Empty));
    assert_eq!(view.row_count(), 0);
}

#[test]
fn test_populated_cells_in_column_order() {
    let table = populated_table();
    let TableView::Populated {
        selection_column,
        header,
        rows,
    } = table.view()
    else {
        panic!("expected populated view");
    };

    assert!(!selection_column);
    let titles: Vec<&str> = header.iter().map(|cell| cell.title.as_str()).collect();
    assert_eq!(titles, vec!["ID", "Name", "Score"]);

    assert_eq!(rows[0].cells, vec!["1", "Bob", "1.5"]);
    // A missing score is an empty value, not a missing field
    assert_eq!(rows[1].cells, vec!["2", "Ann", ""]);
    assert!(rows.iter().all(|row| row.checkbox.is_none() && !row.selected));
}

#[test]
fn test_header_indicator_only_on_active_column() {
    let mut table = populated_table();
    table.toggle_sort("name");
    table.toggle_sort("name");

    let TableView::Populated { header, .. } = table.view() else {
        panic!("expected populated view");
    };

    assert_eq!(header[0].indicator, None);
    assert_eq!(header[0].aria_sort, AriaSort::None);
    assert_eq!(header[1].indicator, Some(SortDirection::Descending));
    assert_eq!(header[1].aria_sort, AriaSort::Descending);
    assert!(!header[2].sortable);
}

#[test]
fn test_selection_column_and_checkboxes() {
    let mut table = populated_table().selectable(true);
    table.toggle_row(&user(2, "Ann"));

    let TableView::Populated {
        selection_column,
        rows,
        ..
    } = table.view()
    else {
        panic!("expected populated view");
    };

    assert!(selection_column);
    assert_eq!(rows[0].checkbox, Some(false));
    assert_eq!(rows[1].checkbox, Some(true));
    assert!(rows[1].selected);
}

#[derive(Clone)]
struct Sparse;

impl Record for Sparse {
    type Key = u8;

    fn field(&self, accessor: &str) -> Option<CellValue> {
        (accessor == "present").then(|| CellValue::from("here"))
    }

    fn row_key(&self) -> u8 {
        0
    }
}

#[test]
fn test_missing_field_renders_placeholder() {
    let columns = vec![
        Column::new("present", "Present", "present"),
        Column::new("absent", "Absent", "absent"),
    ];
    let table = DataTable::new(columns).unwrap().with_data(vec![Sparse]);

    let TableView::Populated { rows, .. } = table.view() else {
        panic!("expected populated view");
    };
    assert_eq!(rows[0].cells, vec!["here".to_string(), MISSING_CELL.to_string()]);
}
