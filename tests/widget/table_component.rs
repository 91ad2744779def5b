use crate::support::{column_of, component, key, left_click, line_of, render_lines, users_table};
use crossterm::event::{Event, KeyCode};
use datatable::table::SortDirection;
use datatable::ui::core::{Action, Component};

#[test]
fn test_loading_placeholder_hides_rows() {
    let mut table = component(users_table().loading(true).selectable(true));
    let lines = render_lines(&mut table, 50, 10);

    assert!(line_of(&lines, "Loading...").is_some());
    assert!(line_of(&lines, "Alice").is_none());
    assert!(line_of(&lines, "[ ]").is_none());
    assert!(table.geometry().is_none());
}

#[test]
fn test_empty_placeholder() {
    let mut table = component(users_table());
    table.set_data(Vec::new());
    let lines = render_lines(&mut table, 50, 10);

    assert!(line_of(&lines, "No data available").is_some());
    assert!(line_of(&lines, "Email").is_none());
}

#[test]
fn test_populated_header_and_rows() {
    let mut table = component(users_table());
    let lines = render_lines(&mut table, 50, 10);

    let header = line_of(&lines, "Email").unwrap();
    assert!(lines[header].contains("ID"));
    assert!(lines[header].contains("Name"));

    let alice = line_of(&lines, "alice@example.com").unwrap();
    let charlie = line_of(&lines, "charlie@example.com").unwrap();
    assert!(header < alice && alice < charlie);
    assert!(line_of(&lines, "[ ]").is_none());
}

#[test]
fn test_header_click_sorts_and_shows_indicator() {
    let mut table = component(users_table());
    render_lines(&mut table, 50, 10);

    let (x, _) = table.geometry().unwrap().columns[1];
    let y = table.geometry().unwrap().inner.y;
    let action = table.handle_mouse_events(left_click(x, y));
    assert_eq!(action, Action::SortColumn(1));

    let outcome = table.update(action);
    assert_eq!(
        outcome,
        Action::SortChanged {
            field: "name".to_string(),
            direction: SortDirection::Ascending,
        }
    );

    let lines = render_lines(&mut table, 50, 10);
    assert!(line_of(&lines, "Name ▲").is_some());

    table.update(Action::SortColumn(1));
    let lines = render_lines(&mut table, 50, 10);
    assert!(line_of(&lines, "Name ▼").is_some());
    assert!(line_of(&lines, "Charlie").unwrap() < line_of(&lines, "Alice").unwrap());
    assert_eq!(table.sort_summary(), "Name descending");
}

#[test]
fn test_click_on_drawn_header_title_sorts_that_column() {
    let mut table = component(users_table().selectable(true));
    let lines = render_lines(&mut table, 40, 8);

    let header = line_of(&lines, "Name").unwrap() as u16;
    let x = column_of(&lines[header as usize], "Name").unwrap();
    let action = table.handle_mouse_events(left_click(x, header));
    assert_eq!(action, Action::SortColumn(1));

    // Last cell of the drawn "ID" title
    let x = column_of(&lines[header as usize], "ID").unwrap() + 1;
    assert_eq!(table.handle_mouse_events(left_click(x, header)), Action::SortColumn(0));
}

#[test]
fn test_unsortable_header_click_is_ignored() {
    let mut table = component(users_table());
    render_lines(&mut table, 50, 10);

    let (x, _) = table.geometry().unwrap().columns[2];
    let y = table.geometry().unwrap().inner.y;
    let action = table.handle_mouse_events(left_click(x, y));
    assert_eq!(table.update(action), Action::None);
    assert!(!table.table().sort_state().is_active());
    assert_eq!(table.sort_summary(), "unsorted");
}

#[test]
fn test_row_click_toggles_selection() {
    let mut table = component(users_table().selectable(true));
    render_lines(&mut table, 50, 10);

    let geometry = table.geometry().unwrap().clone();
    let second_row = geometry.inner.y + 2;
    let action = table.handle_mouse_events(left_click(geometry.inner.x, second_row));
    assert_eq!(action, Action::ToggleRow(1));
    assert_eq!(table.update(action), Action::SelectionChanged(1));
    assert_eq!(table.cursor_row(), 1);

    let lines = render_lines(&mut table, 50, 10);
    let bob = line_of(&lines, "Bob").unwrap();
    assert!(lines[bob].contains("[x]"));
    let alice = line_of(&lines, "Alice").unwrap();
    assert!(lines[alice].contains("[ ]"));
}

#[test]
fn test_row_click_without_selection_moves_cursor() {
    let mut table = component(users_table());
    render_lines(&mut table, 50, 10);

    let geometry = table.geometry().unwrap().clone();
    let action = table.handle_mouse_events(left_click(geometry.inner.x + 1, geometry.inner.y + 3));
    assert_eq!(action, Action::None);
    assert_eq!(table.cursor_row(), 2);
    assert!(table.table().selected_records().is_empty());
}

#[test]
fn test_click_outside_table_is_ignored() {
    let mut table = component(users_table().selectable(true));
    render_lines(&mut table, 50, 10);
    assert_eq!(table.handle_mouse_events(left_click(0, 0)), Action::None);
    // Below the last row
    assert_eq!(table.handle_mouse_events(left_click(5, 8)), Action::None);
}

#[test]
fn test_keyboard_navigation_and_sorting() {
    let mut table = component(users_table());

    let action = table.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(action, Action::NextRow);
    table.update(action);
    table.update(Action::NextRow);
    table.update(Action::NextRow);
    assert_eq!(table.cursor_row(), 2);

    table.update(Action::FirstRow);
    assert_eq!(table.cursor_row(), 0);

    table.update(Action::NextColumn);
    assert_eq!(table.handle_key_events(key(KeyCode::Char('s'))), Action::SortColumn(1));
    assert_eq!(table.handle_key_events(key(KeyCode::Char('1'))), Action::SortColumn(0));

    // Selection keys do nothing unless the table is selectable
    assert_eq!(table.handle_key_events(key(KeyCode::Char(' '))), Action::None);
}

#[test]
fn test_space_toggles_cursor_row() {
    let mut table = component(users_table().selectable(true));
    table.update(Action::LastRow);

    let action = table.handle_events(Some(Event::Key(key(KeyCode::Char(' ')))));
    assert_eq!(action, Action::ToggleRow(2));
    assert_eq!(table.update(action), Action::SelectionChanged(1));

    let action = table.handle_key_events(key(KeyCode::Enter));
    assert_eq!(table.update(action), Action::SelectionChanged(0));
}

#[test]
fn test_cursor_stays_in_range_when_data_shrinks() {
    let mut table = component(users_table());
    table.update(Action::LastRow);
    assert_eq!(table.cursor_row(), 2);

    let first = table.table().data()[0].clone();
    table.set_data(vec![first]);
    assert_eq!(table.cursor_row(), 0);
}

#[test]
fn test_scrolls_to_keep_cursor_visible() {
    let mut table = component(users_table());
    // Border, header and one body row
    render_lines(&mut table, 50, 4);
    assert_eq!(table.geometry().unwrap().visible_rows, 1);

    table.update(Action::LastRow);
    let lines = render_lines(&mut table, 50, 4);
    assert!(line_of(&lines, "Charlie").is_some());
    assert!(line_of(&lines, "Alice").is_none());
    assert_eq!(table.geometry().unwrap().row_offset, 2);
}
