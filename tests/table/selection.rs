use crate::fixtures::{user, User};
use datatable::table::{toggle_selection, Selection, SelectionChange};

#[test]
fn test_scenario_select_deselect() {
    let mut selection = Selection::new();
    let first = user(1, "Alice");
    let second = user(2, "Bob");

    assert_eq!(selection.toggle(&first), SelectionChange::Added);
    assert_eq!(selection.keys(), vec![1]);

    assert_eq!(selection.toggle(&second), SelectionChange::Added);
    assert_eq!(selection.keys(), vec![1, 2]);

    assert_eq!(selection.toggle(&first), SelectionChange::Removed);
    assert_eq!(selection.keys(), vec![2]);
}

#[test]
fn test_double_toggle_restores_selection() {
    let mut selection = Selection::new();
    selection.toggle(&user(1, "Alice"));
    selection.toggle(&user(3, "Carol"));
    let before = selection.keys();

    let record = user(2, "Bob");
    selection.toggle(&record);
    selection.toggle(&record);

    assert_eq!(selection.keys(), before);
}

#[test]
fn test_removal_preserves_order() {
    let mut selection = Selection::new();
    for id in 1..=4 {
        selection.toggle(&user(id, "x"));
    }
    selection.toggle(&user(2, "x"));
    assert_eq!(selection.keys(), vec![1, 3, 4]);
}

#[test]
fn test_membership_uses_row_key() {
    let mut selection = Selection::new();
    selection.toggle(&user(7, "Original"));

    // A recreated record for the same logical row
    let refreshed = user(7, "Renamed");
    assert!(selection.contains(&refreshed));

    assert_eq!(selection.toggle(&refreshed), SelectionChange::Removed);
    assert!(selection.is_empty());
}

#[test]
fn test_equal_values_with_distinct_keys_are_distinct() {
    let mut selection: Selection<User> = Selection::new();
    selection.toggle(&user(1, "Same"));
    selection.toggle(&user(2, "Same"));
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_pure_toggle_leaves_input_untouched() {
    let mut original = Selection::new();
    original.toggle(&user(1, "Alice"));

    let next = toggle_selection(&user(2, "Bob"), &original);
    assert_eq!(original.keys(), vec![1]);
    assert_eq!(next.keys(), vec![1, 2]);

    let back = toggle_selection(&user(2, "Bob"), &next);
    assert_eq!(back.keys(), original.keys());
}

#[test]
fn test_refresh_takes_new_records_and_drops_missing_keys() {
    let mut selection = Selection::new();
    selection.toggle(&user(1, "Alice"));
    selection.toggle(&user(3, "Carol"));

    let dropped = selection.refresh(&[user(1, "Alice (renamed)"), user(2, "Bob")]);
    assert_eq!(dropped, 1);
    assert_eq!(selection.records(), &[user(1, "Alice (renamed)")]);
}

#[test]
fn test_refresh_keeps_selection_order() {
    let mut selection = Selection::new();
    selection.toggle(&user(2, "Bob"));
    selection.toggle(&user(1, "Alice"));

    selection.refresh(&[user(1, "A"), user(2, "B")]);
    assert_eq!(selection.keys(), vec![2, 1]);
}
