use crate::support::{key, left_click, line_of, render_lines};
use crossterm::event::KeyCode;
use datatable::config::Config;
use datatable::demo::{Dataset, Story};
use datatable::logger::Logger;
use datatable::ui::core::EventType;
use datatable::ui::DemoApp;

fn app(story: Story) -> DemoApp {
    DemoApp::new(Dataset::users(), story, Config::default(), Logger::new()).unwrap()
}

fn latest_log(app: &DemoApp) -> String {
    app.logger().get_logs().first().cloned().unwrap_or_default()
}

fn press(app: &mut DemoApp, code: KeyCode) {
    app.handle_event(EventType::Key(key(code))).unwrap();
}

#[test]
fn test_selection_callback_logs_keys() {
    let mut app = app(Story::Selectable);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.status_info().selected, 1);
    assert!(latest_log(&app).contains("Selected rows: [1]"));

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char(' '));
    assert!(latest_log(&app).contains("Selected rows: [1, 2]"));
}

#[test]
fn test_default_story_is_not_selectable() {
    let mut app = app(Story::Default);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.status_info().selected, 0);
}

#[test]
fn test_sort_updates_status() {
    let mut app = app(Story::Default);
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.status_info().sort, "Name ascending");
    assert!(latest_log(&app).contains("Sorted by 'name'"));
}

#[test]
fn test_next_story_reinitializes_table() {
    let mut app = app(Story::Selectable);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('1'));

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.story(), Story::Default);
    assert_eq!(app.status_info().selected, 0);
    assert!(!app.table().table().sort_state().is_active());
}

#[test]
fn test_toggle_loading() {
    let mut app = app(Story::Default);
    press(&mut app, KeyCode::Char('L'));
    assert!(app.table().table().is_loading());

    let lines = render_lines(&mut app, 60, 12);
    assert!(line_of(&lines, "Loading...").is_some());
    assert!(line_of(&lines, "Alice").is_none());

    press(&mut app, KeyCode::Char('L'));
    assert!(!app.table().table().is_loading());
}

#[test]
fn test_renders_table_and_status_bar() {
    let mut app = app(Story::Empty);
    let lines = render_lines(&mut app, 80, 12);
    assert!(line_of(&lines, "No data available").is_some());
    assert!(lines[11].contains("empty"));
    assert!(lines[0].contains("Users Table"));
}

#[test]
fn test_mouse_click_selects_row() {
    let mut app = app(Story::Selectable);
    render_lines(&mut app, 80, 12);

    // First body row sits below the top border and the header
    app.handle_event(EventType::Mouse(left_click(2, 2))).unwrap();
    assert_eq!(app.status_info().selected, 1);
    assert_eq!(app.status_info().message.as_deref(), Some("1 row(s) selected"));
}

#[test]
fn test_quit_keys() {
    let mut app = app(Story::Default);
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = self::app(Story::Default);
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());
}

#[test]
fn test_log_panel_shows_entries() {
    let mut app = app(Story::Selectable);
    press(&mut app, KeyCode::Char(' '));

    press(&mut app, KeyCode::Char('D'));
    assert!(app.is_log_open());

    let lines = render_lines(&mut app, 80, 20);
    assert!(line_of(&lines, " Log ").is_some());
    let selected = line_of(&lines, "Selected rows: [1]").unwrap();
    let story = line_of(&lines, "Showing story 'selectable'").unwrap();
    // Newest first
    assert!(selected < story);
}

#[test]
fn test_log_panel_captures_keys() {
    let mut app = app(Story::Selectable);
    press(&mut app, KeyCode::Char('D'));

    // Table keys are ignored while the panel is open
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.status_info().selected, 0);
    app.handle_event(EventType::Mouse(left_click(2, 2))).unwrap();
    assert_eq!(app.status_info().selected, 0);

    press(&mut app, KeyCode::Char('c'));
    assert!(app.logger().get_logs().is_empty());
    let lines = render_lines(&mut app, 80, 20);
    assert!(line_of(&lines, "No log entries").is_some());

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_log_open());
    assert!(!app.should_quit());
}
