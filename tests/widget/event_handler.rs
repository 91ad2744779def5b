use crate::support::{key, left_click};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use datatable::ui::core::EventType;

#[test]
fn test_key_press_is_kept() {
    let event = EventType::from(Event::Key(key(KeyCode::Char('a'))));
    assert_eq!(event, EventType::Key(key(KeyCode::Char('a'))));
}

#[test]
fn test_key_release_is_dropped() {
    let release = KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(EventType::from(Event::Key(release)), EventType::Other);
}

#[test]
fn test_mouse_and_resize() {
    let click = left_click(3, 4);
    assert_eq!(EventType::from(Event::Mouse(click)), EventType::Mouse(click));
    assert_eq!(EventType::from(Event::Resize(80, 24)), EventType::Resize(80, 24));
    assert_eq!(EventType::from(Event::FocusGained), EventType::Other);
}
