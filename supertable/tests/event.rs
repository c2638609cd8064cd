use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use supertable::event::{EventResult, Key, KeyCombo, Modifiers};

#[test]
fn test_key_from_crossterm() {
    assert_eq!(Key::from(KeyCode::Enter), Key::Enter);
    assert_eq!(Key::from(KeyCode::Char(' ')), Key::Char(' '));
    assert_eq!(Key::from(KeyCode::Backspace), Key::Backspace);
    assert_eq!(Key::from(KeyCode::Esc), Key::Other);
    assert_eq!(Key::from(KeyCode::Up), Key::Other);
    assert_eq!(Key::from(KeyCode::F(5)), Key::Other);
}

#[test]
fn test_key_event_from_crossterm() {
    let combo = KeyCombo::from(KeyEvent::new(
        KeyCode::Char('a'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT,
    ));
    assert_eq!(combo.key, Key::Char('a'));
    assert!(combo.modifiers.ctrl);
    assert!(combo.modifiers.shift);
    assert!(!combo.modifiers.alt);
    assert!(!combo.modifiers.none());
}

#[test]
fn test_plain_combo_has_no_modifiers() {
    let combo: KeyCombo = Key::Enter.into();
    assert_eq!(combo.modifiers, Modifiers::new());
    assert!(combo.modifiers.none());
}

#[test]
fn test_event_result_handled() {
    assert!(EventResult::Consumed.is_handled());
    assert!(!EventResult::Ignored.is_handled());
}
