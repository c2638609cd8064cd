use std::sync::{Arc, Mutex};
use std::time::Duration;

use supertable::event::{EventResult, Key, KeyCombo, Modifiers};
use supertable::search::{SearchBar, SearchField, SearchFieldProps, sanitize};
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// A field whose emissions are recorded.
fn recording_field(props: SearchFieldProps) -> (SearchField, Arc<Mutex<Vec<String>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let field = SearchField::new(props).on_search(move |query| sink.lock().unwrap().push(query));
    (field, calls)
}

fn emitted(calls: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
    calls.lock().unwrap().clone()
}

// =============================================================================
// Sanitizing
// =============================================================================

#[test]
fn test_sanitize_trims_only() {
    assert_eq!(sanitize("  hello world  "), "hello world");
    assert_eq!(sanitize("\tMixed  Case\n"), "Mixed  Case");
    assert_eq!(sanitize("   "), "");
}

// =============================================================================
// Debounce
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_emits_trimmed_value_after_quiet_period() {
    let (field, calls) = recording_field(SearchFieldProps::default());
    field.on_change("  hello world  ");

    // Displayed value updates immediately, untrimmed
    assert_eq!(field.value(), "  hello world  ");
    assert!(field.has_pending());
    assert!(emitted(&calls).is_empty());

    sleep(ms(301)).await;
    assert_eq!(emitted(&calls), vec!["hello world".to_string()]);
    assert!(!field.has_pending());
}

#[tokio::test(start_paused = true)]
async fn test_burst_emits_last_value_once() {
    let (field, calls) = recording_field(SearchFieldProps::default());
    field.on_change("h");
    sleep(ms(100)).await;
    field.on_change("he");
    sleep(ms(100)).await;
    field.on_change("hel");

    sleep(ms(299)).await;
    assert!(emitted(&calls).is_empty());

    sleep(ms(2)).await;
    assert_eq!(emitted(&calls), vec!["hel".to_string()]);

    sleep(ms(1000)).await;
    assert_eq!(emitted(&calls).len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_separate_bursts_emit_separately() {
    let (field, calls) = recording_field(SearchFieldProps::default());
    field.on_change("ada");
    sleep(ms(400)).await;
    field.on_change("ada lovelace");
    sleep(ms(400)).await;
    assert_eq!(
        emitted(&calls),
        vec!["ada".to_string(), "ada lovelace".to_string()]
    );
}

#[tokio::test(start_paused = true)]
async fn test_custom_throttle() {
    let (field, calls) = recording_field(SearchFieldProps {
        throttle_ms: 50,
        ..Default::default()
    });
    assert_eq!(field.throttle_period(), ms(50));
    field.on_change("x");
    sleep(ms(51)).await;
    assert_eq!(emitted(&calls), vec!["x".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_clones_share_throttle_and_callback() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let field = SearchField::default();
    let earlier = field.clone();
    let _field = field
        .throttle(ms(50))
        .on_search(move |query| sink.lock().unwrap().push(query));
    assert_eq!(earlier.throttle_period(), ms(50));

    earlier.on_change("shared");
    sleep(ms(51)).await;
    assert_eq!(emitted(&calls), vec!["shared".to_string()]);
}

// =============================================================================
// Clearing
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_clear_emits_immediately_and_cancels_pending() {
    let (field, calls) = recording_field(SearchFieldProps::default());
    field.on_change("pending");
    sleep(ms(100)).await;

    field.clear();
    assert_eq!(field.value(), "");
    assert_eq!(emitted(&calls), vec![String::new()]);
    assert!(field.take_focus_request());
    assert!(!field.take_focus_request());

    sleep(ms(1000)).await;
    assert_eq!(emitted(&calls), vec![String::new()]);
}

#[tokio::test(start_paused = true)]
async fn test_clear_button_visibility() {
    let field = SearchField::default();
    assert!(!field.show_clear_button());
    assert!(field.view().clear_button.is_none());

    field.on_change("a");
    let view = field.view();
    assert_eq!(view.clear_button.unwrap().label, "Clear search");
    assert_eq!(view.placeholder, "Search...");

    field.clear();
    assert!(!field.show_clear_button());
}

// =============================================================================
// Teardown
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_emission() {
    let (field, calls) = recording_field(SearchFieldProps::default());
    field.on_change("gone");
    drop(field);

    sleep(ms(1000)).await;
    assert!(emitted(&calls).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_pending_keeps_value() {
    let (field, calls) = recording_field(SearchFieldProps::default());
    field.on_change("kept");
    assert!(field.cancel_pending());
    assert!(!field.cancel_pending());

    sleep(ms(1000)).await;
    assert!(emitted(&calls).is_empty());
    assert_eq!(field.value(), "kept");
}

#[test]
fn test_emits_immediately_without_runtime() {
    let (field, calls) = recording_field(SearchFieldProps::default());
    field.on_change(" now ");
    assert_eq!(emitted(&calls), vec!["now".to_string()]);
}

// =============================================================================
// Keys and configuration
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_key_editing() {
    let (field, calls) = recording_field(SearchFieldProps::default());
    for c in "abc".chars() {
        assert_eq!(field.on_key(&Key::Char(c).into()), EventResult::Consumed);
    }
    assert_eq!(field.on_key(&Key::Backspace.into()), EventResult::Consumed);
    assert_eq!(field.value(), "ab");

    let ctrl_a = KeyCombo::with_modifiers(Key::Char('a'), Modifiers::ctrl());
    assert_eq!(field.on_key(&ctrl_a), EventResult::Ignored);
    assert_eq!(field.on_key(&Key::Other.into()), EventResult::Ignored);

    sleep(ms(301)).await;
    assert_eq!(emitted(&calls), vec!["ab".to_string()]);
}

#[test]
fn test_default_value_is_not_emitted() {
    let (field, calls) = recording_field(SearchFieldProps {
        default_value: "preset".into(),
        ..Default::default()
    });
    assert_eq!(field.value(), "preset");
    assert!(field.show_clear_button());
    assert!(emitted(&calls).is_empty());
}

#[test]
fn test_props_from_json() {
    let props: SearchFieldProps = serde_json::from_str("{}").unwrap();
    assert_eq!(props.throttle_ms, 300);
    assert_eq!(props.placeholder, "Search...");

    let props: SearchFieldProps = serde_json::from_str(r#"{"throttle_ms": 120}"#).unwrap();
    assert_eq!(props.throttle_ms, 120);
}

#[test]
fn test_search_bar_groups_field_and_controls() {
    let bar = SearchBar::new()
        .field(SearchField::default())
        .control("status-filter")
        .control("export");
    assert!(bar.search_field().is_some());
    assert_eq!(bar.controls(), ["status-filter", "export"]);
    assert_eq!(bar.spacing().gap, 3);
    assert!(bar.spacing().full_width);
}
