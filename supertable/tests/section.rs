use std::time::Duration;

use supertable::event::{EventResult, Key, KeyCombo, Modifiers};
use supertable::section::{
    COLLAPSE_GRACE, Fade, Section, SectionPhase, SectionProps, SectionTarget, SimpleSection,
    SimpleSectionProps,
};
use supertable::table::TableSnapshot;
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================================
// Initial state
// =============================================================================

#[test]
fn test_initial_phase_from_props() {
    let expanded = Section::new(SectionProps {
        collapsible: true,
        default_collapsed: false,
    });
    assert_eq!(expanded.phase(), SectionPhase::Expanded);
    assert!(expanded.is_content_mounted());

    let collapsed = Section::new(SectionProps {
        collapsible: true,
        default_collapsed: true,
    });
    assert_eq!(collapsed.phase(), SectionPhase::Collapsed);
    assert!(!collapsed.is_content_mounted());
    assert!(collapsed.content_view().is_none());
}

#[test]
fn test_sections_get_distinct_ids() {
    let a = Section::collapsible();
    let b = Section::collapsible();
    assert_ne!(a.id(), b.id());
    assert_ne!(a.content_id(), b.content_id());
}

#[test]
fn test_toggle_is_noop_when_fixed() {
    let section = Section::new(SectionProps::default());
    assert!(!section.toggle());
    assert_eq!(section.phase(), SectionPhase::Expanded);
    assert!(!section.is_dirty());
}

// =============================================================================
// Collapse cycle
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_collapse_unmounts_after_grace() {
    let section = Section::collapsible();
    assert!(section.toggle());

    assert_eq!(section.phase(), SectionPhase::Collapsing);
    assert!(section.is_collapsed());
    assert!(section.is_content_mounted());
    assert_eq!(section.content_view().unwrap().animation, Fade::Out);

    sleep(COLLAPSE_GRACE - ms(1)).await;
    assert!(section.is_content_mounted());

    sleep(ms(2)).await;
    assert_eq!(section.phase(), SectionPhase::Collapsed);
    assert!(section.content_view().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_reverse_during_grace_keeps_content_mounted() {
    let section = Section::collapsible();
    section.toggle();
    sleep(ms(100)).await;
    assert!(section.is_content_mounted());

    section.toggle();
    assert_eq!(section.phase(), SectionPhase::Expanded);

    for _ in 0..10 {
        sleep(ms(50)).await;
        assert_eq!(section.phase(), SectionPhase::Expanded);
        assert!(section.is_content_mounted());
    }
    assert_eq!(section.content_view().unwrap().animation, Fade::In);
}

#[tokio::test(start_paused = true)]
async fn test_expand_is_immediate() {
    let section = Section::new(SectionProps {
        collapsible: true,
        default_collapsed: true,
    });
    section.toggle();
    assert_eq!(section.phase(), SectionPhase::Expanded);
    assert!(section.is_content_mounted());
}

#[tokio::test(start_paused = true)]
async fn test_rapid_toggles_settle_on_last_request() {
    let section = Section::collapsible();
    // collapse, expand, collapse within the grace period
    section.toggle();
    sleep(ms(50)).await;
    section.toggle();
    sleep(ms(50)).await;
    section.toggle();

    // The first collapse's timer would have fired at 200ms
    sleep(ms(120)).await;
    assert_eq!(section.phase(), SectionPhase::Collapsing);

    sleep(ms(100)).await;
    assert_eq!(section.phase(), SectionPhase::Collapsed);
}

#[tokio::test(start_paused = true)]
async fn test_custom_grace_period() {
    let section = Section::collapsible().with_grace_period(ms(500));
    section.toggle();
    sleep(ms(300)).await;
    assert!(section.is_content_mounted());
    sleep(ms(201)).await;
    assert!(!section.is_content_mounted());
}

#[tokio::test(start_paused = true)]
async fn test_grace_period_shared_with_earlier_clones() {
    let section = Section::collapsible();
    let earlier = section.clone();
    let section = section.with_grace_period(ms(500));
    assert_eq!(earlier.grace_period(), ms(500));

    earlier.toggle();
    sleep(ms(300)).await;
    assert!(section.is_content_mounted());
    sleep(ms(201)).await;
    assert!(!earlier.is_content_mounted());
}

#[test]
fn test_collapse_without_runtime_is_immediate() {
    let section = Section::collapsible();
    section.toggle();
    assert_eq!(section.phase(), SectionPhase::Collapsed);
}

// =============================================================================
// Activation
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_enter_and_space_toggle() {
    let section = Section::collapsible();

    assert_eq!(section.on_key(&Key::Enter.into()), EventResult::Consumed);
    assert!(section.is_collapsed());

    assert_eq!(section.on_key(&Key::Char(' ').into()), EventResult::Consumed);
    assert!(!section.is_collapsed());

    assert_eq!(section.on_key(&Key::Char('x').into()), EventResult::Ignored);
    let ctrl_enter = KeyCombo::with_modifiers(Key::Enter, Modifiers::ctrl());
    assert_eq!(section.on_key(&ctrl_enter), EventResult::Ignored);
    assert!(!section.is_collapsed());
}

#[test]
fn test_keys_ignored_when_fixed() {
    let section = Section::new(SectionProps::default());
    assert_eq!(section.on_key(&Key::Enter.into()), EventResult::Ignored);
}

#[tokio::test(start_paused = true)]
async fn test_trigger_click_toggles_once() {
    let section = Section::collapsible();

    // Host dispatches to the trigger first and bubbles only ignored clicks
    let result = section.dispatch_click(SectionTarget::Trigger);
    if !result.is_handled() {
        section.dispatch_click(SectionTarget::Header);
    }
    assert_eq!(result, EventResult::Consumed);
    assert!(section.is_collapsed());

    assert_eq!(
        section.dispatch_click(SectionTarget::Header),
        EventResult::Consumed
    );
    assert!(!section.is_collapsed());
}

#[test]
fn test_clicks_ignored_when_fixed() {
    let section = Section::new(SectionProps::default());
    assert_eq!(
        section.dispatch_click(SectionTarget::Trigger),
        EventResult::Ignored
    );
    assert_eq!(
        section.dispatch_click(SectionTarget::Header),
        EventResult::Ignored
    );
}

// =============================================================================
// Views
// =============================================================================

#[test]
fn test_header_view_for_collapsible() {
    let section = Section::collapsible();
    let table = TableSnapshot {
        header_count: 5,
        ..Default::default()
    };
    let header = section.header_view(None, &table);

    assert_eq!(header.col_span, 5);
    assert!(header.clickable);
    assert_eq!(header.role, Some("button"));
    assert_eq!(header.tab_index, Some(0));
    assert_eq!(header.aria_expanded, Some(true));
    assert_eq!(header.aria_controls, Some(section.content_id()));
    assert_eq!(section.content_view().unwrap().id, section.content_id());
}

#[test]
fn test_header_view_for_fixed_section() {
    let section = Section::new(SectionProps::default());
    let header = section.header_view(Some(2), &TableSnapshot::default());

    assert_eq!(header.col_span, 2);
    assert!(!header.clickable);
    assert_eq!(header.role, None);
    assert_eq!(header.tab_index, None);
    assert_eq!(header.aria_expanded, None);
    assert_eq!(header.aria_controls, None);
    assert!(section.trigger_view().is_none());
}

#[test]
fn test_trigger_view_follows_state() {
    let section = Section::new(SectionProps {
        collapsible: true,
        default_collapsed: true,
    });
    let trigger = section.trigger_view().unwrap();
    assert_eq!(trigger.label, "Expand section");
    assert!(!trigger.aria_expanded);
    assert_eq!(trigger.rotation, 0);
    assert_eq!(trigger.tab_index, -1);

    section.toggle();
    let trigger = section.trigger_view().unwrap();
    assert_eq!(trigger.label, "Collapse section");
    assert_eq!(trigger.rotation, 90);
}

#[test]
fn test_simple_section_render() {
    let section = SimpleSection::new(SimpleSectionProps {
        title: "Archived".into(),
        collapsible: true,
        default_collapsed: true,
        col_span: None,
    });
    let table = TableSnapshot {
        header_count: 3,
        ..Default::default()
    };
    let view = section.render(&table);

    assert_eq!(view.title, "Archived");
    assert_eq!(view.header.col_span, 3);
    assert_eq!(view.header.aria_expanded, Some(false));
    assert!(view.trigger.is_some());
    assert!(view.content.is_none());
}

#[test]
fn test_section_props_from_json() {
    let props: SimpleSectionProps =
        serde_json::from_str(r#"{"title": "Team", "collapsible": true, "col_span": 2}"#).unwrap();
    assert_eq!(props.title, "Team");
    assert!(props.collapsible);
    assert!(!props.default_collapsed);
    assert_eq!(props.col_span, Some(2));
}
