// Host-side tests for in-page navigation.

use landing_core::nav::*;
use landing_core::{Effect, HEADER_OFFSET_PX};

#[test]
fn section_id_reads_fragment_links_only() {
    assert_eq!(section_id("#contact"), Some("contact"));
    assert_eq!(section_id(" #pricing "), Some("pricing"));
    assert_eq!(section_id("#"), None);
    assert_eq!(section_id("https://example.com/#contact"), None);
    assert_eq!(section_id("/about"), None);
}

#[test]
fn destination_clears_the_header_and_never_goes_negative() {
    assert_eq!(scroll_destination(500.0, 1200.0, 80.0), 1620.0);
    assert_eq!(scroll_destination(20.0, 0.0, 80.0), 0.0);
}

#[test]
fn header_offset_dispatch_scrolls_to_absolute_offset() {
    let nav = Navigator::new(Some(HEADER_OFFSET_PX));
    let outcome = nav.dispatch("#services", 300.0, |id| {
        assert_eq!(id, "services");
        Some(400.0)
    });
    assert_eq!(outcome, NavOutcome::Scroll { top: 620.0 });
    assert!(outcome.prevents_default());
    assert_eq!(outcome.effects().into_vec(), vec![Effect::ScrollTo { top: 620.0 }]);
}

#[test]
fn without_header_offset_sections_scroll_into_view() {
    let nav = Navigator::new(None);
    let outcome = nav.dispatch("#guides", 0.0, |_| Some(900.0));
    assert_eq!(
        outcome.effects().into_vec(),
        vec![Effect::ScrollIntoView {
            id: "guides".to_string()
        }]
    );
}

#[test]
fn missing_section_is_a_silent_no_op() {
    let nav = Navigator::new(Some(HEADER_OFFSET_PX));
    let outcome = nav.dispatch("#does-not-exist", 250.0, |_| None);
    assert_eq!(outcome, NavOutcome::MissingTarget);
    assert!(outcome.effects().is_empty());
    // the fragment jump is still suppressed
    assert!(outcome.prevents_default());
}

#[test]
fn external_links_pass_through() {
    let nav = Navigator::new(Some(HEADER_OFFSET_PX));
    let outcome = nav.dispatch("https://example.com", 0.0, |_| panic!("no lookup for external links"));
    assert_eq!(outcome, NavOutcome::Passthrough);
    assert!(!outcome.prevents_default());
    assert!(outcome.effects().is_empty());
}

#[test]
fn dispatch_section_takes_a_bare_id() {
    let nav = Navigator::new(None);
    assert_eq!(
        nav.dispatch_section("pricing", 0.0, |_| Some(10.0)),
        NavOutcome::IntoView {
            section: "pricing".to_string()
        }
    );
}
