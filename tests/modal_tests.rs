// Host-side tests for the confirmation modal state machine.

use landing_core::modal::*;
use landing_core::{Completion, Effect, Effects, Target, Visibility};

fn setup(motion: ModalMotion) -> ModalSetup {
    ModalSetup {
        backdrop: Target::id("successModal"),
        content: Target::selector(".modal-content"),
        icon: Target::selector(".modal-icon"),
        visibility: Visibility::Display("flex"),
        motion,
    }
}

fn completion_in(effects: &Effects) -> Option<Completion> {
    effects.iter().find_map(|e| match e {
        Effect::Animate(req) => req.on_complete,
        Effect::Sequence(tl) => tl.steps().find_map(|(req, _)| req.on_complete),
        _ => None,
    })
}

fn has_hide(effects: &Effects) -> bool {
    effects.iter().any(|e| matches!(e, Effect::Hide { .. }))
}

#[test]
fn open_shows_locks_and_animates() {
    let mut modal = ModalController::new(setup(ModalMotion::FadeAndPop));
    let effects = modal.open();
    assert_eq!(modal.state(), ModalState::Open);
    assert!(modal.scroll_locked());
    assert!(matches!(effects[0], Effect::Show { .. }));
    assert_eq!(effects[1], Effect::LockScroll);
    match &effects[2] {
        Effect::Sequence(tl) => assert_eq!(tl.len(), 2),
        other => panic!("expected Sequence, got {:?}", other),
    }
}

#[test]
fn opening_twice_is_a_no_op() {
    let mut modal = ModalController::new(setup(ModalMotion::FadeAndPop));
    modal.open();
    assert!(modal.open().is_empty());
}

#[test]
fn icon_follows_the_container() {
    let mut modal = ModalController::new(setup(ModalMotion::PopWithIcon));
    let effects = modal.open();
    let tweens: Vec<_> = effects
        .iter()
        .filter_map(|e| match e {
            Effect::Animate(req) => Some(req),
            _ => None,
        })
        .collect();
    assert_eq!(tweens.len(), 2);
    let icon = tweens[1];
    assert_eq!(icon.targets, Target::selector(".modal-icon"));
    assert!(icon.delay > 0.0);
    let from = icon.from.expect("icon starts from an explicit state");
    assert_eq!(from.scale, Some(0.0));
    assert_eq!(from.rotation, Some(-180.0));
    assert_eq!(icon.to.rotation, Some(0.0));
}

#[test]
fn hide_waits_for_the_exit_tween() {
    let mut modal = ModalController::new(setup(ModalMotion::FadeAndPop));
    modal.open();

    let exit = modal.close();
    assert!(!has_hide(&exit));
    assert!(modal.is_closing());
    assert_eq!(modal.state(), ModalState::Open);
    assert!(modal.scroll_locked());

    let done = completion_in(&exit).expect("exit tween reports completion");
    let finish = modal.on_complete(done);
    assert!(has_hide(&finish));
    assert!(finish.contains(&Effect::UnlockScroll));
    assert_eq!(modal.state(), ModalState::Closed);
    assert!(!modal.scroll_locked());
}

#[test]
fn instant_modal_closes_at_once() {
    let mut setup = setup(ModalMotion::Instant);
    setup.visibility = Visibility::Class("visible");
    let mut modal = ModalController::new(setup);
    modal.open();
    let effects = modal.close();
    assert_eq!(
        effects[0],
        Effect::Hide {
            targets: Target::id("successModal"),
            visibility: Visibility::Class("visible")
        }
    );
    assert_eq!(modal.state(), ModalState::Closed);
}

#[test]
fn backdrop_click_closes_but_content_click_does_not() {
    let mut modal = ModalController::new(setup(ModalMotion::Instant));
    modal.open();
    assert!(modal.on_click(ClickTarget::Content).is_empty());
    assert!(modal.on_click(ClickTarget::Elsewhere).is_empty());
    assert_eq!(modal.state(), ModalState::Open);

    assert!(has_hide(&modal.on_click(ClickTarget::Backdrop)));
    assert_eq!(modal.state(), ModalState::Closed);
}

#[test]
fn clicks_are_classified_by_identity_not_containment() {
    // 1 is the backdrop; 2 and 3 sit inside it, 9 is elsewhere on the page
    let parent = |node: u32| match node {
        2 => Some(1),
        3 => Some(2),
        _ => None,
    };
    let classify = |clicked: u32| {
        ClickTarget::classify(
            &[1_u32][..],
            |b| *b == clicked,
            |b| std::iter::successors(Some(clicked), |n| parent(*n)).any(|n| n == *b),
        )
    };
    assert_eq!(classify(1), ClickTarget::Backdrop);
    assert_eq!(classify(2), ClickTarget::Content);
    assert_eq!(classify(3), ClickTarget::Content);
    assert_eq!(classify(9), ClickTarget::Elsewhere);

    let none: [u32; 0] = [];
    assert_eq!(ClickTarget::classify(&none[..], |_| true, |_| true), ClickTarget::Elsewhere);
}

#[test]
fn escape_while_closed_is_a_no_op() {
    let mut modal = ModalController::new(setup(ModalMotion::FadeAndPop));
    assert!(modal.on_key("Escape").is_empty());
    assert_eq!(modal.state(), ModalState::Closed);
}

#[test]
fn repeated_escape_closes_exactly_once() {
    let mut modal = ModalController::new(setup(ModalMotion::PopWithIcon));
    modal.open();

    let first = modal.on_key("Escape");
    let done = completion_in(&first).expect("exit tween reports completion");
    for _ in 0..3 {
        assert!(modal.on_key("Escape").is_empty());
    }
    assert!(has_hide(&modal.on_complete(done)));
    assert!(modal.on_key("Escape").is_empty());
    assert_eq!(modal.state(), ModalState::Closed);
}

#[test]
fn other_keys_are_ignored() {
    let mut modal = ModalController::new(setup(ModalMotion::Instant));
    modal.open();
    assert!(modal.on_key("Enter").is_empty());
    assert!(modal.on_key("escape").is_empty());
    assert!(modal.is_open());
}

#[test]
fn close_is_idempotent_while_closing() {
    let mut modal = ModalController::new(setup(ModalMotion::FadeAndPop));
    modal.open();
    let exit = modal.dismiss(DismissTrigger::CloseButton);
    assert!(!exit.is_empty());
    assert!(modal.dismiss(DismissTrigger::Backdrop).is_empty());
    assert!(modal.close().is_empty());
    let done = completion_in(&exit).unwrap();
    assert!(has_hide(&modal.on_complete(done)));
    assert!(modal.on_complete(done).is_empty());
}

#[test]
fn reopening_during_exit_ignores_the_stale_completion() {
    let mut modal = ModalController::new(setup(ModalMotion::FadeAndPop));
    modal.open();
    let exit = modal.close();
    let stale = completion_in(&exit).unwrap();

    let reopened = modal.open();
    assert!(!reopened.contains(&Effect::LockScroll), "lock is still held");
    assert!(modal.is_open());

    assert!(modal.on_complete(stale).is_empty());
    assert!(modal.is_open());
    assert!(modal.scroll_locked());
}

#[test]
fn scroll_lock_is_not_reentrant() {
    let mut lock = ScrollLock::default();
    assert!(lock.lock());
    assert!(!lock.lock());
    assert!(lock.unlock());
    assert!(!lock.unlock());
    assert!(!lock.is_locked());
}
