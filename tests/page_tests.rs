// Host-side tests for the assembled page: profiles, choreography and the
// handlers the front-end calls.

use landing_core::choreography::{Animates, Choreography, RevealSpec};
use landing_core::form::{FormSubmission, SubmitOutcome};
use landing_core::modal::{ClickTarget, ModalState};
use landing_core::reveal::{RevealFeed, RevealMode, RevealState, RevealStyle, RevealZone, TargetId};
use landing_core::*;

fn page(profile: SiteProfile) -> LandingPage {
    LandingPage::new(SiteConfig::for_profile(profile))
}

fn valid() -> FormSubmission {
    FormSubmission::new("Jo", "jo@example.com", "Hello")
}

fn completion_in(effects: &Effects) -> Option<Completion> {
    effects.iter().find_map(|e| match e {
        Effect::Animate(req) => req.on_complete,
        Effect::Sequence(tl) => tl.steps().find_map(|(req, _)| req.on_complete),
        _ => None,
    })
}

#[test]
fn profiles_parse_from_body_attribute() {
    assert_eq!("gift-shop".parse::<SiteProfile>(), Ok(SiteProfile::GiftShop));
    assert_eq!(" Salon ".parse::<SiteProfile>(), Ok(SiteProfile::Salon));
    assert!("bakery".parse::<SiteProfile>().is_err());
    assert_eq!(SiteProfile::from_attr(Some("salon")), SiteProfile::Salon);
    assert_eq!(SiteProfile::from_attr(Some("bakery")), SiteProfile::Agency);
    assert_eq!(SiteProfile::from_attr(None), SiteProfile::Agency);
    for p in SiteProfile::ALL {
        assert_eq!(p.to_string().parse::<SiteProfile>(), Ok(p));
    }
}

#[test]
fn profile_configs_differ_where_the_pages_differ() {
    let agency = SiteConfig::for_profile(SiteProfile::Agency);
    assert_eq!(agency.header_offset, Some(HEADER_OFFSET_PX));
    assert!(!agency.validation.require_email_format);
    assert_eq!(agency.reveal_feed, RevealFeed::Poll);

    let shop = SiteConfig::for_profile(SiteProfile::GiftShop);
    assert_eq!(shop.header_offset, None);
    assert!(shop.validation.require_email_format);
    assert_eq!(shop.reveal_feed, RevealFeed::Intersection);

    let salon = SiteConfig::for_profile(SiteProfile::Salon);
    assert_eq!(salon.submit_delay_ms, Some(SUBMIT_DELAY_MS));
    assert!(salon.scroll.progress_bar.is_some());

    assert_eq!(SiteConfig::default(), agency);
}

#[test]
fn boot_plays_intro_then_schedules_settle() {
    let page = page(SiteProfile::Agency);
    let effects = page.boot();
    assert!(effects.iter().any(|e| matches!(e, Effect::Sequence(tl) if tl.len() == 3)));
    assert_eq!(
        effects.last(),
        Some(&Effect::Schedule {
            after_ms: SETTLE_DELAY_MS,
            event: Deferred::Settle
        })
    );
    // settle needs layout; the deferred hook itself does nothing
    let mut page = page;
    assert!(page.on_deferred(Deferred::Settle).is_empty());
}

#[test]
fn every_profile_has_reveals() {
    for profile in SiteProfile::ALL {
        let choreo = Choreography::for_profile(profile);
        assert!(!choreo.reveals.is_empty(), "{profile} has no reveals");
    }
}

#[test]
fn gift_shop_reveals_are_one_shot_class_toggles() {
    let choreo = Choreography::for_profile(SiteProfile::GiftShop);
    let spec = &choreo.reveals[0];
    assert!(spec.each);
    assert_eq!(spec.mode, RevealMode::Once);
    assert_eq!(spec.style, RevealStyle::Class("visible"));
    assert_eq!(
        spec.zone,
        RevealZone::Ratio {
            threshold: 0.1,
            bottom_margin: 50.0
        }
    );
    assert_eq!(choreo.stagger_delays.len(), 3);
}

#[test]
fn bind_fills_in_handles_and_default_feed() {
    let spec = RevealSpec::each(".card", VisualState::new().opacity(0.0).y(30.0));
    assert_eq!(spec.animates, Animates::Trigger);
    let target = spec.bind(TargetId(4), Target::Handle(4), RevealFeed::Poll);
    assert_eq!(target.feed, RevealFeed::Poll);
    assert_eq!(target.revealed.opacity, Some(1.0));

    let lazy = RevealSpec::each("img[src]", VisualState::new())
        .class("loaded")
        .feed(RevealFeed::Intersection);
    assert_eq!(lazy.bind(TargetId(5), Target::Handle(5), RevealFeed::Poll).feed, RevealFeed::Intersection);
}

#[test]
fn settle_then_frames_drive_reveals() {
    let mut page = page(SiteProfile::Agency);
    let spec = RevealSpec::single(".services-grid", VisualState::new().opacity(0.0).y(50.0));
    let initial = page.watch(spec.bind(TargetId(0), Target::Handle(0), RevealFeed::Poll));
    assert_eq!(initial.len(), 1);

    let vp = Viewport::new(1280.0, 800.0);
    let on_screen = Rect::new(100.0, 0.0, 600.0, 400.0);
    let (changes, effects) = page.settle(&vp, |_| Some(on_screen));
    assert_eq!(changes.len(), 1);
    assert!(matches!(effects[0], Effect::Animate(_)));
    assert_eq!(page.reveals.state(TargetId(0)), Some(RevealState::Revealed));

    // scrolled away: the replayable group hides again
    assert!(page.request_frame());
    assert!(!page.request_frame());
    let metrics = ScrollMetrics {
        scroll_y: 2000.0,
        document_height: 5000.0,
        viewport_height: 800.0,
    };
    let (changes, _) = page.frame(&metrics, &vp, |_| Some(Rect::new(-1500.0, 0.0, 600.0, 400.0)));
    assert_eq!(changes.len(), 0, "above the line still counts as crossed");
    assert!(page.request_frame(), "frame clears the gate");
}

#[test]
fn accepted_submission_opens_modal_and_clears_form() {
    let mut page = page(SiteProfile::Agency);
    let (outcome, effects) = page.submit(valid());
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(page.modal.state(), ModalState::Open);
    assert!(effects.contains(&Effect::LockScroll));
    assert!(effects.contains(&Effect::ResetForm));
    assert_eq!(page.form.draft(), &FormSubmission::default());
}

#[test]
fn rejected_submission_leaves_modal_closed() {
    let mut page = page(SiteProfile::GiftShop);
    let (outcome, effects) = page.submit(FormSubmission::new("Jo", "not-an-email", "Hello"));
    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(page.modal.state(), ModalState::Closed);
    assert_eq!(
        effects.into_vec(),
        vec![Effect::Alert("Please enter a valid email address".to_string())]
    );
    assert_eq!(page.form.draft().name, "Jo");
}

#[test]
fn salon_opens_modal_after_the_delay() {
    let mut page = page(SiteProfile::Salon);
    let (outcome, effects) = page.submit(valid());
    assert_eq!(outcome, SubmitOutcome::AcceptedPending);
    assert_eq!(page.modal.state(), ModalState::Closed);
    assert!(matches!(
        effects[0],
        Effect::Schedule {
            after_ms: 500,
            event: Deferred::FinishSubmission
        }
    ));

    let effects = page.on_deferred(Deferred::FinishSubmission);
    assert_eq!(page.modal.state(), ModalState::Open);
    assert!(effects.contains(&Effect::ResetForm));
}

#[test]
fn modal_round_trip_through_page_handlers() {
    let mut page = page(SiteProfile::Salon);
    page.on_deferred(Deferred::FinishSubmission);
    assert!(page.on_click(ClickTarget::Content).is_empty());

    let exit = page.on_key("Escape");
    assert!(page.close_modal().is_empty());
    let done = completion_in(&exit).expect("salon exit reports completion");
    let finish = page.on_complete(done);
    assert!(finish.contains(&Effect::UnlockScroll));
    assert_eq!(page.modal.state(), ModalState::Closed);
}

#[test]
fn navigation_to_missing_section_changes_nothing() {
    let page = page(SiteProfile::Agency);
    let outcome = page.navigate("#nowhere", 120.0, |_| None);
    assert!(outcome.effects().is_empty());
}

#[test]
fn buy_now_scrolls_to_contact_and_prefills() {
    let mut page = page(SiteProfile::Salon);
    let effects = page.buy_now("Silk Wrap", 0.0, |id| (id == "contact").then_some(1400.0));
    assert_eq!(
        effects[0],
        Effect::ScrollIntoView {
            id: "contact".to_string()
        }
    );
    assert!(matches!(&effects[1], Effect::FillField { value, .. } if value.contains("Silk Wrap")));
}

#[test]
fn package_inquiry_quotes_the_contact_address() {
    let page = LandingPage::new(
        SiteConfig::for_profile(SiteProfile::GiftShop).with_contact_email("hello@shop.test"),
    );
    let effects = page.package_inquiry("Starter Bundle");
    assert_eq!(
        effects.into_vec(),
        vec![Effect::Alert(
            "Thank you for your interest in the Starter Bundle! Contact us at hello@shop.test to complete your purchase."
                .to_string()
        )]
    );
}

#[test]
fn gift_shop_quotes_its_address_without_page_override() {
    let effects = page(SiteProfile::GiftShop).package_inquiry("Starter Bundle");
    assert!(matches!(&effects[0], Effect::Alert(text) if text.contains(SHOP_CONTACT_EMAIL)));
    // other profiles fall back to the generic notice
    let effects = page(SiteProfile::Agency).package_inquiry("Starter Bundle");
    assert!(matches!(&effects[0], Effect::Alert(text) if !text.contains('@')));
}

#[test]
fn hover_requests_use_the_profile_table() {
    let page = page(SiteProfile::Agency);
    match page.hover(0, 9, true) {
        Some(Effect::Animate(req)) => {
            assert_eq!(req.targets, Target::Handle(9));
            assert_eq!(req.to.scale, Some(HOVER_BUTTON_SCALE));
            assert!(req.overwrite);
        }
        other => panic!("expected hover tween, got {:?}", other),
    }
    match page.hover(0, 9, false) {
        Some(Effect::Animate(req)) => assert_eq!(req.to.scale, Some(1.0)),
        other => panic!("expected hover tween, got {:?}", other),
    }
    assert!(page.hover(99, 9, true).is_none());
}
