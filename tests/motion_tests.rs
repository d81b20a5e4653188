// Host-side tests for animation requests, timelines and engine dispatch.
// A recording engine stands in for the browser animation library.

use glam::Vec2;
use landing_core::*;

#[derive(Debug, PartialEq)]
enum Call {
    Set(Target, VisualState),
    Tween(AnimationRequest),
    Sequence(usize),
}

#[derive(Default)]
struct RecordingEngine {
    calls: Vec<Call>,
}

impl AnimationEngine for RecordingEngine {
    fn set(&mut self, targets: &Target, state: &VisualState) {
        self.calls.push(Call::Set(targets.clone(), *state));
    }

    fn tween(&mut self, request: &AnimationRequest) {
        self.calls.push(Call::Tween(request.clone()));
    }

    fn sequence(&mut self, timeline: &Timeline) {
        self.calls.push(Call::Sequence(timeline.len()));
    }
}

fn step(sel: &str, secs: f32) -> AnimationRequest {
    AnimationRequest::to(Target::selector(sel), VisualState::new().opacity(1.0)).duration(secs)
}

#[test]
fn negative_offsets_overlap_the_previous_step() {
    let tl = Timeline::new()
        .then(step(".hero-title", 1.0))
        .then_at(step(".hero-subtitle", 0.8), Position::Relative(-0.5))
        .then_at(step(".btn-accent", 0.6), Position::Relative(-0.3));
    let starts = tl.start_times();
    assert_eq!(starts.len(), 3);
    assert!((starts[0] - 0.0).abs() < 1e-6);
    assert!((starts[1] - 0.5).abs() < 1e-6);
    assert!((starts[2] - 1.0).abs() < 1e-6);
    assert!((tl.duration() - 1.6).abs() < 1e-6);
}

#[test]
fn offsets_never_start_before_zero() {
    let tl = Timeline::new().then_at(step("a", 0.3), Position::Relative(-1.0));
    assert_eq!(tl.start_times(), vec![0.0]);
}

#[test]
fn absolute_positions_do_not_shift_later_relative_steps_back() {
    let tl = Timeline::new()
        .then(step("a", 1.0))
        .then_at(step("b", 0.2), Position::At(0.1))
        .then(step("c", 0.5));
    // "c" follows the furthest end so far (1.0), not "b"'s end
    assert_eq!(tl.start_times(), vec![0.0, 0.1, 1.0]);
}

#[test]
fn staggered_steps_end_with_their_last_element() {
    let tl = Timeline::new()
        .then(step(".card", 0.5).stagger(0.2))
        .then(step(".footer", 0.4));
    // one element each: the stagger never kicks in
    assert_eq!(tl.start_times(), vec![0.0, 0.5]);

    let cards = |t: &Target| if *t == Target::selector(".card") { 4 } else { 1 };
    let starts = tl.start_times_for(cards);
    assert!((starts[1] - 1.1).abs() < 1e-6);
    assert!((tl.duration_for(cards) - 1.5).abs() < 1e-6);
}

#[test]
fn positions_parse_like_the_engine_spells_them() {
    assert_eq!("-=0.5".parse::<Position>(), Ok(Position::Relative(-0.5)));
    assert_eq!("+=0.25".parse::<Position>(), Ok(Position::Relative(0.25)));
    assert_eq!("1.5".parse::<Position>(), Ok(Position::At(1.5)));
    assert_eq!(">".parse::<Position>(), Ok(Position::AfterPrevious));
    assert!("-=soon".parse::<Position>().is_err());
}

#[test]
fn eases_round_trip_through_engine_names() {
    for ease in [Ease::Linear, Ease::Power2In, Ease::Power2Out, Ease::Power3Out, Ease::back_out()] {
        assert_eq!(ease.to_string().parse::<Ease>(), Ok(ease));
    }
    assert_eq!(Ease::back_out().to_string(), "back.out(1.7)");
    assert_eq!("back.out".parse::<Ease>(), Ok(Ease::BackOut(1.7)));
    assert!("elastic".parse::<Ease>().is_err());
}

#[test]
fn trigger_positions_parse_and_display() {
    let pos: TriggerPosition = "top 80%".parse().unwrap();
    assert_eq!(pos, TriggerPosition::top_at(0.8));
    assert_eq!(pos.to_string(), "top 80%");
    assert_eq!(TriggerPosition::new(1.0, 0.0).to_string(), "bottom top");
    assert!("top".parse::<TriggerPosition>().is_err());
    assert!("top 80% extra".parse::<TriggerPosition>().is_err());
}

#[test]
fn trigger_position_crossing() {
    let vp = Viewport::new(1200.0, 1000.0);
    let pos = TriggerPosition::top_at(0.8);
    assert!(pos.crossed(&Rect::new(800.0, 0.0, 10.0, 10.0), &vp));
    assert!(!pos.crossed(&Rect::new(801.0, 0.0, 10.0, 10.0), &vp));
}

#[test]
fn toggle_actions_parse_and_report_replay() {
    let actions: ToggleActions = "play none none reverse".parse().unwrap();
    assert_eq!(actions, ToggleActions::PLAY_REVERSE);
    assert!(actions.replays());
    assert!(!ToggleActions::PLAY_ONCE.replays());
    assert_eq!(ToggleActions::PLAY_ONCE.to_string(), "play none none none");
    assert!("play none".parse::<ToggleActions>().is_err());
    assert!("play none none bounce".parse::<ToggleActions>().is_err());
}

#[test]
fn span_covers_stagger_and_delay() {
    let req = step(".card", 0.8).stagger(0.2).delay(0.1);
    assert!((req.span(4) - (0.1 + 0.6 + 0.8)).abs() < 1e-6);
    assert!((req.span(0) - 0.9).abs() < 1e-6);
}

#[test]
fn settled_state_resets_only_set_fields() {
    let state = VisualState::new().opacity(0.0).y(30.0).scale(0.7);
    let settled = state.settled();
    assert_eq!(settled.opacity, Some(1.0));
    assert_eq!(settled.translate, Some(Vec2::ZERO));
    assert_eq!(settled.scale, Some(1.0));
    assert_eq!(settled.rotation, None);
    assert!(VisualState::new().is_empty());
}

#[test]
fn css_transform_lists_set_fields() {
    assert_eq!(VisualState::new().opacity(0.5).css_transform(), None);
    assert_eq!(
        VisualState::new().y(30.0).scale(0.9).css_transform().as_deref(),
        Some("translate(0px, 30px) scale(0.9)")
    );
    assert_eq!(
        VisualState::new().y_percent(-50.0).css_transform().as_deref(),
        Some("translateY(-50%)")
    );
}

#[test]
fn drive_forwards_animation_effects_only() {
    let mut engine = RecordingEngine::default();
    let effects = [
        Effect::Set {
            targets: Target::selector(".hero-title"),
            state: VisualState::new().opacity(0.0),
        },
        Effect::Animate(step(".card", 0.5)),
        Effect::Sequence(Timeline::new().then(step("a", 1.0)).then(step("b", 1.0))),
        Effect::LockScroll,
        Effect::Alert("hi".to_string()),
    ];
    let handled: Vec<bool> = effects.iter().map(|e| e.drive(&mut engine)).collect();
    assert_eq!(handled, vec![true, true, true, false, false]);
    assert_eq!(
        engine.calls,
        vec![
            Call::Set(Target::selector(".hero-title"), VisualState::new().opacity(0.0)),
            Call::Tween(step(".card", 0.5)),
            Call::Sequence(2),
        ]
    );
}

#[test]
fn scroll_trigger_builders() {
    let spec = ScrollTriggerSpec::new(Target::selector(".hero"), TriggerPosition::top_at(0.0))
        .scrub_until(TriggerPosition::new(1.0, 0.0));
    assert!(spec.scrub);
    assert_eq!(spec.end, Some(TriggerPosition::new(1.0, 0.0)));
    let once = ScrollTriggerSpec::new(Target::selector(".grid"), TriggerPosition::top_at(0.8)).once();
    assert!(once.once);
    assert!(!once.toggle_actions.replays());
    assert!(once.replayable().toggle_actions.replays());
}
