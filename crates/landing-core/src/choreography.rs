//! Declarative animation tables for each site profile: the hero intro, which
//! elements reveal on scroll and how, hover pairs and CSS stagger steps.
//!
//! Selectors are resolved by the front-end; see [`RevealSpec::bind`].

use crate::constants::{
    FOOTER_START_LINE, HEADER_SHIFT_PX, HOVER_CARD_LIFT_TALL_PX, PARALLAX_Y_PERCENT,
    REVEAL_BOTTOM_MARGIN_PX, REVEAL_DURATION_SEC, REVEAL_RATIO_THRESHOLD, REVEAL_SHIFT_PX,
    REVEAL_START_LINE, SECTION_HEADER_START_LINE,
};
use crate::effects::{Effect, Effects};
use crate::hover::HoverEffect;
use crate::motion::{
    AnimationRequest, Ease, Position, ScrollTriggerSpec, Target, Timeline, TriggerPosition,
    VisualState,
};
use crate::profile::SiteProfile;
use crate::reveal::{RevealFeed, RevealMode, RevealStyle, RevealTarget, RevealZone, TargetId};

/// What a reveal flips, relative to its watched trigger element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animates {
    /// The trigger element itself.
    Trigger,
    /// All matches of a selector, anywhere on the page.
    Group(&'static str),
    /// First match of a selector inside the trigger element.
    Child(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealSpec {
    pub trigger: &'static str,
    /// Watch every match of `trigger` rather than the first one.
    pub each: bool,
    pub animates: Animates,
    pub initial: VisualState,
    pub zone: RevealZone,
    pub mode: RevealMode,
    pub style: RevealStyle,
    /// Overrides the profile's default feed.
    pub feed: Option<RevealFeed>,
}

impl RevealSpec {
    /// Cards in `group` reveal together when `trigger` reaches the start line.
    pub fn group(trigger: &'static str, group: &'static str, initial: VisualState) -> Self {
        Self {
            trigger,
            each: false,
            animates: Animates::Group(group),
            initial,
            zone: RevealZone::StartLine(TriggerPosition::top_at(REVEAL_START_LINE)),
            mode: RevealMode::Toggle,
            style: RevealStyle::Tween {
                duration: REVEAL_DURATION_SEC,
                ease: Ease::Power3Out,
                stagger: None,
            },
            feed: None,
        }
    }

    /// Every match of `trigger` reveals on its own.
    pub fn each(trigger: &'static str, initial: VisualState) -> Self {
        Self {
            each: true,
            animates: Animates::Trigger,
            ..Self::group(trigger, trigger, initial)
        }
    }

    /// The first match of `trigger` reveals itself.
    pub fn single(trigger: &'static str, initial: VisualState) -> Self {
        Self {
            animates: Animates::Trigger,
            ..Self::group(trigger, trigger, initial)
        }
    }

    pub fn child(mut self, selector: &'static str) -> Self {
        self.animates = Animates::Child(selector);
        self
    }

    pub fn stagger(mut self, secs: f32) -> Self {
        if let RevealStyle::Tween { stagger, .. } = &mut self.style {
            *stagger = Some(secs);
        }
        self
    }

    pub fn duration(mut self, secs: f32) -> Self {
        if let RevealStyle::Tween { duration, .. } = &mut self.style {
            *duration = secs;
        }
        self
    }

    pub fn ease(mut self, e: Ease) -> Self {
        if let RevealStyle::Tween { ease, .. } = &mut self.style {
            *ease = e;
        }
        self
    }

    pub fn start(mut self, viewport_line: f64) -> Self {
        self.zone = RevealZone::StartLine(TriggerPosition::top_at(viewport_line));
        self
    }

    pub fn ratio(mut self, threshold: f64, bottom_margin: f64) -> Self {
        self.zone = RevealZone::Ratio {
            threshold,
            bottom_margin,
        };
        self
    }

    pub fn once(mut self) -> Self {
        self.mode = RevealMode::Once;
        self
    }

    /// Reveal by adding `class`; the stylesheet owns both states.
    pub fn class(mut self, class: &'static str) -> Self {
        self.style = RevealStyle::Class(class);
        self.initial = VisualState::new();
        self
    }

    pub fn feed(mut self, feed: RevealFeed) -> Self {
        self.feed = Some(feed);
        self
    }

    pub fn bind(&self, id: TargetId, animates: Target, default_feed: RevealFeed) -> RevealTarget {
        RevealTarget {
            id,
            animates,
            initial: self.initial,
            revealed: self.initial.settled(),
            zone: self.zone,
            mode: self.mode,
            style: self.style,
            feed: self.feed.unwrap_or(default_feed),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Choreography {
    /// Applied once at load: initial states, the hero timeline, scrubbed parallax.
    pub intro: Effects,
    pub reveals: Vec<RevealSpec>,
    pub hovers: Vec<(&'static str, HoverEffect)>,
    /// `(selector, step_ms)`: the n-th match gets `transition-delay: n * step_ms`.
    pub stagger_delays: Vec<(&'static str, u32)>,
}

impl Choreography {
    pub fn for_profile(profile: SiteProfile) -> Self {
        match profile {
            SiteProfile::Agency => agency(),
            SiteProfile::GiftShop => gift_shop(),
            SiteProfile::Salon => salon(),
        }
    }
}

fn rise(px: f32) -> VisualState {
    VisualState::new().opacity(0.0).y(px)
}

fn slide(px: f32) -> VisualState {
    VisualState::new().opacity(0.0).x(px)
}

/// Title, subtitle, call to action; each step overlaps the previous one.
fn hero_timeline(button: &'static str) -> Timeline {
    let shown = rise(HEADER_SHIFT_PX).settled();
    let step = |sel: &'static str, secs: f32| {
        AnimationRequest::to(Target::selector(sel), shown)
            .duration(secs)
            .ease(Ease::Power3Out)
    };
    Timeline::new()
        .then(step(".hero-title", 1.0))
        .then_at(step(".hero-subtitle", 0.8), Position::Relative(-0.5))
        .then_at(step(button, 0.6), Position::Relative(-0.3))
}

fn scrubbed_parallax(background: &'static str, section: &'static str, start: TriggerPosition) -> Effect {
    Effect::Animate(
        AnimationRequest::to(
            Target::selector(background),
            VisualState::new().y_percent(PARALLAX_Y_PERCENT),
        )
        .ease(Ease::Linear)
        .scroll_trigger(
            ScrollTriggerSpec::new(Target::selector(section), start)
                .scrub_until(TriggerPosition::new(1.0, 0.0)),
        ),
    )
}

fn agency() -> Choreography {
    let mut intro = Effects::new();
    for sel in [".hero-title", ".hero-subtitle", ".btn-accent"] {
        intro.push(Effect::Set {
            targets: Target::selector(sel),
            state: rise(HEADER_SHIFT_PX),
        });
    }
    intro.push(Effect::Sequence(hero_timeline(".btn-accent")));
    intro.push(scrubbed_parallax(".hero-bg", ".hero", TriggerPosition::top_at(0.0)));

    let reveals = vec![
        RevealSpec::group(".services-grid", ".service-card", rise(REVEAL_SHIFT_PX)).stagger(0.2),
        RevealSpec::group(".projects-grid", ".project-card", rise(REVEAL_SHIFT_PX)).stagger(0.15),
        RevealSpec::group(
            ".pricing-grid",
            ".pricing-card",
            VisualState::new().opacity(0.0).scale(0.9),
        )
        .stagger(0.2)
        .ease(Ease::back_out()),
        RevealSpec::group(".contact-content", ".contact-info", slide(-REVEAL_SHIFT_PX)),
        RevealSpec::group(".contact-content", ".contact-form", slide(REVEAL_SHIFT_PX)),
        RevealSpec::group(".offer-content", ".offer-video", slide(-REVEAL_SHIFT_PX)),
        RevealSpec::group(".offer-content", ".offer-text", slide(REVEAL_SHIFT_PX)),
        RevealSpec::single(".footer", rise(HEADER_SHIFT_PX)).start(FOOTER_START_LINE),
        RevealSpec::each("section", rise(HEADER_SHIFT_PX))
            .child(".section-header")
            .start(SECTION_HEADER_START_LINE)
            .once(),
        RevealSpec::group(".contact-item", ".contact-item", rise(REVEAL_SHIFT_PX))
            .stagger(0.1)
            .once(),
        RevealSpec::group(".footer-section", ".footer-section", rise(REVEAL_SHIFT_PX))
            .stagger(0.2)
            .once(),
    ];

    Choreography {
        intro,
        reveals,
        hovers: vec![
            (".btn-primary, .btn-accent, .btn-secondary", HoverEffect::grow()),
            (".service-card, .project-card, .pricing-card", HoverEffect::card()),
        ],
        stagger_delays: Vec::new(),
    }
}

fn gift_shop() -> Choreography {
    Choreography {
        intro: Effects::new(),
        reveals: vec![RevealSpec::each(".fade-in", VisualState::new())
            .class("visible")
            .ratio(REVEAL_RATIO_THRESHOLD, REVEAL_BOTTOM_MARGIN_PX)
            .once()],
        hovers: Vec::new(),
        stagger_delays: vec![(".guide-card", 150), (".benefit-item", 200), (".pricing-card", 250)],
    }
}

fn salon() -> Choreography {
    let mut intro = Effects::new();
    intro.push(Effect::Sequence(hero_timeline(".btn-hero")));
    intro.push(scrubbed_parallax(
        ".hero-background",
        ".hero-section",
        TriggerPosition::top_at(1.0),
    ));

    let reveals = vec![
        RevealSpec::each(".section-title", rise(HEADER_SHIFT_PX)),
        RevealSpec::each(".section-subtitle", rise(HEADER_SHIFT_PX)),
        RevealSpec::group(".benefits-grid", ".benefit-card", rise(HEADER_SHIFT_PX))
            .duration(0.6)
            .stagger(0.2),
        RevealSpec::group(".why-choose-features", ".feature-item", rise(HEADER_SHIFT_PX))
            .duration(0.6)
            .stagger(0.1),
        RevealSpec::single(".feature-img", slide(REVEAL_SHIFT_PX)),
        RevealSpec::group(".products-grid", ".product-card", rise(HEADER_SHIFT_PX))
            .duration(0.6)
            .stagger(0.15),
        RevealSpec::single(".contact-form-container", rise(HEADER_SHIFT_PX)),
        RevealSpec::group(".footer-section", ".footer-section", VisualState::new().opacity(0.0))
            .start(FOOTER_START_LINE),
        // lazy images: mark loaded on first sight
        RevealSpec::each("img[src]", VisualState::new())
            .class("loaded")
            .ratio(0.0, 0.0)
            .once()
            .feed(RevealFeed::Intersection),
    ];

    Choreography {
        intro,
        reveals,
        hovers: vec![
            (".btn-hero, .btn-secondary", HoverEffect::grow()),
            (".benefit-card, .product-card", HoverEffect::lift(HOVER_CARD_LIFT_TALL_PX)),
        ],
        stagger_delays: Vec::new(),
    }
}
