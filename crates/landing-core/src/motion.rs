//! Declarative animation requests.
//!
//! Nothing here interpolates anything. A request names its targets, the
//! properties to animate toward and how; an [`AnimationEngine`] implementation
//! owns execution (tweening, frame timing, scroll scrubbing).

use crate::constants::BACK_OVERSHOOT;
use crate::geometry::{Rect, Viewport};
use glam::Vec2;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown ease `{0}`")]
    Ease(String),
    #[error("invalid toggle actions `{0}`")]
    ToggleActions(String),
    #[error("invalid trigger position `{0}`")]
    TriggerPosition(String),
    #[error("invalid timeline position `{0}`")]
    Position(String),
}

/// What an animation applies to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Every element matching a CSS selector.
    Selector(String),
    /// The element with this id.
    Id(String),
    /// An element registered by the front-end under a numeric handle.
    Handle(u32),
}

impl Target {
    pub fn selector(selector: impl Into<String>) -> Self {
        Target::Selector(selector.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Target::Id(id.into())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Selector(s) => f.write_str(s),
            Target::Id(id) => write!(f, "#{id}"),
            Target::Handle(h) => write!(f, "<handle {h}>"),
        }
    }
}

/// Sparse property map. Unset fields are left alone by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualState {
    pub opacity: Option<f32>,
    /// Translation in px (`x`, `y`).
    pub translate: Option<Vec2>,
    pub scale: Option<f32>,
    /// Degrees.
    pub rotation: Option<f32>,
    /// Translation as a percentage of the element's own height.
    pub y_percent: Option<f32>,
}

impl VisualState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, v: f32) -> Self {
        self.opacity = Some(v);
        self
    }

    pub fn x(mut self, v: f32) -> Self {
        let t = self.translate.unwrap_or(Vec2::ZERO);
        self.translate = Some(Vec2::new(v, t.y));
        self
    }

    pub fn y(mut self, v: f32) -> Self {
        let t = self.translate.unwrap_or(Vec2::ZERO);
        self.translate = Some(Vec2::new(t.x, v));
        self
    }

    pub fn scale(mut self, v: f32) -> Self {
        self.scale = Some(v);
        self
    }

    pub fn rotation(mut self, v: f32) -> Self {
        self.rotation = Some(v);
        self
    }

    pub fn y_percent(mut self, v: f32) -> Self {
        self.y_percent = Some(v);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The identity state for every property set in `self`: fully opaque,
    /// untranslated, unscaled, unrotated.
    pub fn settled(&self) -> Self {
        Self {
            opacity: self.opacity.map(|_| 1.0),
            translate: self.translate.map(|_| Vec2::ZERO),
            scale: self.scale.map(|_| 1.0),
            rotation: self.rotation.map(|_| 0.0),
            y_percent: self.y_percent.map(|_| 0.0),
        }
    }

    /// CSS `transform` for the transform fields, `None` when none are set.
    pub fn css_transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(t) = self.translate {
            parts.push(format!("translate({}px, {}px)", t.x, t.y));
        }
        if let Some(p) = self.y_percent {
            parts.push(format!("translateY({p}%)"));
        }
        if let Some(s) = self.scale {
            parts.push(format!("scale({s})"));
        }
        if let Some(r) = self.rotation {
            parts.push(format!("rotate({r}deg)"));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// Named easing curves, spelled the way the animation engine expects them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power2In,
    Power2Out,
    Power3Out,
    BackOut(f32),
}

impl Ease {
    pub fn back_out() -> Self {
        Ease::BackOut(BACK_OVERSHOOT)
    }

    /// Closest CSS `transition-timing-function`.
    pub fn css_timing(&self) -> String {
        match self {
            Ease::Linear => "linear".to_string(),
            Ease::Power2In => "cubic-bezier(0.55, 0.085, 0.68, 0.53)".to_string(),
            Ease::Power2Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)".to_string(),
            Ease::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)".to_string(),
            // overshoot grows roughly linearly with the back amount
            Ease::BackOut(k) => format!("cubic-bezier(0.175, 0.885, 0.32, {:.3})", 1.0 + 0.1616 * k),
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ease::Linear => f.write_str("none"),
            Ease::Power2In => f.write_str("power2.in"),
            Ease::Power2Out => f.write_str("power2.out"),
            Ease::Power3Out => f.write_str("power3.out"),
            Ease::BackOut(k) => write!(f, "back.out({k})"),
        }
    }
}

impl FromStr for Ease {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "none" | "linear" => return Ok(Ease::Linear),
            "power2.in" => return Ok(Ease::Power2In),
            "power2.out" => return Ok(Ease::Power2Out),
            "power3.out" => return Ok(Ease::Power3Out),
            "back.out" => return Ok(Ease::back_out()),
            _ => {}
        }
        s.strip_prefix("back.out(")
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|k| k.trim().parse::<f32>().ok())
            .map(Ease::BackOut)
            .ok_or_else(|| ParseError::Ease(s.to_string()))
    }
}

/// What a scroll trigger does on one of its four boundary crossings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl ToggleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToggleAction::Play => "play",
            ToggleAction::Pause => "pause",
            ToggleAction::Resume => "resume",
            ToggleAction::Reverse => "reverse",
            ToggleAction::Restart => "restart",
            ToggleAction::Reset => "reset",
            ToggleAction::Complete => "complete",
            ToggleAction::None => "none",
        }
    }
}

impl FromStr for ToggleAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            other => return Err(ParseError::ToggleActions(other.to_string())),
        })
    }
}

/// `onEnter onLeave onEnterBack onLeaveBack`, e.g. `play none none reverse`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    pub const PLAY_ONCE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::None,
    };

    pub const PLAY_REVERSE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    /// Whether scrolling back above the start undoes the animation.
    pub fn replays(&self) -> bool {
        matches!(
            self.on_leave_back,
            ToggleAction::Reverse | ToggleAction::Reset
        )
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_ONCE
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter.as_str(),
            self.on_leave.as_str(),
            self.on_enter_back.as_str(),
            self.on_leave_back.as_str()
        )
    }
}

impl FromStr for ToggleActions {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [a, b, c, d] = parts.as_slice() else {
            return Err(ParseError::ToggleActions(s.to_string()));
        };
        let bad = |_| ParseError::ToggleActions(s.to_string());
        Ok(Self {
            on_enter: a.parse().map_err(bad)?,
            on_leave: b.parse().map_err(bad)?,
            on_enter_back: c.parse().map_err(bad)?,
            on_leave_back: d.parse().map_err(bad)?,
        })
    }
}

/// `"<element edge> <viewport line>"`, e.g. `top 80%`: the trigger fires when
/// the element's top reaches 80% of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPosition {
    /// Point along the element, 0 = top, 1 = bottom.
    pub element: f64,
    /// Line in the viewport, 0 = top, 1 = bottom.
    pub viewport: f64,
}

impl TriggerPosition {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    pub const fn top_at(viewport: f64) -> Self {
        Self::new(0.0, viewport)
    }

    /// Has the element point scrolled up to (or past) the viewport line?
    pub fn crossed(&self, rect: &Rect, viewport: &Viewport) -> bool {
        rect.top + self.element * rect.height() <= self.viewport * viewport.height
    }
}

fn parse_edge(tok: &str) -> Option<f64> {
    match tok {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        pct => pct
            .strip_suffix('%')
            .and_then(|n| n.parse::<f64>().ok())
            .map(|n| n / 100.0),
    }
}

fn edge_name(v: f64) -> String {
    if v == 0.0 {
        "top".to_string()
    } else if v == 0.5 {
        "center".to_string()
    } else if v == 1.0 {
        "bottom".to_string()
    } else {
        format!("{}%", (v * 10_000.0).round() / 100.0)
    }
}

impl fmt::Display for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", edge_name(self.element), edge_name(self.viewport))
    }
}

impl FromStr for TriggerPosition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut it = s.split_whitespace();
        match (it.next().and_then(parse_edge), it.next().and_then(parse_edge), it.next()) {
            (Some(element), Some(viewport), None) => Ok(Self { element, viewport }),
            _ => Err(ParseError::TriggerPosition(s.to_string())),
        }
    }
}

/// Scroll condition attached to an engine-run animation.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTriggerSpec {
    pub trigger: Target,
    pub start: TriggerPosition,
    pub end: Option<TriggerPosition>,
    /// Bind progress to scroll position instead of elapsed time.
    pub scrub: bool,
    pub once: bool,
    pub toggle_actions: ToggleActions,
}

impl ScrollTriggerSpec {
    pub fn new(trigger: Target, start: TriggerPosition) -> Self {
        Self {
            trigger,
            start,
            end: None,
            scrub: false,
            once: false,
            toggle_actions: ToggleActions::PLAY_ONCE,
        }
    }

    pub fn replayable(mut self) -> Self {
        self.toggle_actions = ToggleActions::PLAY_REVERSE;
        self.once = false;
        self
    }

    pub fn once(mut self) -> Self {
        self.once = true;
        self.toggle_actions = ToggleActions::PLAY_ONCE;
        self
    }

    pub fn scrub_until(mut self, end: TriggerPosition) -> Self {
        self.scrub = true;
        self.end = Some(end);
        self
    }
}

/// Callback identities routed back to the page when an engine finishes a tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    ModalHidden { generation: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRequest {
    pub targets: Target,
    /// Explicit start state; `None` tweens from whatever is current.
    pub from: Option<VisualState>,
    pub to: VisualState,
    /// Seconds.
    pub duration: f32,
    pub ease: Ease,
    /// Seconds between successive targets' start times.
    pub stagger: Option<f32>,
    /// Seconds before the first target starts.
    pub delay: f32,
    /// Kill in-flight tweens of the same properties on the same targets.
    pub overwrite: bool,
    pub scroll: Option<ScrollTriggerSpec>,
    pub on_complete: Option<Completion>,
}

impl AnimationRequest {
    pub fn to(targets: Target, to: VisualState) -> Self {
        Self {
            targets,
            from: None,
            to,
            duration: 0.5,
            ease: Ease::Power2Out,
            stagger: None,
            delay: 0.0,
            overwrite: false,
            scroll: None,
            on_complete: None,
        }
    }

    pub fn from_to(targets: Target, from: VisualState, to: VisualState) -> Self {
        Self {
            from: Some(from),
            ..Self::to(targets, to)
        }
    }

    pub fn duration(mut self, secs: f32) -> Self {
        self.duration = secs;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, secs: f32) -> Self {
        self.stagger = Some(secs);
        self
    }

    pub fn delay(mut self, secs: f32) -> Self {
        self.delay = secs;
        self
    }

    pub fn overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    pub fn scroll_trigger(mut self, spec: ScrollTriggerSpec) -> Self {
        self.scroll = Some(spec);
        self
    }

    pub fn on_complete(mut self, completion: Completion) -> Self {
        self.on_complete = Some(completion);
        self
    }

    /// Seconds from the request's start until the last of `count` targets finishes.
    pub fn span(&self, count: usize) -> f32 {
        let stagger = self.stagger.unwrap_or(0.0) * count.saturating_sub(1) as f32;
        self.delay + stagger + self.duration
    }
}

/// Placement of a timeline step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Start when the timeline so far ends.
    AfterPrevious,
    /// Offset from the end of the timeline so far; `-=0.5` is `Relative(-0.5)`.
    Relative(f32),
    /// Absolute start in seconds.
    At(f32),
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || ParseError::Position(s.to_string());
        if s.is_empty() || s == ">" {
            return Ok(Position::AfterPrevious);
        }
        if let Some(v) = s.strip_prefix("-=") {
            return v.parse::<f32>().map(|v| Position::Relative(-v)).map_err(|_| bad());
        }
        if let Some(v) = s.strip_prefix("+=") {
            return v.parse::<f32>().map(Position::Relative).map_err(|_| bad());
        }
        s.parse::<f32>().map(Position::At).map_err(|_| bad())
    }
}

/// Ordered chain of requests with relative start offsets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<(AnimationRequest, Position)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, request: AnimationRequest) -> Self {
        self.then_at(request, Position::AfterPrevious)
    }

    pub fn then_at(mut self, request: AnimationRequest, position: Position) -> Self {
        self.steps.push((request, position));
        self
    }

    pub fn steps(&self) -> impl Iterator<Item = (&AnimationRequest, Position)> {
        self.steps.iter().map(|(r, p)| (r, *p))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Absolute start time of every step, in declaration order, for
    /// single-element targets. A negative offset may pull a step before the
    /// previous one ends, never before zero.
    pub fn start_times(&self) -> Vec<f32> {
        self.start_times_for(|_| 1)
    }

    /// Like [`Timeline::start_times`], with `count` giving how many elements
    /// each step's target resolves to, so staggered steps end with their
    /// last element.
    pub fn start_times_for(&self, count: impl Fn(&Target) -> usize) -> Vec<f32> {
        let mut end = 0.0_f32;
        self.steps
            .iter()
            .map(|(req, pos)| {
                let start = match *pos {
                    Position::AfterPrevious => end,
                    Position::Relative(off) => (end + off).max(0.0),
                    Position::At(t) => t.max(0.0),
                };
                end = end.max(start + req.span(count(&req.targets)));
                start
            })
            .collect()
    }

    pub fn duration(&self) -> f32 {
        self.duration_for(|_| 1)
    }

    pub fn duration_for(&self, count: impl Fn(&Target) -> usize) -> f32 {
        self.start_times_for(&count)
            .iter()
            .zip(&self.steps)
            .map(|(start, (req, _))| start + req.span(count(&req.targets)))
            .fold(0.0, f32::max)
    }
}

/// Executes requests. Implementations own interpolation and frame timing;
/// completions are reported back out-of-band (see [`Completion`]).
pub trait AnimationEngine {
    /// Apply a state immediately, without tweening.
    fn set(&mut self, targets: &Target, state: &VisualState);
    fn tween(&mut self, request: &AnimationRequest);
    fn sequence(&mut self, timeline: &Timeline);
}
