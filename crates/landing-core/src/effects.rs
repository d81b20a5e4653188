//! Side effects requested by the page's state machines.
//!
//! Handlers in this crate never touch the DOM. They return [`Effects`] and the
//! front-end applies them in order.

use crate::form::FormField;
use crate::motion::{AnimationEngine, AnimationRequest, Target, Timeline, VisualState};
use smallvec::SmallVec;

/// How an element is shown and hidden.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Inline `display` value while shown; `none` while hidden.
    Display(&'static str),
    /// Class present while shown.
    Class(&'static str),
}

/// Work deferred to a timer and fed back through `LandingPage::on_deferred`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// Initial in-viewport reveal check.
    Settle,
    /// End of the simulated submission latency.
    FinishSubmission,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Set { targets: Target, state: VisualState },
    Animate(AnimationRequest),
    Sequence(Timeline),
    AddClass { targets: Target, class: &'static str },
    RemoveClass { targets: Target, class: &'static str },
    SetStyle { targets: Target, property: &'static str, value: String },
    Show { targets: Target, visibility: Visibility },
    Hide { targets: Target, visibility: Visibility },
    LockScroll,
    UnlockScroll,
    /// Smooth scroll to an absolute document offset.
    ScrollTo { top: f64 },
    /// Smooth `scrollIntoView` aligned to the block start.
    ScrollIntoView { id: String },
    /// Blocking user notification.
    Alert(String),
    ResetForm,
    FillField { field: FormField, value: String, focus: bool },
    Schedule { after_ms: u32, event: Deferred },
}

pub type Effects = SmallVec<[Effect; 4]>;

impl Effect {
    /// Forward animation effects to `engine`. Returns `false` for effects the
    /// engine does not handle.
    pub fn drive(&self, engine: &mut dyn AnimationEngine) -> bool {
        match self {
            Effect::Set { targets, state } => engine.set(targets, state),
            Effect::Animate(request) => engine.tween(request),
            Effect::Sequence(timeline) => engine.sequence(timeline),
            _ => return false,
        }
        true
    }
}
