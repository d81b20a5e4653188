//! Confirmation modal: Closed/Open with three equivalent dismissal triggers.
//!
//! The element is hidden only when the exit tween reports completion, so the
//! controller passes through an internal closing phase. Only one modal exists
//! per page and the scroll lock it holds is not reentrant.

use crate::constants::{
    MODAL_FADE_IN_SEC, MODAL_FADE_OUT_SEC, MODAL_ICON_DELAY_SEC, MODAL_ICON_SEC, MODAL_OVERLAP_SEC,
    MODAL_POP_IN_SEC, MODAL_SHRINK_SEC, MODAL_SHRUNK_SCALE,
};
use crate::effects::{Effect, Effects, Visibility};
use crate::motion::{AnimationRequest, Completion, Ease, Position, Target, Timeline, VisualState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Closed,
    Open,
    Closing { generation: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMotion {
    /// Shown and hidden immediately; any transition is left to CSS.
    Instant,
    /// Backdrop fades in, then the content box pops; reversed on exit.
    FadeAndPop,
    /// Content box pops with the icon spinning in just after; content shrinks on exit.
    PopWithIcon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalSetup {
    pub backdrop: Target,
    pub content: Target,
    pub icon: Target,
    pub visibility: Visibility,
    pub motion: ModalMotion,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

/// Where a document click landed relative to the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The backdrop element itself, not one of its descendants.
    Backdrop,
    Content,
    Elsewhere,
}

impl ClickTarget {
    /// Classify a click against the backdrop elements. `is_target(b)` holds
    /// when the click target is `b` itself, `contains_target(b)` when it lies
    /// anywhere inside `b`. The first backdrop that matches decides.
    pub fn classify<B>(
        backdrops: &[B],
        is_target: impl Fn(&B) -> bool,
        contains_target: impl Fn(&B) -> bool,
    ) -> ClickTarget {
        for b in backdrops {
            if is_target(b) {
                return ClickTarget::Backdrop;
            }
            if contains_target(b) {
                return ClickTarget::Content;
            }
        }
        ClickTarget::Elsewhere
    }
}

/// Page-level `overflow: hidden` flag.
#[derive(Debug, Default)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    /// Returns `false` (and changes nothing) when already locked.
    pub fn lock(&mut self) -> bool {
        if self.locked {
            log::debug!("[modal] scroll already locked");
            return false;
        }
        self.locked = true;
        true
    }

    pub fn unlock(&mut self) -> bool {
        std::mem::replace(&mut self.locked, false)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

pub struct ModalController {
    setup: ModalSetup,
    phase: Phase,
    generation: u32,
    lock: ScrollLock,
}

impl ModalController {
    pub fn new(setup: ModalSetup) -> Self {
        Self {
            setup,
            phase: Phase::Closed,
            generation: 0,
            lock: ScrollLock::default(),
        }
    }

    pub fn setup(&self) -> &ModalSetup {
        &self.setup
    }

    /// Visible state. A modal playing its exit tween is still `Open`.
    pub fn state(&self) -> ModalState {
        match self.phase {
            Phase::Closed => ModalState::Closed,
            Phase::Open | Phase::Closing { .. } => ModalState::Open,
        }
    }

    /// Open and accepting dismissal.
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.phase, Phase::Closing { .. })
    }

    pub fn scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn open(&mut self) -> Effects {
        match self.phase {
            Phase::Open => return Effects::new(),
            // the pending exit completion now refers to a stale generation
            Phase::Closing { .. } => self.generation = self.generation.wrapping_add(1),
            Phase::Closed => {}
        }
        self.phase = Phase::Open;
        log::info!("[modal] open");

        let mut out = Effects::new();
        out.push(Effect::Show {
            targets: self.setup.backdrop.clone(),
            visibility: self.setup.visibility,
        });
        if self.lock.lock() {
            out.push(Effect::LockScroll);
        }
        let content_from = VisualState::new().scale(MODAL_SHRUNK_SCALE).opacity(0.0);
        let content_to = content_from.settled();
        match self.setup.motion {
            ModalMotion::Instant => {}
            ModalMotion::FadeAndPop => {
                let fade = AnimationRequest::from_to(
                    self.setup.backdrop.clone(),
                    VisualState::new().opacity(0.0),
                    VisualState::new().opacity(1.0),
                )
                .duration(MODAL_FADE_IN_SEC)
                .ease(Ease::Power2Out);
                let pop = AnimationRequest::from_to(self.setup.content.clone(), content_from, content_to)
                    .duration(MODAL_POP_IN_SEC)
                    .ease(Ease::back_out());
                out.push(Effect::Sequence(
                    Timeline::new()
                        .then(fade)
                        .then_at(pop, Position::Relative(-MODAL_OVERLAP_SEC)),
                ));
            }
            ModalMotion::PopWithIcon => {
                out.push(Effect::Animate(
                    AnimationRequest::from_to(self.setup.content.clone(), content_from, content_to)
                        .duration(MODAL_POP_IN_SEC)
                        .ease(Ease::back_out()),
                ));
                let icon_from = VisualState::new().scale(0.0).rotation(-180.0);
                out.push(Effect::Animate(
                    AnimationRequest::from_to(self.setup.icon.clone(), icon_from, icon_from.settled())
                        .duration(MODAL_ICON_SEC)
                        .ease(Ease::back_out())
                        .delay(MODAL_ICON_DELAY_SEC),
                ));
            }
        }
        out
    }

    /// Idempotent: a no-op unless the modal is open.
    pub fn close(&mut self) -> Effects {
        if self.phase != Phase::Open {
            return Effects::new();
        }
        if self.setup.motion == ModalMotion::Instant {
            return self.finish_close();
        }

        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        self.phase = Phase::Closing { generation };
        let done = Completion::ModalHidden { generation };
        let shrink = VisualState::new().scale(MODAL_SHRUNK_SCALE);

        let mut out = Effects::new();
        match self.setup.motion {
            ModalMotion::FadeAndPop => {
                let content = AnimationRequest::to(self.setup.content.clone(), shrink)
                    .duration(MODAL_SHRINK_SEC)
                    .ease(Ease::Power2In);
                let backdrop =
                    AnimationRequest::to(self.setup.backdrop.clone(), VisualState::new().opacity(0.0))
                        .duration(MODAL_FADE_OUT_SEC)
                        .ease(Ease::Power2In)
                        .on_complete(done);
                out.push(Effect::Sequence(
                    Timeline::new()
                        .then(content)
                        .then_at(backdrop, Position::Relative(-MODAL_OVERLAP_SEC)),
                ));
            }
            ModalMotion::PopWithIcon => {
                out.push(Effect::Animate(
                    AnimationRequest::to(self.setup.content.clone(), shrink.opacity(0.0))
                        .duration(MODAL_SHRINK_SEC)
                        .ease(Ease::Power2In)
                        .on_complete(done),
                ));
            }
            ModalMotion::Instant => {}
        }
        out
    }

    pub fn dismiss(&mut self, trigger: DismissTrigger) -> Effects {
        if self.is_open() {
            log::info!("[modal] dismissed by {:?}", trigger);
        }
        self.close()
    }

    pub fn on_click(&mut self, target: ClickTarget) -> Effects {
        match target {
            ClickTarget::Backdrop => self.dismiss(DismissTrigger::Backdrop),
            ClickTarget::Content | ClickTarget::Elsewhere => Effects::new(),
        }
    }

    pub fn on_key(&mut self, key: &str) -> Effects {
        if key == "Escape" {
            self.dismiss(DismissTrigger::Escape)
        } else {
            Effects::new()
        }
    }

    pub fn on_complete(&mut self, completion: Completion) -> Effects {
        match (completion, self.phase) {
            (Completion::ModalHidden { generation }, Phase::Closing { generation: current })
                if generation == current =>
            {
                self.finish_close()
            }
            _ => {
                log::debug!("[modal] ignoring stale {:?}", completion);
                Effects::new()
            }
        }
    }

    fn finish_close(&mut self) -> Effects {
        self.phase = Phase::Closed;
        log::info!("[modal] closed");
        let mut out = Effects::new();
        out.push(Effect::Hide {
            targets: self.setup.backdrop.clone(),
            visibility: self.setup.visibility,
        });
        if self.lock.unlock() {
            out.push(Effect::UnlockScroll);
        }
        out
    }
}
