use crate::constants::{HOVER_BUTTON_SCALE, HOVER_CARD_LIFT_PX, HOVER_DURATION_SEC};
use crate::motion::{AnimationRequest, Ease, Target, VisualState};

/// Enter/leave tween pair for a pointer hover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverEffect {
    pub enter: VisualState,
    pub leave: VisualState,
    pub duration: f32,
    pub ease: Ease,
}

impl HoverEffect {
    pub fn grow() -> Self {
        Self::between(VisualState::new().scale(HOVER_BUTTON_SCALE))
    }

    pub fn lift(px: f32) -> Self {
        Self::between(VisualState::new().y(px))
    }

    pub fn card() -> Self {
        Self::lift(HOVER_CARD_LIFT_PX)
    }

    fn between(enter: VisualState) -> Self {
        Self {
            enter,
            leave: enter.settled(),
            duration: HOVER_DURATION_SEC,
            ease: Ease::Power2Out,
        }
    }

    pub fn request(&self, target: Target, entering: bool) -> AnimationRequest {
        let to = if entering { self.enter } else { self.leave };
        AnimationRequest::to(target, to)
            .duration(self.duration)
            .ease(self.ease)
            .overwrite()
    }
}
