//! Per-frame scroll effects: progress bar, parallax and the navbar's
//! "scrolled" class, plus the single-flight gate shared with reveal polling.

use crate::constants::NAVBAR_SCROLLED_AT_PX;
use crate::effects::{Effect, Effects};
use crate::motion::Target;

/// Coalesces bursts of scroll/resize events into at most one queued
/// recomputation per animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame; `false` when
    /// one is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Call at the top of the frame callback, before reading layout.
    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// `scroll_y / (document_height - viewport_height)`, clamped to [0, 1].
    /// Pages that cannot scroll report 0.
    pub fn progress(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_y / range).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ParallaxMode {
    /// Translate `target` by `scroll_y * factor` every frame.
    Translate { target: Target, factor: f64 },
    /// Bound to scroll by the animation engine; nothing to do per frame.
    Scrubbed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSetup {
    pub navbar: Option<Target>,
    pub parallax: ParallaxMode,
    pub progress_bar: Option<Target>,
}

pub struct ScrollEffects {
    pub gate: FrameGate,
    setup: ScrollSetup,
    navbar_scrolled: bool,
}

impl ScrollEffects {
    pub fn new(setup: ScrollSetup) -> Self {
        Self {
            gate: FrameGate::default(),
            setup,
            navbar_scrolled: false,
        }
    }

    pub fn setup(&self) -> &ScrollSetup {
        &self.setup
    }

    pub fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    pub fn frame(&mut self, metrics: &ScrollMetrics) -> Effects {
        let mut out = Effects::new();

        if let Some(navbar) = &self.setup.navbar {
            let scrolled = metrics.scroll_y > NAVBAR_SCROLLED_AT_PX;
            if scrolled != self.navbar_scrolled {
                self.navbar_scrolled = scrolled;
                let targets = navbar.clone();
                out.push(if scrolled {
                    Effect::AddClass { targets, class: "scrolled" }
                } else {
                    Effect::RemoveClass { targets, class: "scrolled" }
                });
            }
        }

        if let ParallaxMode::Translate { target, factor } = &self.setup.parallax {
            out.push(Effect::SetStyle {
                targets: target.clone(),
                property: "transform",
                value: format!("translateY({}px)", metrics.scroll_y * factor),
            });
        }

        if let Some(bar) = &self.setup.progress_bar {
            out.push(Effect::SetStyle {
                targets: bar.clone(),
                property: "width",
                value: format!("{}%", metrics.progress() * 100.0),
            });
        }

        out
    }
}
