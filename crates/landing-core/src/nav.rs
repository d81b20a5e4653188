//! In-page navigation: fragment links become offset smooth scrolls.

use crate::effects::{Effect, Effects};
use smallvec::smallvec;

#[derive(Clone, Debug, PartialEq)]
pub enum NavOutcome {
    /// Scroll to an absolute document offset.
    Scroll { top: f64 },
    /// Bring the section to the top of the viewport with no extra clearance.
    IntoView { section: String },
    /// Fragment link whose section is not on this page. Nothing happens.
    MissingTarget,
    /// Not an in-page link; the browser handles it.
    Passthrough,
}

impl NavOutcome {
    /// Whether the default browser navigation should be cancelled.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, NavOutcome::Passthrough)
    }

    pub fn effects(&self) -> Effects {
        match self {
            NavOutcome::Scroll { top } => smallvec![Effect::ScrollTo { top: *top }],
            NavOutcome::IntoView { section } => smallvec![Effect::ScrollIntoView {
                id: section.clone()
            }],
            NavOutcome::MissingTarget | NavOutcome::Passthrough => Effects::new(),
        }
    }
}

/// Section id named by a fragment href (`#contact` -> `contact`).
pub fn section_id(href: &str) -> Option<&str> {
    href.trim()
        .strip_prefix('#')
        .filter(|id| !id.is_empty())
}

/// Document offset that puts an element's top just below a fixed header.
#[inline]
pub fn scroll_destination(top_in_viewport: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    (top_in_viewport + page_y_offset - header_offset).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Navigator {
    /// Fixed header height to clear, or `None` to align sections to the top.
    header_offset: Option<f64>,
}

impl Navigator {
    pub fn new(header_offset: Option<f64>) -> Self {
        Self { header_offset }
    }

    pub fn header_offset(&self) -> Option<f64> {
        self.header_offset
    }

    /// Resolve a link activation. `top_of` returns the section's current
    /// viewport-relative top, or `None` when the page has no such section.
    pub fn dispatch(
        &self,
        href: &str,
        page_y_offset: f64,
        top_of: impl FnOnce(&str) -> Option<f64>,
    ) -> NavOutcome {
        let Some(id) = section_id(href) else {
            return NavOutcome::Passthrough;
        };
        self.dispatch_section(id, page_y_offset, top_of)
    }

    /// Like [`dispatch`](Self::dispatch) for a bare section id.
    pub fn dispatch_section(
        &self,
        id: &str,
        page_y_offset: f64,
        top_of: impl FnOnce(&str) -> Option<f64>,
    ) -> NavOutcome {
        let Some(top) = top_of(id) else {
            log::debug!("[nav] no section #{id} on this page");
            return NavOutcome::MissingTarget;
        };
        match self.header_offset {
            Some(offset) => NavOutcome::Scroll {
                top: scroll_destination(top, page_y_offset, offset),
            },
            None => NavOutcome::IntoView {
                section: id.to_string(),
            },
        }
    }
}
