//! Animation back-ends. GSAP when the page loaded it, CSS transitions otherwise.

mod css;
mod gsap;

use crate::registry::ElementRegistry;
use landing_core::{AnimationEngine, Completion};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use css::CssEngine;
pub use gsap::GsapEngine;

/// Receives completions from tweens that asked for one.
pub type CompletionSink = Rc<dyn Fn(Completion)>;

pub fn select(
    window: &web::Window,
    document: web::Document,
    registry: Rc<RefCell<ElementRegistry>>,
    sink: CompletionSink,
) -> Box<dyn AnimationEngine> {
    if gsap::is_available(window) {
        gsap::register_scroll_trigger(window);
        log::info!("[engine] using gsap");
        Box::new(GsapEngine::new(document, registry, sink))
    } else {
        log::warn!("[engine] gsap not loaded, falling back to css transitions");
        Box::new(CssEngine::new(document, registry, sink))
    }
}
