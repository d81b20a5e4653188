use super::CompletionSink;
use crate::dom;
use crate::registry::ElementRegistry;
use gloo_timers::callback::Timeout;
use landing_core::{AnimationEngine, AnimationRequest, Target, Timeline, VisualState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn apply_state(el: &web::Element, state: &VisualState) {
    if let Some(opacity) = state.opacity {
        dom::set_style(el, "opacity", &opacity.to_string());
    }
    if let Some(transform) = state.css_transform() {
        dom::set_style(el, "transform", &transform);
    }
}

/// Runs requests as inline CSS transitions. Timelines are flattened into
/// per-step delays; scroll-scrubbed requests are left to the stylesheet.
pub struct CssEngine {
    document: web::Document,
    registry: Rc<RefCell<ElementRegistry>>,
    sink: CompletionSink,
}

impl CssEngine {
    pub fn new(
        document: web::Document,
        registry: Rc<RefCell<ElementRegistry>>,
        sink: CompletionSink,
    ) -> Self {
        Self {
            document,
            registry,
            sink,
        }
    }

    fn elements(&self, target: &Target) -> Vec<web::Element> {
        self.registry.borrow().resolve(&self.document, target)
    }

    fn run(&self, req: &AnimationRequest, offset: f32) {
        if req.scroll.as_ref().is_some_and(|s| s.scrub) {
            log::debug!("[css] scrubbed tween on {} skipped", req.targets);
            return;
        }
        let els = self.elements(&req.targets);
        let stagger = req.stagger.unwrap_or(0.0);
        let timing = req.ease.css_timing();
        for (i, el) in els.iter().enumerate() {
            if let Some(from) = &req.from {
                dom::set_style(el, "transition", "none");
                apply_state(el, from);
                // flush so the start state is committed before the transition
                _ = el.get_bounding_client_rect();
            }
            let delay = offset + req.delay + stagger * i as f32;
            let transition = format!(
                "opacity {d}s {timing} {delay}s, transform {d}s {timing} {delay}s",
                d = req.duration
            );
            dom::set_style(el, "transition", &transition);
            apply_state(el, &req.to);
        }
        if let Some(completion) = req.on_complete {
            let ms = ((offset + req.span(els.len())) * 1000.0).round().max(0.0) as u32;
            let sink = self.sink.clone();
            Timeout::new(ms, move || sink(completion)).forget();
        }
    }
}

impl AnimationEngine for CssEngine {
    fn set(&mut self, targets: &Target, state: &VisualState) {
        for el in self.elements(targets) {
            dom::set_style(&el, "transition", "none");
            apply_state(&el, state);
        }
    }

    fn tween(&mut self, request: &AnimationRequest) {
        self.run(request, 0.0);
    }

    fn sequence(&mut self, timeline: &Timeline) {
        let starts = timeline.start_times_for(|t| self.elements(t).len());
        for ((req, _), start) in timeline.steps().zip(starts) {
            self.run(req, start);
        }
    }
}
