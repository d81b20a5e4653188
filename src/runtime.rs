use crate::dom;
use crate::engine::{self, CompletionSink};
use crate::form;
use crate::registry::ElementRegistry;
use gloo_timers::callback::Timeout;
use landing_core::{
    AnimationEngine, Completion, Deferred, Effect, Effects, LandingPage, SiteConfig, Target,
    Visibility,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

pub struct Runtime {
    pub page: LandingPage,
    pub engine: Box<dyn AnimationEngine>,
    pub registry: Rc<RefCell<ElementRegistry>>,
    pub window: web::Window,
    pub document: web::Document,
    /// One per distinct intersection zone; finished targets are unobserved on all.
    pub intersections: Vec<web::IntersectionObserver>,
}

pub type SharedRuntime = Rc<RefCell<Runtime>>;

pub fn build(window: web::Window, document: web::Document, config: SiteConfig) -> SharedRuntime {
    Rc::new_cyclic(|weak: &Weak<RefCell<Runtime>>| {
        let registry = Rc::new(RefCell::new(ElementRegistry::new()));
        let weak = weak.clone();
        let sink: CompletionSink = Rc::new(move |completion: Completion| {
            if let Some(rt) = weak.upgrade() {
                complete(&rt, completion);
            }
        });
        let engine = engine::select(&window, document.clone(), registry.clone(), sink);
        RefCell::new(Runtime {
            page: LandingPage::new(config),
            engine,
            registry,
            window,
            document,
            intersections: Vec::new(),
        })
    })
}

/// Run a page handler and apply what it asks for.
pub fn dispatch(rt: &SharedRuntime, handler: impl FnOnce(&mut LandingPage) -> Effects) {
    let effects = handler(&mut rt.borrow_mut().page);
    apply_all(rt, effects);
}

pub fn apply_all(rt: &SharedRuntime, effects: impl IntoIterator<Item = Effect>) {
    for effect in effects {
        apply(rt, effect);
    }
}

fn complete(rt: &SharedRuntime, completion: Completion) {
    if rt.try_borrow_mut().is_err() {
        // fired while an effect was being applied; retry on the next task
        let rt = rt.clone();
        Timeout::new(0, move || complete(&rt, completion)).forget();
        return;
    }
    dispatch(rt, |page| page.on_complete(completion));
}

pub fn on_deferred(rt: &SharedRuntime, event: Deferred) {
    match event {
        Deferred::Settle => crate::observer::settle(rt),
        Deferred::FinishSubmission => dispatch(rt, |page| page.on_deferred(event)),
    }
}

fn apply(rt: &SharedRuntime, effect: Effect) {
    {
        let mut guard = rt.borrow_mut();
        if effect.drive(guard.engine.as_mut()) {
            return;
        }
    }
    if let Effect::Schedule { after_ms, event } = effect {
        let rt = rt.clone();
        Timeout::new(after_ms, move || on_deferred(&rt, event)).forget();
        return;
    }

    let r = rt.borrow();
    let resolve = |targets: &Target| r.registry.borrow().resolve(&r.document, targets);
    match effect {
        Effect::AddClass { targets, class } => {
            for el in resolve(&targets) {
                _ = el.class_list().add_1(class);
            }
        }
        Effect::RemoveClass { targets, class } => {
            for el in resolve(&targets) {
                _ = el.class_list().remove_1(class);
            }
        }
        Effect::SetStyle {
            targets,
            property,
            value,
        } => {
            for el in resolve(&targets) {
                dom::set_style(&el, property, &value);
            }
        }
        Effect::Show {
            targets,
            visibility,
        } => {
            for el in resolve(&targets) {
                match visibility {
                    Visibility::Display(display) => dom::set_style(&el, "display", display),
                    Visibility::Class(class) => {
                        _ = el.class_list().add_1(class);
                    }
                }
            }
        }
        Effect::Hide {
            targets,
            visibility,
        } => {
            for el in resolve(&targets) {
                match visibility {
                    Visibility::Display(_) => dom::set_style(&el, "display", "none"),
                    Visibility::Class(class) => {
                        _ = el.class_list().remove_1(class);
                    }
                }
            }
        }
        Effect::LockScroll => dom::set_body_style(&r.document, "overflow", "hidden"),
        Effect::UnlockScroll => dom::set_body_style(&r.document, "overflow", "auto"),
        Effect::ScrollTo { top } => {
            let opts = web::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            r.window.scroll_to_with_scroll_to_options(&opts);
        }
        Effect::ScrollIntoView { id } => {
            if let Some(el) = r.document.get_element_by_id(&id) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        }
        Effect::Alert(message) => {
            _ = r.window.alert_with_message(&message);
        }
        Effect::ResetForm => form::reset(&r.document),
        Effect::FillField {
            field,
            value,
            focus,
        } => form::fill(&r.document, field, &value, focus),
        Effect::Set { .. }
        | Effect::Animate(_)
        | Effect::Sequence(_)
        | Effect::Schedule { .. } => {}
    }
}
