use crate::constants::{stagger_delay, CLOSE_BUTTON_ID, CLOSE_BUTTON_SELECTOR, ESCAPE_KEY};
use crate::dom;
use crate::runtime::{self, SharedRuntime};
use landing_core::modal::ClickTarget;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Escape closes the modal; every other key is ignored.
pub fn wire_keydown(rt: &SharedRuntime) {
    let window = rt.borrow().window.clone();
    let rt = rt.clone();
    dom::listen(&window, "keydown", move |ev: web::KeyboardEvent| {
        let key = ev.key();
        if key != ESCAPE_KEY {
            return;
        }
        runtime::dispatch(&rt, |page| page.on_key(&key));
    });
}

fn classify_click(rt: &SharedRuntime, target: Option<web::EventTarget>) -> ClickTarget {
    let Some(target) = target.and_then(|t| t.dyn_into::<web::Node>().ok()) else {
        return ClickTarget::Elsewhere;
    };
    let r = rt.borrow();
    let backdrop = r.page.modal.setup().backdrop.clone();
    let backdrops = r.registry.borrow().resolve(&r.document, &backdrop);
    ClickTarget::classify(
        backdrops.as_slice(),
        |el| js_sys::Object::is(el, &target),
        |el| el.contains(Some(&target)),
    )
}

pub fn wire_modal(rt: &SharedRuntime) {
    let document = rt.borrow().document.clone();
    {
        let rt = rt.clone();
        dom::listen(&document, "click", move |ev: web::MouseEvent| {
            if !rt.borrow().page.modal.is_open() {
                return;
            }
            let target = classify_click(&rt, ev.target());
            runtime::dispatch(&rt, |page| page.on_click(target));
        });
    }
    {
        let rt = rt.clone();
        dom::add_click_listener(&document, CLOSE_BUTTON_ID, move || {
            runtime::dispatch(&rt, |page| page.close_modal());
        });
    }
    for button in dom::query_all(&document, CLOSE_BUTTON_SELECTOR) {
        let rt = rt.clone();
        dom::listen(&button, "click", move |_ev: web::MouseEvent| {
            runtime::dispatch(&rt, |page| page.close_modal());
        });
    }
}

/// Enter/leave tweens for every element matched by the hover table.
pub fn wire_hovers(rt: &SharedRuntime) {
    let (document, registry, selectors) = {
        let r = rt.borrow();
        let selectors: Vec<&'static str> = r.page.choreography().hovers.iter().map(|(s, _)| *s).collect();
        (r.document.clone(), r.registry.clone(), selectors)
    };
    for (index, selector) in selectors.into_iter().enumerate() {
        for el in dom::query_all(&document, selector) {
            let handle = registry.borrow_mut().register(el.clone());
            for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
                let rt = rt.clone();
                dom::listen(&el, event, move |_ev: web::MouseEvent| {
                    let effect = rt.borrow().page.hover(index, handle, entering);
                    runtime::apply_all(&rt, effect);
                });
            }
        }
    }
}

/// Cascade CSS transitions: the n-th match waits n steps.
pub fn apply_stagger_delays(rt: &SharedRuntime) {
    let r = rt.borrow();
    for (selector, step_ms) in &r.page.choreography().stagger_delays {
        for (i, el) in dom::query_all(&r.document, selector).iter().enumerate() {
            dom::set_style(el, "transition-delay", &stagger_delay(i, *step_ms));
        }
    }
}
