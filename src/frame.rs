use crate::constants::PROGRESS_BAR_STYLE;
use crate::dom;
use crate::runtime::{self, SharedRuntime};
use landing_core::Target;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Queue one frame unless one is already pending. Scroll events that arrive
/// in between are coalesced into it.
pub fn request_frame(rt: &SharedRuntime) {
    let window = {
        let mut r = rt.borrow_mut();
        if !r.page.request_frame() {
            return;
        }
        r.window.clone()
    };
    let rt = rt.clone();
    let callback = Closure::once_into_js(move || run_frame(&rt));
    if window.request_animation_frame(callback.unchecked_ref()).is_err() {
        log::warn!("[frame] requestAnimationFrame failed");
    }
}

fn run_frame(rt: &SharedRuntime) {
    let (window, registry) = {
        let r = rt.borrow();
        (r.window.clone(), r.registry.clone())
    };
    let metrics = dom::scroll_metrics(&window);
    let viewport = dom::viewport(&window);
    let (_, effects) = {
        let reg = registry.borrow();
        rt.borrow_mut()
            .page
            .frame(&metrics, &viewport, |id| reg.get(id.0).map(dom::rect_of))
    };
    runtime::apply_all(rt, effects);
}

pub fn wire_scroll(rt: &SharedRuntime) {
    let window = rt.borrow().window.clone();
    for event in ["scroll", "resize"] {
        let rt = rt.clone();
        dom::listen(&window, event, move |_ev: web::Event| request_frame(&rt));
    }
}

/// Insert the fixed progress bar if the page asks for one and lacks it.
pub fn ensure_progress_bar(rt: &SharedRuntime) {
    let r = rt.borrow();
    let Some(Target::Id(id)) = &r.page.config().scroll.progress_bar else {
        return;
    };
    if r.document.get_element_by_id(id).is_some() {
        return;
    }
    let (Ok(bar), Some(body)) = (r.document.create_element("div"), r.document.body()) else {
        return;
    };
    bar.set_id(id);
    _ = bar.set_attribute("style", PROGRESS_BAR_STYLE);
    _ = body.append_child(&bar);
    log::debug!("[frame] created #{id}");
}
