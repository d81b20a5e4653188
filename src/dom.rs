use landing_core::{Rect, ScrollMetrics, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach `handler` for `event` on `target` for the page's lifetime.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Every element matching `selector`. A malformed selector matches nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web::Element>().ok())
            .collect(),
        Err(e) => {
            log::debug!("[dom] bad selector `{selector}`: {:?}", e);
            Vec::new()
        }
    }
}

#[inline]
pub fn query_within(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.query_selector(selector).ok().flatten()
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        top: r.top(),
        left: r.left(),
        bottom: r.bottom(),
        right: r.right(),
    }
}

pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

pub fn scroll_metrics(window: &web::Window) -> ScrollMetrics {
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_height: viewport(window).height,
    }
}

#[inline]
pub fn page_y_offset(window: &web::Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn set_body_style(document: &web::Document, property: &str, value: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property(property, value);
    }
}

/// Viewport-relative top of the element with `id`, for navigation.
#[inline]
pub fn top_of_id(document: &web::Document, id: &str) -> Option<f64> {
    document
        .get_element_by_id(id)
        .map(|el| el.get_bounding_client_rect().top())
}
