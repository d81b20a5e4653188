use crate::constants::{
    BUY_NOW_SELECTOR, NAV_LINK_SELECTOR, PACKAGE_ATTR, PACKAGE_SELECTOR, PRODUCT_ATTR,
    SCROLL_BUTTON_SELECTOR, SCROLL_TO_ATTR, SECTION_BUTTONS,
};
use crate::dom;
use crate::runtime::{self, SharedRuntime};
use web_sys as web;

fn follow_link(rt: &SharedRuntime, link: &web::Element, ev: &web::MouseEvent) {
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let outcome = {
        let r = rt.borrow();
        let page_y = dom::page_y_offset(&r.window);
        r.page
            .navigate(&href, page_y, |id| dom::top_of_id(&r.document, id))
    };
    if outcome.prevents_default() {
        ev.prevent_default();
    }
    runtime::apply_all(rt, outcome.effects());
}

/// Jump to a section by id; unknown ids do nothing.
pub fn to_section(rt: &SharedRuntime, section: &str) {
    let effects = {
        let r = rt.borrow();
        let page_y = dom::page_y_offset(&r.window);
        r.page
            .navigate_to_section(section, page_y, |id| dom::top_of_id(&r.document, id))
            .effects()
    };
    runtime::apply_all(rt, effects);
}

pub fn buy_now(rt: &SharedRuntime, product: &str) {
    let (window, document) = {
        let r = rt.borrow();
        (r.window.clone(), r.document.clone())
    };
    let page_y = dom::page_y_offset(&window);
    runtime::dispatch(rt, |page| {
        page.buy_now(product, page_y, |id| dom::top_of_id(&document, id))
    });
}

pub fn wire(rt: &SharedRuntime) {
    let document = rt.borrow().document.clone();

    for link in dom::query_all(&document, NAV_LINK_SELECTOR) {
        let rt = rt.clone();
        let source = link.clone();
        dom::listen(&link, "click", move |ev: web::MouseEvent| follow_link(&rt, &source, &ev));
    }

    for button in dom::query_all(&document, SCROLL_BUTTON_SELECTOR) {
        let Some(section) = button.get_attribute(SCROLL_TO_ATTR) else {
            continue;
        };
        let rt = rt.clone();
        dom::listen(&button, "click", move |_ev: web::MouseEvent| to_section(&rt, &section));
    }

    for (button_id, section) in SECTION_BUTTONS {
        let rt = rt.clone();
        dom::add_click_listener(&document, button_id, move || to_section(&rt, section));
    }

    for button in dom::query_all(&document, BUY_NOW_SELECTOR) {
        let Some(product) = button.get_attribute(PRODUCT_ATTR) else {
            continue;
        };
        let rt = rt.clone();
        dom::listen(&button, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            buy_now(&rt, &product);
        });
    }

    for button in dom::query_all(&document, PACKAGE_SELECTOR) {
        let Some(package) = button.get_attribute(PACKAGE_ATTR) else {
            continue;
        };
        let rt = rt.clone();
        dom::listen(&button, "click", move |_ev: web::MouseEvent| {
            runtime::dispatch(&rt, |page| page.package_inquiry(&package));
        });
    }
}
