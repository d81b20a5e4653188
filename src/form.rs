use crate::constants::{
    field_selector, CONTACT_FORM_IDS, EMAIL_FIELD_NAMES, MESSAGE_FIELD_NAMES, NAME_FIELD_NAMES,
};
use crate::dom;
use crate::runtime::{self, SharedRuntime};
use landing_core::form::{FormField, FormSubmission};
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_names(field: FormField) -> &'static [&'static str] {
    match field {
        FormField::Name => &NAME_FIELD_NAMES,
        FormField::Email => &EMAIL_FIELD_NAMES,
        FormField::Message => &MESSAGE_FIELD_NAMES,
    }
}

pub fn find_form(document: &web::Document) -> Option<web::HtmlFormElement> {
    CONTACT_FORM_IDS
        .iter()
        .find_map(|id| document.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
}

pub fn read_submission(form: &web::HtmlFormElement) -> FormSubmission {
    let data = web::FormData::new_with_form(form).ok();
    let read = |field: FormField| {
        field_names(field)
            .iter()
            .filter_map(|name| data.as_ref().and_then(|d| d.get(name).as_string()))
            .find(|v| !v.is_empty())
            .unwrap_or_default()
    };
    FormSubmission::new(read(FormField::Name), read(FormField::Email), read(FormField::Message))
}

pub fn reset(document: &web::Document) {
    match find_form(document) {
        Some(form) => form.reset(),
        None => log::debug!("[form] no contact form to reset"),
    }
}

/// Write `value` into the first control backing `field`, optionally focusing it.
pub fn fill(document: &web::Document, field: FormField, value: &str, focus: bool) {
    let Some(form) = find_form(document) else {
        return;
    };
    let control = field_names(field)
        .iter()
        .find_map(|name| form.query_selector(&field_selector(name)).ok().flatten());
    let Some(control) = control else {
        log::debug!("[form] no `{}` field", field.name());
        return;
    };
    if let Some(area) = control.dyn_ref::<web::HtmlTextAreaElement>() {
        area.set_value(value);
    } else if let Some(input) = control.dyn_ref::<web::HtmlInputElement>() {
        input.set_value(value);
    }
    if focus {
        if let Some(html) = control.dyn_ref::<web::HtmlElement>() {
            _ = html.focus();
        }
    }
}

pub fn wire_submit(rt: &SharedRuntime) {
    let document = rt.borrow().document.clone();
    let Some(form) = find_form(&document) else {
        log::debug!("[form] page has no contact form");
        return;
    };
    let rt = rt.clone();
    let source = form.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let submission = read_submission(&source);
        runtime::dispatch(&rt, |page| page.submit(submission).1);
    });
}
