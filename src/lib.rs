#![cfg(target_arch = "wasm32")]
use crate::constants::{CONTACT_EMAIL_ATTR, PROFILE_ATTR};
use crate::runtime::SharedRuntime;
use anyhow::anyhow;
use landing_core::{SiteConfig, SiteProfile};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod engine;
mod events;
mod form;
mod frame;
mod nav;
mod observer;
mod registry;
mod runtime;

thread_local! {
    static RUNTIME: RefCell<Option<SharedRuntime>> = const { RefCell::new(None) };
}

fn with_runtime(f: impl FnOnce(&SharedRuntime)) {
    let rt = RUNTIME.with(|slot| slot.borrow().clone());
    match rt {
        Some(rt) => f(&rt),
        None => log::warn!("[page] called before init"),
    }
}

fn site_config(document: &web::Document) -> SiteConfig {
    let body = document.body();
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
    let profile = SiteProfile::from_attr(attr(PROFILE_ATTR).as_deref());
    let config = SiteConfig::for_profile(profile);
    match attr(CONTACT_EMAIL_ATTR) {
        Some(email) => config.with_contact_email(email),
        None => config,
    }
}

/// Resolves once the DOM is parsed.
async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let target = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, _reject: js_sys::Function| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window.document().ok_or_else(|| anyhow!("no document"))?;
    dom_ready(&document).await?;

    let config = site_config(&document);
    log::info!("[page] profile={}", config.profile);
    let rt = runtime::build(window, document, config);
    RUNTIME.with(|slot| *slot.borrow_mut() = Some(rt.clone()));

    let initial = observer::register_targets(&rt);
    runtime::apply_all(&rt, initial);
    observer::wire_intersections(&rt)?;

    frame::ensure_progress_bar(&rt);
    frame::wire_scroll(&rt);
    nav::wire(&rt);
    form::wire_submit(&rt);
    events::wire_modal(&rt);
    events::wire_keydown(&rt);
    events::wire_hovers(&rt);
    events::apply_stagger_delays(&rt);

    runtime::dispatch(&rt, |page| page.boot());
    // paint scroll-bound state for the restored scroll position
    frame::request_frame(&rt);
    Ok(())
}

/// Inline `onclick="closeModal()"` hook.
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    with_runtime(|rt| runtime::dispatch(rt, |page| page.close_modal()));
}

/// Inline `onclick="scrollToSection('pricing')"` hook.
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(section_id: &str) {
    with_runtime(|rt| nav::to_section(rt, section_id));
}

/// Inline `onclick="handleBuyNow('Gift Guide')"` hook.
#[wasm_bindgen(js_name = handleBuyNow)]
pub fn handle_buy_now(product_name: &str) {
    with_runtime(|rt| nav::buy_now(rt, product_name));
}
