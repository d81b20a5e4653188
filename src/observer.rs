//! Binds reveal specs to elements and feeds the reveal observer.

use crate::constants::root_margin;
use crate::dom;
use crate::runtime::{self, SharedRuntime};
use anyhow::anyhow;
use landing_core::choreography::Animates;
use landing_core::reveal::{IntersectionEntry, RevealChange, RevealFeed, RevealZone, TargetId};
use landing_core::{Effects, Target};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Register an element per reveal target and return their load-time states.
pub fn register_targets(rt: &SharedRuntime) -> Effects {
    let (specs, feed, document, registry) = {
        let r = rt.borrow();
        (
            r.page.reveal_specs().to_vec(),
            r.page.config().reveal_feed,
            r.document.clone(),
            r.registry.clone(),
        )
    };
    let mut out = Effects::new();
    for spec in &specs {
        let mut triggers = dom::query_all(&document, spec.trigger);
        if !spec.each {
            triggers.truncate(1);
        }
        for el in triggers {
            let animates_el = match spec.animates {
                Animates::Child(sel) => match dom::query_within(&el, sel) {
                    Some(child) => Some(child),
                    None => continue,
                },
                _ => None,
            };
            let mut reg = registry.borrow_mut();
            let id = reg.register(el);
            let animates = match spec.animates {
                Animates::Trigger => Target::Handle(id),
                Animates::Group(sel) => Target::selector(sel),
                Animates::Child(_) => match animates_el {
                    Some(child) => Target::Handle(reg.register(child)),
                    None => continue,
                },
            };
            drop(reg);
            out.extend(rt.borrow_mut().page.watch(spec.bind(TargetId(id), animates, feed)));
        }
    }
    log::info!("[reveal] watching {} targets", rt.borrow().page.reveals.len());
    out
}

fn unobserve_finished(rt: &SharedRuntime, changes: &[RevealChange]) {
    let r = rt.borrow();
    let registry = r.registry.borrow();
    for change in changes.iter().filter(|c| c.finished) {
        if let Some(el) = registry.get(change.id.0) {
            for observer in &r.intersections {
                observer.unobserve(el);
            }
        }
    }
}

/// One-shot check for targets already on screen.
pub fn settle(rt: &SharedRuntime) {
    let (window, registry) = {
        let r = rt.borrow();
        (r.window.clone(), r.registry.clone())
    };
    let viewport = dom::viewport(&window);
    let (changes, effects) = {
        let reg = registry.borrow();
        rt.borrow_mut()
            .page
            .settle(&viewport, |id| reg.get(id.0).map(dom::rect_of))
    };
    log::debug!("[reveal] settle revealed {}", changes.len());
    unobserve_finished(rt, &changes);
    runtime::apply_all(rt, effects);
}

/// Observer options for a zone: `(threshold, bottom margin px)`.
fn zone_options(zone: &RevealZone) -> (f64, f64) {
    match *zone {
        RevealZone::Ratio {
            threshold,
            bottom_margin,
        } => (threshold, bottom_margin),
        RevealZone::StartLine(_) => (0.0, 0.0),
    }
}

fn on_entries(rt: &SharedRuntime, entries: &js_sys::Array) {
    let batch: Vec<IntersectionEntry> = {
        let r = rt.borrow();
        let registry = r.registry.borrow();
        entries
            .iter()
            .map(|v| v.unchecked_into::<web::IntersectionObserverEntry>())
            .flat_map(|entry| {
                registry
                    .handles_of(&entry.target())
                    .into_iter()
                    .map(TargetId)
                    .filter(|id| {
                        r.page
                            .reveals
                            .target(*id)
                            .is_some_and(|t| t.feed == RevealFeed::Intersection)
                    })
                    .map(move |id| IntersectionEntry {
                        id,
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    };
    if batch.is_empty() {
        return;
    }
    let (changes, effects) = rt.borrow_mut().page.on_intersections(&batch);
    unobserve_finished(rt, &changes);
    runtime::apply_all(rt, effects);
}

/// Create one intersection observer per distinct zone and observe every
/// intersection-fed target with it.
pub fn wire_intersections(rt: &SharedRuntime) -> anyhow::Result<()> {
    let mut groups: Vec<((f64, f64), Vec<TargetId>)> = Vec::new();
    {
        let r = rt.borrow();
        for id in r.page.reveals.observed_by(RevealFeed::Intersection) {
            let Some(target) = r.page.reveals.target(id) else {
                continue;
            };
            let key = zone_options(&target.zone);
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, ids)) => ids.push(id),
                None => groups.push((key, vec![id])),
            }
        }
    }
    if groups.is_empty() {
        return Ok(());
    }

    let rt_cb = rt.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
        on_entries(&rt_cb, &entries);
    }) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let mut observers = Vec::with_capacity(groups.len());
    for ((threshold, bottom_margin), ids) in groups {
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(&root_margin(bottom_margin));
        let observer = web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow!("{:?}", e))?;
        {
            let r = rt.borrow();
            let registry = r.registry.borrow();
            for id in &ids {
                if let Some(el) = registry.get(id.0) {
                    observer.observe(el);
                }
            }
        }
        log::info!(
            "[reveal] intersection observer threshold={threshold} margin={bottom_margin} targets={}",
            ids.len()
        );
        observers.push(observer);
    }
    callback.forget();
    rt.borrow_mut().intersections = observers;
    Ok(())
}
