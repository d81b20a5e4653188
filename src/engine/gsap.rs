use super::CompletionSink;
use crate::registry::ElementRegistry;
use js_sys::{Object, Reflect};
use landing_core::{
    AnimationEngine, AnimationRequest, Position, ScrollTriggerSpec, Target, Timeline, VisualState,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = fromTo)]
    fn gsap_from_to(targets: &JsValue, from: &JsValue, to: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = registerPlugin)]
    fn gsap_register_plugin(plugin: &JsValue);

    type GsapTimeline;

    #[wasm_bindgen(js_namespace = gsap, js_name = timeline)]
    fn gsap_timeline() -> GsapTimeline;

    #[wasm_bindgen(method, js_name = to)]
    fn to(this: &GsapTimeline, targets: &JsValue, vars: &JsValue, position: &JsValue);

    #[wasm_bindgen(method, js_name = fromTo)]
    fn from_to(this: &GsapTimeline, targets: &JsValue, from: &JsValue, to: &JsValue, position: &JsValue);
}

pub fn is_available(window: &web::Window) -> bool {
    Reflect::get(window, &JsValue::from_str("gsap"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

pub fn register_scroll_trigger(window: &web::Window) {
    match Reflect::get(window, &JsValue::from_str("ScrollTrigger")) {
        Ok(plugin) if !plugin.is_undefined() => gsap_register_plugin(&plugin),
        _ => log::warn!("[engine] ScrollTrigger not loaded; scroll-bound tweens play immediately"),
    }
}

#[inline]
fn put(obj: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

#[inline]
fn put_num(obj: &Object, key: &str, value: f32) {
    put(obj, key, &JsValue::from_f64(f64::from(value)));
}

fn state_vars(state: &VisualState) -> Object {
    let vars = Object::new();
    if let Some(v) = state.opacity {
        put_num(&vars, "opacity", v);
    }
    if let Some(t) = state.translate {
        put_num(&vars, "x", t.x);
        put_num(&vars, "y", t.y);
    }
    if let Some(v) = state.scale {
        put_num(&vars, "scale", v);
    }
    if let Some(v) = state.rotation {
        put_num(&vars, "rotation", v);
    }
    if let Some(v) = state.y_percent {
        put_num(&vars, "yPercent", v);
    }
    vars
}

fn position_arg(position: Position) -> JsValue {
    match position {
        Position::AfterPrevious => JsValue::UNDEFINED,
        Position::Relative(off) if off < 0.0 => JsValue::from_str(&format!("-={}", -off)),
        Position::Relative(off) => JsValue::from_str(&format!("+={off}")),
        Position::At(t) => JsValue::from_f64(f64::from(t)),
    }
}

pub struct GsapEngine {
    document: web::Document,
    registry: Rc<RefCell<ElementRegistry>>,
    sink: CompletionSink,
}

impl GsapEngine {
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

    /// GSAP takes selector strings as-is; ids and handles become elements.
    fn targets(&self, target: &Target) -> Option<JsValue> {
        let resolved = match target {
            Target::Selector(sel) => Some(JsValue::from_str(sel)),
            Target::Id(id) => self.document.get_element_by_id(id).map(JsValue::from),
            Target::Handle(h) => self.registry.borrow().get(*h).cloned().map(JsValue::from),
        };
        if resolved.is_none() {
            log::debug!("[engine] {target} not found, skipped");
        }
        resolved
    }

    fn trigger_vars(&self, spec: &ScrollTriggerSpec) -> Option<Object> {
        let trigger = self.targets(&spec.trigger)?;
        let vars = Object::new();
        put(&vars, "trigger", &trigger);
        put(&vars, "start", &JsValue::from_str(&spec.start.to_string()));
        if let Some(end) = spec.end {
            put(&vars, "end", &JsValue::from_str(&end.to_string()));
        }
        if spec.scrub {
            put(&vars, "scrub", &JsValue::TRUE);
        } else {
            put(&vars, "toggleActions", &JsValue::from_str(&spec.toggle_actions.to_string()));
        }
        if spec.once {
            put(&vars, "once", &JsValue::TRUE);
        }
        Some(vars)
    }

    fn tween_vars(&self, req: &AnimationRequest) -> Object {
        let vars = state_vars(&req.to);
        put_num(&vars, "duration", req.duration);
        put(&vars, "ease", &JsValue::from_str(&req.ease.to_string()));
        if req.delay > 0.0 {
            put_num(&vars, "delay", req.delay);
        }
        if let Some(stagger) = req.stagger {
            put_num(&vars, "stagger", stagger);
        }
        if req.overwrite {
            put(&vars, "overwrite", &JsValue::from_str("auto"));
        }
        if let Some(trigger) = req.scroll.as_ref().and_then(|s| self.trigger_vars(s)) {
            put(&vars, "scrollTrigger", &trigger);
        }
        if let Some(completion) = req.on_complete {
            let sink = self.sink.clone();
            let callback = Closure::once_into_js(move || sink(completion));
            put(&vars, "onComplete", &callback);
        }
        vars
    }
}

impl AnimationEngine for GsapEngine {
    fn set(&mut self, targets: &Target, state: &VisualState) {
        if let Some(t) = self.targets(targets) {
            gsap_set(&t, &state_vars(state));
        }
    }

    fn tween(&mut self, request: &AnimationRequest) {
        let Some(t) = self.targets(&request.targets) else {
            return;
        };
        let vars = self.tween_vars(request);
        match &request.from {
            Some(from) => gsap_from_to(&t, &state_vars(from), &vars),
            None => gsap_to(&t, &vars),
        }
    }

    fn sequence(&mut self, timeline: &Timeline) {
        let tl = gsap_timeline();
        for (req, position) in timeline.steps() {
            let Some(t) = self.targets(&req.targets) else {
                continue;
            };
            let vars = self.tween_vars(req);
            let at = position_arg(position);
            match &req.from {
                Some(from) => tl.from_to(&t, &state_vars(from), &vars, &at),
                None => tl.to(&t, &vars, &at),
            }
        }
    }
}
