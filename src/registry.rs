use crate::dom;
use fnv::FnvHashMap;
use landing_core::Target;
use web_sys as web;

/// Numeric handles for elements the page state refers to.
///
/// Registering the same element twice yields two handles, so two reveal
/// targets can watch one element independently.
#[derive(Default)]
pub struct ElementRegistry {
    next: u32,
    elements: FnvHashMap<u32, web::Element>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, el: web::Element) -> u32 {
        let handle = self.next;
        self.next += 1;
        self.elements.insert(handle, el);
        handle
    }

    pub fn get(&self, handle: u32) -> Option<&web::Element> {
        self.elements.get(&handle)
    }

    /// Every handle registered for `el`.
    pub fn handles_of(&self, el: &web::Element) -> Vec<u32> {
        let mut handles: Vec<u32> = self
            .elements
            .iter()
            .filter(|(_, known)| js_sys::Object::is(known, el))
            .map(|(h, _)| *h)
            .collect();
        handles.sort_unstable();
        handles
    }

    pub fn resolve(&self, document: &web::Document, target: &Target) -> Vec<web::Element> {
        match target {
            Target::Selector(sel) => dom::query_all(document, sel),
            Target::Id(id) => document.get_element_by_id(id).into_iter().collect(),
            Target::Handle(h) => self.get(*h).cloned().into_iter().collect(),
        }
    }
}
