//! Element lookup helpers.
//!
//! Lookups return `None` for a missing window, document, or element, or for
//! an element of the wrong type. Callers treat all of these as "not on this
//! page" and skip the operation.

use wasm_bindgen::JsCast;

pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// First element matching a CSS selector.
pub fn query<T: JsCast>(selector: &str) -> Option<T> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<T>()
        .ok()
}
