use anyhow::anyhow;
use gloo_utils::document;
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, NodeList};

pub const ACTIVE_CLASS: &str = "active";

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

/// Adds or removes the `active` marker class.
pub fn set_active(element: &Element, active: bool) {
    if let Err(e) = element.class_list().toggle_with_force(ACTIVE_CLASS, active) {
        log::warn!("Failed to update active class: {:?}", e);
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().set_property(property, value) {
            warn!("Failed to set {} on element: {:?}", property, e);
        }
    }
}

pub fn clear_style(element: &Element, property: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().remove_property(property) {
            warn!("Failed to clear {} on element: {:?}", property, e);
        }
    }
}

/// Wraps a thrown JS value so it can travel through `anyhow`.
pub fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}
