use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::selectors;

pub fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Where to scroll so `target` ends up right under a fixed header.
pub fn offset_below_header(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height
}

pub fn header_height(document: &Document) -> f64 {
    query_html(document, selectors::HEADER)
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Blocking browser alert, the page's only way of talking back to the user.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Smoothly scrolls `target` into view below the fixed header.
pub fn scroll_to_element(window: &Window, document: &Document, target: &Element) {
    let offset_top = target
        .dyn_ref::<HtmlElement>()
        .map(|element| element.offset_top() as f64)
        .unwrap_or(0.0);
    smooth_scroll_to(window, offset_below_header(offset_top, header_height(document)));
}
