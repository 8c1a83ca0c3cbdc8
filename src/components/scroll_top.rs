use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::dom::smooth_scroll_to;

// Opacity and visibility start hidden and are owned by the scroll controller
// afterwards, so this attribute must never change between renders.
const BUTTON_STYLE: &str = "position: fixed; bottom: 30px; right: 30px; \
    width: 50px; height: 50px; \
    background: linear-gradient(135deg, #FFD700 0%, #FF6B35 100%); \
    color: #000; border: none; border-radius: 50%; \
    font-size: 20px; font-weight: bold; cursor: pointer; \
    opacity: 0; visibility: hidden; transition: all 0.3s ease; z-index: 1000;";

fn set_scale(e: &MouseEvent, scale: &str) {
    if let Some(button) = e.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) {
        let _ = button.style().set_property("transform", &format!("scale({})", scale));
    }
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            smooth_scroll_to(&window, 0.0);
        }
    });
    let onmouseenter = Callback::from(|e: MouseEvent| set_scale(&e, "1.1"));
    let onmouseleave = Callback::from(|e: MouseEvent| set_scale(&e, "1"));

    html! {
        <button
            class="scroll-top-btn"
            aria-label="Scroll to top"
            style={BUTTON_STYLE}
            {onclick}
            {onmouseenter}
            {onmouseleave}
        >
            {"↑"}
        </button>
    }
}
