use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::Callback;

use crate::config::selectors;
use crate::dom;

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

/// Smoothly scrolls to the element `href` points at (`#contact` style),
/// keeping it clear of the fixed header. Unknown anchors do nothing.
pub fn scroll_to_anchor(href: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    match document.query_selector(href).ok().flatten() {
        Some(target) => dom::scroll_to_element(&window, &document, &target),
        None => debug!("No element for anchor {}", href),
    }
}

pub fn anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor(href);
    })
}

/// Brings the contact section into view and, once the scroll animation had
/// time to finish, focuses the first field of the contact form.
pub fn go_to_contact(focus_delay_ms: u32) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(contact) = document.query_selector(selectors::CONTACT_SECTION).ok().flatten() else {
        debug!("No contact section, CTA ignored");
        return;
    };

    dom::scroll_to_element(&window, &document, &contact);

    let timeout = Timeout::new(focus_delay_ms, move || {
        if let Some(input) = dom::query_all::<HtmlInputElement>(&document, selectors::CONTACT_FORM_FIRST_INPUT)
            .into_iter()
            .next()
        {
            let _ = input.focus();
        }
    });
    timeout.forget();
}

pub fn cta_click(focus_delay_ms: u32) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        go_to_contact(focus_delay_ms);
    })
}
