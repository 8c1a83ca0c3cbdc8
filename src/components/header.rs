use yew::prelude::*;
use web_sys::MouseEvent;

use crate::navigation::{anchor_click, scroll_to_anchor, NavMenu};

const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#programs", "Programs"),
    ("#pricing", "Pricing"),
    ("#contact", "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_state(NavMenu::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set((*menu).toggled());
        })
    };

    let active = (*menu).is_open().then(|| "active");

    html! {
        <header class="header">
            <nav class="navbar">
                <a href="#home" class="logo" onclick={anchor_click("#home")}>
                    {"POWER"}<span>{"GYM"}</span>
                </a>
                <ul class={classes!("nav-menu", active)}>
                    {
                        for NAV_LINKS.iter().map(|(href, label)| {
                            let href: &'static str = href;
                            let close_menu = {
                                let menu = menu.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    menu.set((*menu).closed());
                                    scroll_to_anchor(href);
                                })
                            };
                            html! {
                                <li><a {href} onclick={close_menu}>{*label}</a></li>
                            }
                        })
                    }
                </ul>
                <div class={classes!("hamburger", active)} onclick={toggle_menu}>
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </nav>
        </header>
    }
}
