use yew::prelude::*;
use log::{info, Level};

mod animations;
mod config;
mod contact;
mod dom;
mod lazy_images;
mod navigation;
mod scroll;
mod components {
    pub mod header;
    pub mod scroll_top;
}
mod pages {
    pub mod home;
}

use config::PageConfig;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    let config = match option_env!("POWERGYM_LEAD_ENDPOINT") {
        Some(path) => PageConfig::default().with_lead_endpoint(path),
        None => PageConfig::default(),
    };

    html! {
        <Home {config} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
