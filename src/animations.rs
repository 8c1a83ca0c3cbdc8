use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::PageConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;
}

/// Options handed to `AOS.init`.
#[derive(Debug, Serialize, PartialEq)]
pub struct AosOptions {
    pub duration: u32,
    pub easing: &'static str,
    pub once: bool,
    pub offset: u32,
}

impl AosOptions {
    pub fn from_config(config: &PageConfig) -> Self {
        Self {
            duration: config.animation_duration_ms,
            easing: "ease-in-out",
            once: true,
            offset: config.scroll_offset,
        }
    }
}

/// Starts the entrance animations. The library is loaded by the page, when
/// it is missing the sections simply appear without animation.
pub fn init_entrance_animations(config: &PageConfig) {
    let options = match serde_wasm_bindgen::to_value(&AosOptions::from_config(config)) {
        Ok(options) => options,
        Err(e) => {
            warn!("Could not build animation options: {}", e);
            return;
        }
    };

    match aos_init(&options) {
        Ok(()) => debug!("Entrance animations initialized"),
        Err(e) => warn!("AOS unavailable, entrance animations disabled: {:?}", e),
    }
}
