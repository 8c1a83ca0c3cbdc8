use crate::scroll::rules::ScrollConfig;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Selectors for the elements the page behaviors look up after render. Each
/// of them is allowed to be missing, the matching feature is skipped then.
pub mod selectors {
    pub const HEADER: &str = ".header";
    pub const CONTACT_FORM_FIRST_INPUT: &str = ".contact-form form input";
    pub const CONTACT_SECTION: &str = "#contact";
    pub const HERO_IMAGE: &str = ".hero-bg img";
    pub const DEFERRED_IMAGES: &str = "img[data-src]";
    pub const SCROLL_TOP_BUTTON: &str = ".scroll-top-btn";
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Entrance animation duration, also used as the delay before focusing
    /// the contact form after a CTA click.
    pub animation_duration_ms: u32,
    /// How early (px) entrance animations trigger.
    pub scroll_offset: u32,
    pub form_submit_delay_ms: u32,
    pub scroll_top_threshold: f64,
    pub header_scroll_threshold: f64,
    pub parallax_factor: f64,
    /// When set, leads are POSTed here instead of the simulated submission.
    pub lead_endpoint: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: 800,
            scroll_offset: 100,
            form_submit_delay_ms: 2000,
            scroll_top_threshold: 500.0,
            header_scroll_threshold: 100.0,
            parallax_factor: 0.5,
            lead_endpoint: None,
        }
    }
}

impl PageConfig {
    pub fn scroll(&self) -> ScrollConfig {
        ScrollConfig {
            header_threshold: self.header_scroll_threshold,
            scroll_top_threshold: self.scroll_top_threshold,
            parallax_factor: self.parallax_factor,
        }
    }

    /// Leads go to the backend once an endpoint path is configured.
    pub fn with_lead_endpoint(mut self, path: &str) -> Self {
        self.lead_endpoint = Some(format!("{}{}", get_backend_url(), path));
        self
    }
}
