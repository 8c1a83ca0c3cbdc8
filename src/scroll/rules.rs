/// Thresholds the scroll rules are evaluated against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    pub header_threshold: f64,
    pub scroll_top_threshold: f64,
    pub parallax_factor: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100.0,
            scroll_top_threshold: 500.0,
            parallax_factor: 0.5,
        }
    }
}

/// One reading of the window taken while handling a scroll notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub position: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedVisualState {
    pub header_emphasized: bool,
    /// `None` once the page is scrolled past the first viewport. The hero
    /// transform keeps whatever was applied last in that case.
    pub parallax_offset: Option<f64>,
    pub scroll_top_visible: bool,
}

impl ScrollConfig {
    pub fn on_scroll(&self, sample: ScrollSample) -> DerivedVisualState {
        DerivedVisualState {
            header_emphasized: self.header_emphasized(sample.position),
            parallax_offset: self.parallax_offset(sample),
            scroll_top_visible: self.scroll_top_visible(sample.position),
        }
    }

    pub fn header_emphasized(&self, position: f64) -> bool {
        position > self.header_threshold
    }

    pub fn parallax_offset(&self, sample: ScrollSample) -> Option<f64> {
        (sample.position < sample.viewport_height).then(|| sample.position * self.parallax_factor)
    }

    pub fn scroll_top_visible(&self, position: f64) -> bool {
        position > self.scroll_top_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(position: f64) -> ScrollSample {
        ScrollSample { position, viewport_height: 900.0 }
    }

    #[test]
    fn header_emphasis_is_strictly_above_threshold() {
        let config = ScrollConfig::default();
        for (position, expected) in [(0.0, false), (99.9, false), (100.0, false), (100.5, true), (5000.0, true)] {
            assert_eq!(config.on_scroll(sample(position)).header_emphasized, expected, "at {}", position);
        }
    }

    #[test]
    fn scroll_top_visibility_is_independent_of_header() {
        let config = ScrollConfig::default();

        let between = config.on_scroll(sample(300.0));
        assert!(between.header_emphasized);
        assert!(!between.scroll_top_visible);

        assert!(!config.on_scroll(sample(500.0)).scroll_top_visible);
        assert!(config.on_scroll(sample(501.0)).scroll_top_visible);
    }

    #[test]
    fn parallax_only_within_first_viewport() {
        let config = ScrollConfig::default();
        assert_eq!(config.on_scroll(sample(0.0)).parallax_offset, Some(0.0));
        assert_eq!(config.on_scroll(sample(240.0)).parallax_offset, Some(120.0));
        assert_eq!(config.on_scroll(sample(899.0)).parallax_offset, Some(449.5));
        assert_eq!(config.on_scroll(sample(900.0)).parallax_offset, None);
        assert_eq!(config.on_scroll(sample(2000.0)).parallax_offset, None);
    }

    #[test]
    fn same_sample_derives_same_state() {
        let config = ScrollConfig::default();
        assert_eq!(config.on_scroll(sample(612.0)), config.on_scroll(sample(612.0)));
    }

    #[test]
    fn state_does_not_depend_on_history() {
        let config = ScrollConfig::default();
        let direct = config.on_scroll(sample(150.0));
        let _ = config.on_scroll(sample(1200.0));
        assert_eq!(config.on_scroll(sample(150.0)), direct);
    }
}
