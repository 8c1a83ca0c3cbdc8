use web_sys::HtmlElement;

use super::rules::DerivedVisualState;

pub const HEADER_EMPHASIZED_BACKGROUND: &str = "rgba(0, 0, 0, 0.98)";
pub const HEADER_RESTING_BACKGROUND: &str = "rgba(0, 0, 0, 0.95)";

/// Anything a rule can write inline styles to.
pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str);
}

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        // A rejected write leaves the element as it was, nothing to recover.
        let _ = self.style().set_property(property, value);
    }
}

/// Handles for the scroll rules. A rule whose handle is `None` is skipped.
#[derive(Clone, Debug)]
pub struct ScrollTargets<T = HtmlElement> {
    pub header: Option<T>,
    pub hero_image: Option<T>,
    pub scroll_top: Option<T>,
}

impl<T> Default for ScrollTargets<T> {
    fn default() -> Self {
        Self { header: None, hero_image: None, scroll_top: None }
    }
}

impl ScrollTargets<HtmlElement> {
    pub fn resolve(document: &web_sys::Document) -> Self {
        use crate::config::selectors;
        use crate::dom::query_html;

        Self {
            header: query_html(document, selectors::HEADER),
            hero_image: query_html(document, selectors::HERO_IMAGE),
            scroll_top: query_html(document, selectors::SCROLL_TOP_BUTTON),
        }
    }
}

/// Remembers what each rule wrote last so a repeated state writes nothing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StyleApplier {
    header_emphasized: Option<bool>,
    parallax_offset: Option<f64>,
    scroll_top_visible: Option<bool>,
}

impl StyleApplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many style properties were written.
    pub fn apply<T: StyleTarget>(&mut self, state: &DerivedVisualState, targets: &ScrollTargets<T>) -> usize {
        let mut writes = 0;

        if let Some(header) = &targets.header {
            if self.header_emphasized != Some(state.header_emphasized) {
                let background = if state.header_emphasized {
                    HEADER_EMPHASIZED_BACKGROUND
                } else {
                    HEADER_RESTING_BACKGROUND
                };
                header.set_style("background", background);
                self.header_emphasized = Some(state.header_emphasized);
                writes += 1;
            }
        }

        if let (Some(hero), Some(offset)) = (&targets.hero_image, state.parallax_offset) {
            if self.parallax_offset != Some(offset) {
                hero.set_style("transform", &format!("translateY({}px)", offset));
                self.parallax_offset = Some(offset);
                writes += 1;
            }
        }

        if let Some(button) = &targets.scroll_top {
            if self.scroll_top_visible != Some(state.scroll_top_visible) {
                let (opacity, visibility) = if state.scroll_top_visible {
                    ("1", "visible")
                } else {
                    ("0", "hidden")
                };
                button.set_style("opacity", opacity);
                button.set_style("visibility", visibility);
                self.scroll_top_visible = Some(state.scroll_top_visible);
                writes += 2;
            }
        }

        writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::rules::{ScrollConfig, ScrollSample};
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        writes: RefCell<Vec<(String, String)>>,
    }

    impl Recorder {
        fn last(&self, property: &str) -> Option<String> {
            self.writes
                .borrow()
                .iter()
                .rev()
                .find(|(p, _)| p == property)
                .map(|(_, v)| v.clone())
        }

        fn count(&self) -> usize {
            self.writes.borrow().len()
        }
    }

    impl StyleTarget for Recorder {
        fn set_style(&self, property: &str, value: &str) {
            self.writes.borrow_mut().push((property.to_string(), value.to_string()));
        }
    }

    fn all_targets() -> ScrollTargets<Recorder> {
        ScrollTargets {
            header: Some(Recorder::default()),
            hero_image: Some(Recorder::default()),
            scroll_top: Some(Recorder::default()),
        }
    }

    fn state(position: f64) -> DerivedVisualState {
        ScrollConfig::default().on_scroll(ScrollSample { position, viewport_height: 800.0 })
    }

    #[test]
    fn applies_all_three_rules() {
        let targets = all_targets();
        let mut applier = StyleApplier::new();

        assert_eq!(applier.apply(&state(600.0), &targets), 4);

        let header = targets.header.as_ref().unwrap();
        let hero = targets.hero_image.as_ref().unwrap();
        let button = targets.scroll_top.as_ref().unwrap();
        assert_eq!(header.last("background").as_deref(), Some(HEADER_EMPHASIZED_BACKGROUND));
        assert_eq!(hero.last("transform").as_deref(), Some("translateY(300px)"));
        assert_eq!(button.last("opacity").as_deref(), Some("1"));
        assert_eq!(button.last("visibility").as_deref(), Some("visible"));
    }

    #[test]
    fn header_uses_exactly_two_levels() {
        let targets = all_targets();
        let mut applier = StyleApplier::new();

        applier.apply(&state(50.0), &targets);
        assert_eq!(targets.header.as_ref().unwrap().last("background").as_deref(), Some(HEADER_RESTING_BACKGROUND));
        applier.apply(&state(101.0), &targets);
        assert_eq!(targets.header.as_ref().unwrap().last("background").as_deref(), Some(HEADER_EMPHASIZED_BACKGROUND));
        applier.apply(&state(20.0), &targets);
        assert_eq!(targets.header.as_ref().unwrap().last("background").as_deref(), Some(HEADER_RESTING_BACKGROUND));
    }

    #[test]
    fn reapplying_same_state_writes_nothing() {
        let targets = all_targets();
        let mut applier = StyleApplier::new();

        assert!(applier.apply(&state(250.0), &targets) > 0);
        assert_eq!(applier.apply(&state(250.0), &targets), 0);
    }

    #[test]
    fn parallax_freezes_past_the_viewport() {
        let targets = all_targets();
        let mut applier = StyleApplier::new();

        applier.apply(&state(700.0), &targets);
        let hero = targets.hero_image.as_ref().unwrap();
        let before = hero.count();

        applier.apply(&state(1500.0), &targets);
        applier.apply(&state(3000.0), &targets);
        assert_eq!(hero.count(), before);
        assert_eq!(hero.last("transform").as_deref(), Some("translateY(350px)"));
    }

    #[test]
    fn missing_targets_do_not_block_other_rules() {
        let targets = ScrollTargets {
            header: None,
            hero_image: None,
            scroll_top: Some(Recorder::default()),
        };
        let mut applier = StyleApplier::new();

        assert_eq!(applier.apply(&state(900.0), &targets), 2);
        assert_eq!(targets.scroll_top.as_ref().unwrap().last("visibility").as_deref(), Some("visible"));

        let nothing: ScrollTargets<Recorder> = ScrollTargets::default();
        assert_eq!(applier.apply(&state(10.0), &nothing), 0);
    }
}
