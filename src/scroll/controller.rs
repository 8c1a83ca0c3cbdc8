use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement, Window};

use super::rules::{ScrollConfig, ScrollSample};
use super::styles::{ScrollTargets, StyleApplier, StyleTarget};

/// Coalesces scroll notifications into at most one pending animation frame.
/// Dropping the held handle cancels its frame.
struct FrameGate<H = AnimationFrame> {
    handle: Option<H>,
    in_flight: bool,
    closed: bool,
}

impl<H> Default for FrameGate<H> {
    fn default() -> Self {
        Self { handle: None, in_flight: false, closed: false }
    }
}

impl<H> FrameGate<H> {
    fn wants_frame(&self) -> bool {
        !self.closed && !self.in_flight
    }

    /// The previous handle belongs to a frame that already ran, so replacing
    /// it cancels nothing.
    fn requested(&mut self, handle: H) {
        self.handle = Some(handle);
        self.in_flight = true;
    }

    /// Called from the frame callback. `false` means the frame arrived after
    /// the gate was closed and must not touch the page. The handle is kept
    /// here, it is still running.
    fn fired(&mut self) -> bool {
        self.in_flight = false;
        !self.closed
    }

    /// Hands back the last handle so the caller can drop it, cancelling a
    /// frame that has not run yet.
    fn close(&mut self) -> Option<H> {
        self.closed = true;
        self.in_flight = false;
        self.handle.take()
    }
}

struct RuleSet<T> {
    config: ScrollConfig,
    targets: ScrollTargets<T>,
    applier: StyleApplier,
    gate: FrameGate,
}

impl<T: StyleTarget> RuleSet<T> {
    fn sync(&mut self, sample: ScrollSample) -> usize {
        let state = self.config.on_scroll(sample);
        self.applier.apply(&state, &self.targets)
    }
}

fn read_sample(window: &Window) -> Option<ScrollSample> {
    let position = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(ScrollSample { position, viewport_height })
}

/// Keeps the header, hero parallax and scroll-top button in line with the
/// window's scroll position for as long as it is attached.
pub struct ScrollStateController {
    window: Window,
    rules: Rc<RefCell<RuleSet<HtmlElement>>>,
    on_scroll: Closure<dyn FnMut()>,
}

impl ScrollStateController {
    pub fn attach(window: Window, config: ScrollConfig, targets: ScrollTargets) -> Result<Self, JsValue> {
        if targets.header.is_none() {
            debug!("No header found, header emphasis disabled");
        }
        if targets.hero_image.is_none() {
            debug!("No hero image found, parallax disabled");
        }
        if targets.scroll_top.is_none() {
            debug!("No scroll-top button found, its visibility is not managed");
        }

        let rules = Rc::new(RefCell::new(RuleSet {
            config,
            targets,
            applier: StyleApplier::new(),
            gate: FrameGate::default(),
        }));

        let on_scroll = {
            let rules = rules.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                if !rules.borrow().gate.wants_frame() {
                    return;
                }
                let frame = {
                    let rules = rules.clone();
                    let window = window.clone();
                    request_animation_frame(move |_| {
                        let mut rules = rules.borrow_mut();
                        if !rules.gate.fired() {
                            return;
                        }
                        if let Some(sample) = read_sample(&window) {
                            rules.sync(sample);
                        }
                    })
                };
                rules.borrow_mut().gate.requested(frame);
            }) as Box<dyn FnMut()>)
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        )?;

        // Initial check, the page may be loaded scrolled down.
        if let Some(sample) = read_sample(&window) {
            rules.borrow_mut().sync(sample);
        }

        Ok(Self {
            window,
            rules,
            on_scroll,
        })
    }

    pub fn detach(&mut self) {
        let mut rules = self.rules.borrow_mut();
        if rules.gate.closed {
            return;
        }
        // Dropping the handle cancels a frame that is still queued.
        drop(rules.gate.close());
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        debug!("Scroll state controller detached");
    }
}

impl Drop for ScrollStateController {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn gate_allows_one_frame_at_a_time() {
        let mut gate: FrameGate<u32> = FrameGate::default();
        assert!(gate.wants_frame());
        gate.requested(7);
        assert!(!gate.wants_frame());
        assert!(gate.fired());
        assert!(gate.wants_frame());
        gate.requested(8);
        assert!(!gate.wants_frame());
    }

    #[test]
    fn closed_gate_hands_back_pending_frame_and_blocks() {
        let mut gate: FrameGate<u32> = FrameGate::default();
        gate.requested(3);
        assert_eq!(gate.close(), Some(3));
        assert!(!gate.wants_frame());
        assert!(!gate.fired());
        assert_eq!(gate.close(), None);
    }

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    #[test]
    fn fired_frame_keeps_its_handle_until_replaced_or_closed() {
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let mut gate = FrameGate::default();

        gate.requested(DropFlag(first.clone()));
        assert!(gate.fired());
        assert!(!first.get());

        gate.requested(DropFlag(second.clone()));
        assert!(first.get());
        assert!(!second.get());

        drop(gate.close());
        assert!(second.get());
    }

    #[test]
    fn late_frame_after_close_is_ignored() {
        let mut gate: FrameGate<u32> = FrameGate::default();
        gate.requested(1);
        let _ = gate.close();
        assert!(!gate.fired());
        assert!(!gate.wants_frame());
    }

    struct Counter(Cell<usize>);

    impl StyleTarget for Counter {
        fn set_style(&self, _property: &str, _value: &str) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn rule_set_sync_is_idempotent() {
        let mut rules = RuleSet {
            config: ScrollConfig::default(),
            targets: ScrollTargets {
                header: Some(Counter(Cell::new(0))),
                hero_image: Some(Counter(Cell::new(0))),
                scroll_top: None,
            },
            applier: StyleApplier::new(),
            gate: FrameGate::default(),
        };
        let sample = ScrollSample { position: 120.0, viewport_height: 700.0 };

        assert_eq!(rules.sync(sample), 2);
        assert_eq!(rules.sync(sample), 0);
        assert_eq!(rules.targets.header.as_ref().unwrap().0.get(), 1);
    }
}
