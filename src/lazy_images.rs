use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Document, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use crate::config::selectors;
use crate::dom::query_all;

const DATA_SRC: &str = "data-src";
const LAZY_CLASS: &str = "lazy";

/// An image whose real source waits in `data-src` until it scrolls into view.
pub trait DeferredImage {
    fn deferred_source(&self) -> Option<String>;
    fn load_source(&self, src: &str);
}

impl DeferredImage for Element {
    fn deferred_source(&self) -> Option<String> {
        self.get_attribute(DATA_SRC)
    }

    fn load_source(&self, src: &str) {
        let _ = self.set_attribute("src", src);
        let _ = self.remove_attribute(DATA_SRC);
        let _ = self.class_list().remove_1(LAZY_CLASS);
    }
}

/// Swaps in the real source. Returns `false` when there was nothing left to
/// load, which makes a second call a no-op.
pub fn reveal<I: DeferredImage + ?Sized>(image: &I) -> bool {
    match image.deferred_source() {
        Some(src) => {
            image.load_source(&src);
            true
        }
        None => false,
    }
}

/// Watches every deferred image on the page. Disconnects on drop.
pub struct LazyImageLoader {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl LazyImageLoader {
    /// `Ok(None)` when the page has no deferred images.
    pub fn observe(document: &Document) -> Result<Option<Self>, JsValue> {
        let images: Vec<HtmlImageElement> = query_all(document, selectors::DEFERRED_IMAGES);
        if images.is_empty() {
            return Ok(None);
        }

        let on_intersect = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let image = entry.target();
                reveal(&image);
                observer.unobserve(&image);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())?;
        for image in &images {
            observer.observe(image);
        }
        debug!("Lazy loading {} images", images.len());

        Ok(Some(Self {
            observer,
            _on_intersect: on_intersect,
        }))
    }
}

impl Drop for LazyImageLoader {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeImage {
        data_src: RefCell<Option<String>>,
        loads: RefCell<Vec<String>>,
    }

    impl FakeImage {
        fn deferred(src: &str) -> Self {
            Self {
                data_src: RefCell::new(Some(src.to_string())),
                loads: RefCell::new(Vec::new()),
            }
        }
    }

    impl DeferredImage for FakeImage {
        fn deferred_source(&self) -> Option<String> {
            self.data_src.borrow().clone()
        }

        fn load_source(&self, src: &str) {
            self.loads.borrow_mut().push(src.to_string());
            *self.data_src.borrow_mut() = None;
        }
    }

    #[test]
    fn reveals_exactly_once() {
        let image = FakeImage::deferred("/assets/programs/strength.jpg");

        assert!(reveal(&image));
        assert!(!reveal(&image));
        assert_eq!(*image.loads.borrow(), vec!["/assets/programs/strength.jpg".to_string()]);
    }

    #[test]
    fn image_without_deferred_source_is_left_alone() {
        let image = FakeImage {
            data_src: RefCell::new(None),
            loads: RefCell::new(Vec::new()),
        };
        assert!(!reveal(&image));
        assert!(image.loads.borrow().is_empty());
    }
}
