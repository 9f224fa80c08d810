//! Reveal-on-scroll markers.
//!
//! Elements tagged `reveal` gain the `visible` class the first time at least
//! 15 % of their area enters the viewport; the CSS transition does the rest.
//! The marker is one-shot: each element is unobserved as soon as it fires.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::context::PageContext;

const REVEAL_SELECTOR: &str = ".reveal";
const VISIBLE_CLASS: &str = "visible";

/// Fraction of an element's area that must be visible before it reveals.
pub const VISIBLE_THRESHOLD: f64 = 0.15;

/// Observes every tagged element, or marks everything visible at once when
/// the runtime has no intersection observer, so content is never permanently
/// hidden.
pub fn init(ctx: &PageContext) -> bool {
    let elements = ctx.query_all(REVEAL_SELECTOR);
    if elements.is_empty() {
        return false;
    }

    if !observer_available(ctx.window()) {
        mark_all_visible(&elements);
        return true;
    }

    let on_intersection = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(VISIBLE_CLASS);
                observer.unobserve(&target);
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(VISIBLE_THRESHOLD));
    let observer = match IntersectionObserver::new_with_options(
        on_intersection.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(_) => {
            log::warn!("intersection observer construction failed, revealing everything");
            mark_all_visible(&elements);
            return true;
        }
    };
    on_intersection.forget();

    for element in &elements {
        observer.observe(element);
    }
    true
}

/// Whether the global object exposes `IntersectionObserver`.
pub fn observer_available(window: &Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

/// Fallback path: reveal every element immediately.
pub fn mark_all_visible(elements: &[Element]) {
    for element in elements {
        let _ = element.class_list().add_1(VISIBLE_CLASS);
    }
}
