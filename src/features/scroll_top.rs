//! Back-to-top control.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::context::PageContext;

/// Vertical offset above which the control is shown.
pub const SHOW_THRESHOLD_PX: f64 = 500.0;

const BUTTON_ID: &str = "toTop";

/// Visibility as a pure function of the scroll offset; exactly the threshold
/// still hides the control.
pub fn should_show_at(offset: f64) -> bool {
    offset > SHOW_THRESHOLD_PX
}

/// Wires the control: every scroll event re-evaluates visibility, a click
/// smooth-scrolls back to the top. No throttling; the visibility write is
/// cheap enough to run per event.
pub fn init(ctx: &PageContext) -> bool {
    let Some(button) = ctx.by_id::<HtmlElement>(BUTTON_ID) else {
        return false;
    };

    let on_scroll = Closure::<dyn FnMut()>::new({
        let window = ctx.window().clone();
        let button = button.clone();
        move || {
            let offset = window.scroll_y().unwrap_or(0.0);
            let display = if should_show_at(offset) {
                "inline-flex"
            } else {
                "none"
            };
            let _ = button.style().set_property("display", display);
        }
    });
    ctx.window()
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .unwrap_throw();
    on_scroll.forget();

    let on_click = Closure::<dyn FnMut()>::new({
        let window = ctx.window().clone();
        move || {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .unwrap_throw();
    on_click.forget();
    true
}
