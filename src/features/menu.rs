//! Mobile navigation panel toggle.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::HtmlElement;

use crate::context::PageContext;

const TOGGLE_SELECTOR: &str = "[data-menu-toggle]";
const PANEL_ID: &str = "mobilePanel";

/// Wires the menu button to the panel. Each click inverts the button's
/// `aria-expanded` state and the panel's `hidden` attribute together; on the
/// transition to expanded, focus moves into the panel's first link.
pub fn init(ctx: &PageContext) -> bool {
    let Some(button) = ctx.query(TOGGLE_SELECTOR) else {
        return false;
    };
    let Some(panel) = ctx.by_id::<HtmlElement>(PANEL_ID) else {
        return false;
    };

    let on_click = Closure::<dyn FnMut()>::new({
        let button = button.clone();
        let panel = panel.clone();
        move || {
            // A missing attribute reads as collapsed.
            let expanded = button.get_attribute("aria-expanded").as_deref() == Some("true");
            let _ = button.set_attribute("aria-expanded", if expanded { "false" } else { "true" });
            panel.set_hidden(expanded);
            if !expanded {
                let first_link = panel
                    .query_selector("a")
                    .ok()
                    .flatten()
                    .and_then(|link| link.dyn_into::<HtmlElement>().ok());
                if let Some(link) = first_link {
                    let _ = link.focus();
                }
            }
        }
    });
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .unwrap_throw();
    on_click.forget();
    true
}
