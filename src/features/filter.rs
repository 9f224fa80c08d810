//! Project-card filter chips.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Element, HtmlElement};

use crate::context::PageContext;

const CHIP_ATTR: &str = "data-filter";
const CARD_ATTR: &str = "data-project";
const CHIP_SELECTOR: &str = "[data-filter]";
const CARD_SELECTOR: &str = "[data-project]";

/// Category label matching every card.
pub const ALL_CATEGORY: &str = "all";

/// Presses the chip whose label equals `category` and shows exactly the cards
/// it covers. Idempotent for a given category; stateless beyond the DOM.
pub fn apply_filter(chips: &[Element], cards: &[HtmlElement], category: &str) {
    for chip in chips {
        let pressed = chip.get_attribute(CHIP_ATTR).as_deref() == Some(category);
        let _ = chip.set_attribute("aria-pressed", if pressed { "true" } else { "false" });
    }
    for card in cards {
        let shown = category == ALL_CATEGORY
            || card.get_attribute(CARD_ATTR).as_deref() == Some(category);
        let _ = card
            .style()
            .set_property("display", if shown { "block" } else { "none" });
    }
}

/// Collects chips and cards, applies the `all` filter, and gives every chip a
/// click handler carrying its own label. Requires at least one of each.
pub fn init(ctx: &PageContext) -> bool {
    let chips = ctx.query_all(CHIP_SELECTOR);
    let cards: Vec<HtmlElement> = ctx
        .query_all(CARD_SELECTOR)
        .into_iter()
        .filter_map(|card| card.dyn_into::<HtmlElement>().ok())
        .collect();
    if chips.is_empty() || cards.is_empty() {
        return false;
    }

    apply_filter(&chips, &cards, ALL_CATEGORY);

    for chip in &chips {
        let Some(category) = chip.get_attribute(CHIP_ATTR) else {
            continue;
        };
        let on_click = Closure::<dyn FnMut()>::new({
            let chips = chips.clone();
            let cards = cards.clone();
            move || apply_filter(&chips, &cards, &category)
        });
        chip.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .unwrap_throw();
        on_click.forget();
    }
    true
}
