//! Interactive shell for the static portfolio pages.
//!
//! The markup ships fully rendered; this crate only attaches behavior to the
//! anchors it finds in the page: theme switching, the mobile menu, the
//! scroll-to-top control, reveal-on-scroll animations, the project filter and
//! contact-form validation. Every feature is presence-guarded, so a page that
//! lacks some anchors simply runs with fewer features active.

pub mod context;
pub mod features;
pub mod validate;

use wasm_bindgen::prelude::*;

use crate::context::PageContext;

/// Runs once when the wasm module is instantiated by the page.
#[wasm_bindgen(start)]
pub fn start() {
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(ctx) = PageContext::attach() else {
        log::warn!("no window or document available, nothing to enhance");
        return;
    };
    let active = features::activate_all(&ctx);
    log::info!("{active} of {} page features active", features::FEATURES.len());
}
