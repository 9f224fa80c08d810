//! Light/dark theme resolution, persistence and the toggle control.
//!
//! The preference is stored as a raw `"light"`/`"dark"` string under the
//! `theme` key so the page's CSS (and anything else reading the slot) sees
//! exactly the documented value.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::Window;

use crate::context::PageContext;

/// Storage slot holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

const ROOT_ATTR: &str = "data-theme";
const TOGGLE_SELECTOR: &str = "[data-theme-toggle]";
const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The wire string written to storage and the document root.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a wire string; anything but the two exact values is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    fn toggle_title(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

/// Startup resolution order: a stored wire string wins, then the OS-level
/// color-scheme hint, then light.
pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Writes the root marker, persists the preference and updates the toggle
/// control's pressed state and tooltip.
pub fn set_theme(ctx: &PageContext, theme: Theme) {
    if let Some(root) = ctx.document().document_element() {
        let _ = root.set_attribute(ROOT_ATTR, theme.as_str());
    }
    if let Some(storage) = ctx.storage() {
        if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
            log::warn!("failed to persist theme preference");
        }
    }
    if let Some(toggle) = ctx.query(TOGGLE_SELECTOR) {
        let pressed = if theme == Theme::Dark { "true" } else { "false" };
        let _ = toggle.set_attribute("aria-pressed", pressed);
        let _ = toggle.set_attribute("title", theme.toggle_title());
    }
}

/// Applies the resolved theme, then wires the toggle control when present.
/// The root marker is written either way so a stored preference still styles
/// pages without a toggle; only the click wiring counts as the feature.
pub fn init(ctx: &PageContext) -> bool {
    let stored = ctx
        .storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    set_theme(ctx, resolve(stored.as_deref(), prefers_dark(ctx.window())));

    let Some(toggle) = ctx.query(TOGGLE_SELECTOR) else {
        return false;
    };
    let on_click = Closure::<dyn FnMut()>::new({
        let ctx = ctx.clone();
        move || {
            let marker = ctx
                .document()
                .document_element()
                .and_then(|root| root.get_attribute(ROOT_ATTR));
            // Anything but an explicit dark marker flips to dark.
            let next = match marker.as_deref().and_then(Theme::parse) {
                Some(Theme::Dark) => Theme::Light,
                _ => Theme::Dark,
            };
            set_theme(&ctx, next);
        }
    });
    toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .unwrap_throw();
    on_click.forget();
    true
}

fn prefers_dark(window: &Window) -> bool {
    window
        .match_media(COLOR_SCHEME_QUERY)
        .ok()
        .flatten()
        .is_some_and(|list| list.matches())
}
