//! Presence-guarded page features.
//!
//! Every controller exposes the same contract: `init(&PageContext) -> bool`,
//! where `true` means the feature found its anchors and is now live. The
//! table below is walked once at startup; features are independent and an
//! inactive one never affects the rest.

pub mod contact_form;
pub mod filter;
pub mod menu;
pub mod reveal;
pub mod scroll_top;
pub mod theme;

use crate::context::PageContext;

/// One entry in the feature table.
pub struct Feature {
    pub name: &'static str,
    pub init: fn(&PageContext) -> bool,
}

/// Every feature the crate can attach, in activation order.
pub static FEATURES: [Feature; 6] = [
    Feature {
        name: "theme",
        init: theme::init,
    },
    Feature {
        name: "menu",
        init: menu::init,
    },
    Feature {
        name: "scroll-top",
        init: scroll_top::init,
    },
    Feature {
        name: "reveal",
        init: reveal::init,
    },
    Feature {
        name: "filter",
        init: filter::init,
    },
    Feature {
        name: "contact-form",
        init: contact_form::init,
    },
];

/// Invokes every initializer and returns how many features went live.
pub fn activate_all(ctx: &PageContext) -> usize {
    let mut active = 0;
    for feature in &FEATURES {
        if (feature.init)(ctx) {
            log::debug!("feature `{}` active", feature.name);
            active += 1;
        } else {
            log::debug!("feature `{}` inactive, anchors not found", feature.name);
        }
    }
    active
}
