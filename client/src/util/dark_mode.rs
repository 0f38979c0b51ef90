//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage;

const STORAGE_KEY: &str = "userdeck_dark";

fn theme_attr(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

fn parse_stored(raw: &str) -> bool {
    raw == "true"
}

/// Read the dark mode preference.
///
/// A stored value wins; otherwise the system `prefers-color-scheme` applies.
pub fn read_preference() -> bool {
    if let Some(raw) = storage::load_raw(STORAGE_KEY) {
        return parse_stored(&raw);
    }
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", theme_attr(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme_attr(enabled);
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::save_raw(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
