//! Theme initialization and toggle against the live document.
//!
//! Reads the stored mode (falling back to the system color-scheme
//! preference) and reflects it as the `dark` class on the `<html>` element.
//! Toggle writes back to storage and updates the class. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeMode;
use crate::util::storage::KeyValueStore;

#[cfg(feature = "hydrate")]
const TRANSITION_MS: u32 = 300;

/// Whether the OS/browser asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
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

/// Read the effective theme mode.
pub fn read_preference(store: &impl KeyValueStore) -> ThemeMode {
    ThemeMode::load(store, system_prefers_dark())
}

/// Apply or remove the `dark` class on `<html>`, with a short-lived
/// `theme-transition` class so colors animate.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let class_list = el.class_list();
        let _ = class_list.add_1("theme-transition");
        if mode.is_dark() {
            let _ = class_list.add_1("dark");
        } else {
            let _ = class_list.remove_1("dark");
        }
        let _ = gloo_timers::callback::Timeout::new(TRANSITION_MS, move || {
            let _ = class_list.remove_1("theme-transition");
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Flip `current`, persist the result and apply it to the document.
pub fn toggle(store: &impl KeyValueStore, current: ThemeMode) -> ThemeMode {
    let next = current.toggled();
    next.save(store);
    apply(next);
    next
}
