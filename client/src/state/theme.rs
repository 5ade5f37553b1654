//! Light/dark theme preference.
//!
//! DESIGN
//! ======
//! The mode is a presentation-only value: it is persisted under
//! [`THEME_KEY`] and mirrored onto the document by `util::dark_mode`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::{KeyValueStore, load_json, persist_json};

/// Storage key for the theme mode.
pub const THEME_KEY: &str = "theme";

/// Two-valued theme mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Accessible label for the toggle button.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }

    /// Stored preference, else `system_prefers_dark`, else light.
    pub fn load(store: &impl KeyValueStore, system_prefers_dark: bool) -> Self {
        load_json(store, THEME_KEY).unwrap_or(if system_prefers_dark { Self::Dark } else { Self::Light })
    }

    pub fn save(self, store: &impl KeyValueStore) {
        persist_json(store, THEME_KEY, &self);
    }
}
