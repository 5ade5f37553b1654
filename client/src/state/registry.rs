//! Widget variants and sizes.
//!
//! DESIGN
//! ======
//! The type tag and size strings are the persisted wire format, so the serde
//! names here must stay stable across releases.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use serde::{Deserialize, Serialize};

/// The renderable widget variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Weather,
    Crypto,
    Tasks,
}

impl WidgetKind {
    /// Every variant, in add-menu order.
    pub const ALL: [WidgetKind; 3] = [WidgetKind::Weather, WidgetKind::Crypto, WidgetKind::Tasks];

    /// Persisted type tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Crypto => "crypto",
            Self::Tasks => "tasks",
        }
    }

    /// Title given to a freshly added instance.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Weather => "Weather",
            Self::Crypto => "Crypto Prices",
            Self::Tasks => "Tasks",
        }
    }

    /// Label in the navbar "Add Widget" menu.
    #[must_use]
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Weather => "Weather Widget",
            Self::Crypto => "Crypto Prices Widget",
            Self::Tasks => "Tasks Widget",
        }
    }

    /// Prefix of the per-instance configuration key.
    #[must_use]
    pub fn config_key_prefix(self) -> &'static str {
        match self {
            Self::Weather => "weatherLocation",
            Self::Crypto => "cryptoCoins",
            Self::Tasks => "tasks",
        }
    }

    /// Storage key holding the configuration of instance `id`.
    #[must_use]
    pub fn config_key(self, id: &str) -> String {
        format!("{}-{id}", self.config_key_prefix())
    }
}

/// Grid footprint of a widget instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl WidgetSize {
    /// Next size in the resize cycle `sm -> md -> lg -> sm`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Sm => Self::Md,
            Self::Md => Self::Lg,
            Self::Lg => Self::Sm,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// CSS modifier controlling how many grid columns the widget spans.
    #[must_use]
    pub fn grid_class(self) -> &'static str {
        match self {
            Self::Sm => "widget-grid__cell widget-grid__cell--sm",
            Self::Md => "widget-grid__cell widget-grid__cell--md",
            Self::Lg => "widget-grid__cell widget-grid__cell--lg",
        }
    }
}
