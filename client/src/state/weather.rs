//! Weather widget configuration: the last searched location.

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use crate::state::registry::WidgetKind;
use crate::util::storage::{KeyValueStore, load_json, persist_json};

pub const DEFAULT_LOCATION: &str = "London";

/// Message shown for a blank search.
pub const EMPTY_LOCATION_MESSAGE: &str = "Please enter a city name";

/// Stored location of widget `widget_id`, or [`DEFAULT_LOCATION`].
pub fn load_location(store: &impl KeyValueStore, widget_id: &str) -> String {
    load_json::<String>(store, &WidgetKind::Weather.config_key(widget_id))
        .filter(|loc| !loc.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_owned())
}

pub fn save_location(store: &impl KeyValueStore, widget_id: &str, location: &str) {
    persist_json(store, &WidgetKind::Weather.config_key(widget_id), &location);
}

/// Validate a search box value.
///
/// # Errors
///
/// Returns [`EMPTY_LOCATION_MESSAGE`] when the query is blank.
pub fn normalize_search(query: &str) -> Result<String, &'static str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(EMPTY_LOCATION_MESSAGE)
    } else {
        Ok(trimmed.to_owned())
    }
}
