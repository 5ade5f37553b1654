//! Widget layout: the per-route ordered collection of widget instances.
//!
//! DESIGN
//! ======
//! `WidgetStore` owns the canonical list and the storage handle it flushes
//! to. Every mutation edits the in-memory list first and then writes the whole
//! list back under [`WIDGETS_KEY`]. A failed write is logged and otherwise
//! ignored, leaving the in-memory list authoritative until the next reload.
//!
//! Positions are dense per route: after any mutation the instances of a
//! route carry exactly `0..n`. Mutations on one route never touch another.
//!
//! TRADE-OFFS
//! ==========
//! Two tabs writing the same key race with last-write-wins; there is no
//! detection or merge.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::registry::{WidgetKind, WidgetSize};
use crate::util::storage::{KeyValueStore, load_json, persist_json};

/// Storage key holding the serialized widget list.
pub const WIDGETS_KEY: &str = "widgets";

/// Route that receives the default widgets.
pub const DEFAULT_ROUTE: &str = "/dashboard";

/// One configured widget placed on a route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetInstance {
    /// Unique identifier (UUID v4 string).
    pub id: String,
    /// Widget variant.
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    /// User-visible title.
    pub title: String,
    /// Grid footprint.
    pub size: WidgetSize,
    /// Dense 0-based rank within `route`.
    pub position: usize,
    /// Route path this widget is placed on.
    pub route: String,
}

impl WidgetInstance {
    fn new(kind: WidgetKind, title: String, size: WidgetSize, position: usize, route: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title,
            size,
            position,
            route,
        }
    }

    /// Stored entries with empty identifying fields are treated as corrupt.
    fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.title.is_empty() && !self.route.is_empty()
    }
}

/// The three widgets a fresh profile starts with.
#[must_use]
pub fn default_widgets() -> Vec<WidgetInstance> {
    vec![
        WidgetInstance::new(WidgetKind::Weather, "Weather".to_owned(), WidgetSize::Md, 0, DEFAULT_ROUTE.to_owned()),
        WidgetInstance::new(
            WidgetKind::Crypto,
            "Crypto Prices".to_owned(),
            WidgetSize::Md,
            1,
            DEFAULT_ROUTE.to_owned(),
        ),
        WidgetInstance::new(WidgetKind::Tasks, "Tasks".to_owned(), WidgetSize::Lg, 2, DEFAULT_ROUTE.to_owned()),
    ]
}

/// Rewrite positions so each route holds `0..n`, preserving the existing
/// relative order (ties broken by list order).
fn normalize_positions(widgets: &mut [WidgetInstance]) {
    let mut by_route: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, w) in widgets.iter().enumerate() {
        by_route.entry(w.route.clone()).or_default().push(idx);
    }
    for mut indices in by_route.into_values() {
        indices.sort_by_key(|&i| (widgets[i].position, i));
        for (rank, i) in indices.into_iter().enumerate() {
            widgets[i].position = rank;
        }
    }
}

/// Decode a stored widget list, rejecting it wholesale if any entry is incomplete.
fn decode_stored(storage: &impl KeyValueStore) -> Option<Vec<WidgetInstance>> {
    let widgets: Vec<WidgetInstance> = load_json(storage, WIDGETS_KEY)?;
    if widgets.iter().all(WidgetInstance::is_complete) {
        Some(widgets)
    } else {
        leptos::logging::warn!("stored widget list has incomplete entries; using defaults");
        None
    }
}

/// Owned widget collection bound to its backing store.
#[derive(Clone, Debug)]
pub struct WidgetStore<S> {
    widgets: Vec<WidgetInstance>,
    storage: S,
}

impl<S: KeyValueStore> WidgetStore<S> {
    /// Built-in defaults without touching storage. The browser replaces this
    /// with [`WidgetStore::load`] once hydrated.
    pub fn with_defaults(storage: S) -> Self {
        Self { widgets: default_widgets(), storage }
    }

    /// Load the collection from `storage`, falling back to [`default_widgets`]
    /// when nothing valid is stored. The fallback is not written back until
    /// the first mutation.
    pub fn load(storage: S) -> Self {
        let mut widgets = decode_stored(&storage).unwrap_or_else(default_widgets);
        normalize_positions(&mut widgets);
        Self { widgets, storage }
    }

    /// All instances, across every route, in insertion order.
    pub fn widgets(&self) -> &[WidgetInstance] {
        &self.widgets
    }

    pub fn get(&self, id: &str) -> Option<&WidgetInstance> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Number of instances placed on `route`.
    pub fn route_count(&self, route: &str) -> usize {
        self.widgets.iter().filter(|w| w.route == route).count()
    }

    /// Instances on `route`, sorted by position.
    pub fn route_view(&self, route: &str) -> Vec<WidgetInstance> {
        let mut view: Vec<WidgetInstance> = self.widgets.iter().filter(|w| w.route == route).cloned().collect();
        view.sort_by_key(|w| w.position);
        view
    }

    /// Append a medium-sized widget at the end of `route`. Returns its id.
    pub fn add(&mut self, kind: WidgetKind, title: impl Into<String>, route: &str) -> String {
        self.add_sized(kind, title, WidgetSize::default(), route)
    }

    /// Append a widget of the given size at the end of `route`. Returns its id.
    pub fn add_sized(&mut self, kind: WidgetKind, title: impl Into<String>, size: WidgetSize, route: &str) -> String {
        let position = self.route_count(route);
        let widget = WidgetInstance::new(kind, title.into(), size, position, route.to_owned());
        let id = widget.id.clone();
        self.widgets.push(widget);
        self.flush();
        id
    }

    /// Delete `id` and close the gap it leaves on its route.
    /// Returns `false` (and writes nothing) when `id` is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(idx) = self.widgets.iter().position(|w| w.id == id) else {
            return false;
        };
        let removed = self.widgets.remove(idx);
        self.forget_config(&removed);
        for w in &mut self.widgets {
            if w.route == removed.route && w.position > removed.position {
                w.position -= 1;
            }
        }
        self.flush();
        true
    }

    /// Assign positions on `route` following `ordered_ids`.
    ///
    /// Ids that are not on `route` are ignored. Route instances missing from
    /// `ordered_ids` keep their relative order and are placed after the
    /// listed ones.
    pub fn reorder_within_route<T: AsRef<str>>(&mut self, route: &str, ordered_ids: &[T]) {
        let current: Vec<String> = self.route_view(route).into_iter().map(|w| w.id).collect();

        let mut order: Vec<&str> = Vec::with_capacity(current.len());
        for id in ordered_ids {
            let id = id.as_ref();
            if current.iter().any(|c| c == id) && !order.contains(&id) {
                order.push(id);
            }
        }
        for id in &current {
            if !order.contains(&id.as_str()) {
                order.push(id.as_str());
            }
        }

        let ranks: HashMap<&str, usize> = order.iter().enumerate().map(|(rank, id)| (*id, rank)).collect();
        for w in &mut self.widgets {
            if w.route == route {
                if let Some(rank) = ranks.get(w.id.as_str()) {
                    w.position = *rank;
                }
            }
        }
        self.flush();
    }

    /// Drag-and-drop: move `active_id` to the slot currently held by
    /// `over_id` on `route`, shifting the widgets in between.
    /// Returns `false` for a drop onto itself or onto an unknown widget.
    pub fn move_within_route(&mut self, route: &str, active_id: &str, over_id: &str) -> bool {
        if active_id == over_id {
            return false;
        }
        let mut ids: Vec<String> = self.route_view(route).into_iter().map(|w| w.id).collect();
        let (Some(from), Some(to)) = (
            ids.iter().position(|id| id == active_id),
            ids.iter().position(|id| id == over_id),
        ) else {
            return false;
        };
        let moved = ids.remove(from);
        ids.insert(to, moved);
        self.reorder_within_route(route, &ids);
        true
    }

    /// Change the size of `id`. Positions are untouched.
    pub fn resize(&mut self, id: &str, size: WidgetSize) -> bool {
        let Some(widget) = self.widgets.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        widget.size = size;
        self.flush();
        true
    }

    /// Advance `id` to the next size in the `sm -> md -> lg` cycle.
    pub fn cycle_size(&mut self, id: &str) -> Option<WidgetSize> {
        let next = self.get(id)?.size.next();
        self.resize(id, next);
        Some(next)
    }

    /// Replace everything with the default widgets.
    pub fn reset(&mut self) {
        for widget in &self.widgets {
            self.forget_config(widget);
        }
        self.widgets = default_widgets();
        self.flush();
    }

    fn flush(&self) {
        persist_json(&self.storage, WIDGETS_KEY, &self.widgets);
    }

    /// Drop the per-instance config entry of a widget leaving the layout.
    fn forget_config(&self, widget: &WidgetInstance) {
        let key = widget.kind.config_key(&widget.id);
        if let Err(e) = self.storage.remove(&key) {
            leptos::logging::warn!("failed to clear {key}: {e}");
        }
    }
}
