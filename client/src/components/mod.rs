//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome (sidebar, navbar, layout) and the
//! widget grid while reading/writing shared state from Leptos context
//! providers. Widget bodies own their configuration and polling.

pub mod crypto_widget;
pub mod dashboard_layout;
pub mod navbar;
pub mod sidebar;
pub mod tasks_widget;
pub mod weather_widget;
pub mod widget_frame;
pub mod widget_grid;
