//! # client
//!
//! Leptos + WASM frontend for the widget dashboard.
//!
//! This crate contains the route pages, the shell and widget components,
//! the persisted client state (session, layout, theme and per-widget
//! configuration), and the HTTP clients for the weather and crypto feeds.
//! The same crate is rendered on the server (`ssr`) and hydrated in the
//! browser (`hydrate`).

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated JS glue after the WASM
/// module loads.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
