//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `widgets`, per-widget configuration)
//! so individual components can depend on small focused models. Each model
//! is plain data plus a `KeyValueStore` handle; components wrap them in
//! `RwSignal`s.

pub mod auth;
pub mod crypto;
pub mod registry;
pub mod remote;
pub mod tasks;
pub mod theme;
pub mod weather;
pub mod widgets;
