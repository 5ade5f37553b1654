//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! document classes, navigation policy) from page and component logic to
//! improve reuse and testability.

pub mod auth;
pub mod dark_mode;
pub mod poll;
pub mod routes;
pub mod storage;
pub mod time;
