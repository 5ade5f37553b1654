//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Dashboard routes wrap themselves in `DashboardLayout`.

pub mod login;
pub mod settings;
pub mod workspace;
