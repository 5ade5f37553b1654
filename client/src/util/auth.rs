//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior, driven by the
//! policy in `util::routes`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::routes::redirect_for;

/// Redirect target for `path` once the startup session check has finished.
/// While the check is still running no redirect is issued.
pub fn guard_target(state: &AuthState, path: &str) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    redirect_for(path, state.is_authenticated())
}

/// Whether protected page content may render: the startup check is done
/// and a session exists.
pub fn session_ready(state: &AuthState) -> bool {
    !state.loading && state.is_authenticated()
}

/// Keep the page at `path` consistent with the session: re-evaluated every
/// time auth state changes.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, path: &'static str, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some(target) = guard_target(&state, path) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
