//! Authenticated page chrome: sidebar, navbar and the page body.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route renders inside this layout. It installs the route
//! guard and holds the body back behind a spinner until the startup session
//! check has run, so server and browser render the same markup.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::{install_route_guard, session_ready};

#[component]
pub fn DashboardLayout(route: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, route, use_navigate());

    view! {
        <Show
            when=move || auth.with(session_ready)
            fallback=|| {
                view! {
                    <div class="app-loading">
                        <div class="spinner"></div>
                    </div>
                }
            }
        >
            <div class="layout">
                <Sidebar/>
                <div class="layout__main">
                    <Navbar route=route/>
                    <main class="layout__content">{children()}</main>
                </div>
            </div>
        </Show>
    }
}
