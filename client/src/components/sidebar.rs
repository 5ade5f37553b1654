//! Left navigation listing the dashboard routes.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::routes::AppRoute;

/// Whether `route` is the page shown at `pathname`.
pub fn is_active(route: AppRoute, pathname: &str) -> bool {
    AppRoute::from_path(pathname) == Some(route)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Dashboard"</div>
            <nav class="sidebar__nav">
                {AppRoute::NAV
                    .into_iter()
                    .map(|route| {
                        view! {
                            <a
                                class="sidebar__link"
                                class:sidebar__link--active=move || is_active(route, &pathname.get())
                                href=route.path()
                            >
                                <span class="sidebar__icon">{route.icon()}</span>
                                <span class="sidebar__label">{route.label()}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
