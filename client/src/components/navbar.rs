//! Top bar with the page title, add-widget menu, theme toggle and session
//! controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! New widgets land on the route the navbar is rendered for. Logging out
//! only clears the session; the layout's route guard performs the redirect.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::registry::WidgetKind;
use crate::state::theme::ThemeMode;
use crate::state::widgets::WidgetStore;
use crate::util::dark_mode;
use crate::util::routes::AppRoute;
use crate::util::storage::LocalStorage;

/// Heading for the page at `route`.
pub fn page_title(route: &str) -> &'static str {
    AppRoute::from_path(route).map_or("Dashboard", AppRoute::label)
}

#[component]
pub fn Navbar(route: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let widgets = expect_context::<RwSignal<WidgetStore<LocalStorage>>>();
    let theme = expect_context::<RwSignal<ThemeMode>>();
    let menu_open = RwSignal::new(false);

    let add_widget = move |kind: WidgetKind| {
        widgets.update(|w| {
            let id = w.add(kind, kind.default_title(), route);
            leptos::logging::log!("added {} widget {id} to {route}", kind.tag());
        });
        menu_open.set(false);
    };

    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <header class="navbar">
            <h1 class="navbar__title">{page_title(route)}</h1>
            <span class="navbar__spacer"></span>

            <div class="navbar__menu">
                <button class="btn btn--primary" on:click=move |_| menu_open.update(|open| *open = !*open)>
                    "Add Widget"
                </button>
                <Show when=move || menu_open.get()>
                    <ul class="navbar__dropdown">
                        {WidgetKind::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <li>
                                        <button class="navbar__dropdown-item" on:click=move |_| add_widget(kind)>
                                            {kind.menu_label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </div>

            <button
                class="btn navbar__theme-toggle"
                title="Toggle dark mode"
                on:click=move |_| theme.set(dark_mode::toggle(&LocalStorage, theme.get_untracked()))
            >
                {move || if theme.get().is_dark() { "☀" } else { "☾" }}
            </button>

            <span class="navbar__user">{user_name}</span>

            <button class="btn navbar__logout" on:click=move |_| auth.update(|a| a.logout(&LocalStorage))>
                "Logout"
            </button>
        </header>
    }
}
