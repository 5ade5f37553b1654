//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the session, widget layout and theme signals every page reads,
//! then restores them from browser storage once the app is live in the
//! browser. Server rendering sees the defaults with auth still loading, so
//! guarded pages render their spinner on both sides of hydration.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::login::LoginPage;
use crate::pages::settings::SettingsPage;
use crate::pages::workspace::{AnalyticsPage, DashboardPage, DataPage, UsersPage};
use crate::state::{auth::AuthState, theme::ThemeMode, widgets::WidgetStore};
use crate::util::dark_mode;
use crate::util::routes::HOME_PATH;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let widgets = RwSignal::new(WidgetStore::with_defaults(LocalStorage));
    let theme = RwSignal::new(ThemeMode::default());

    provide_context(auth);
    provide_context(widgets);
    provide_context(theme);

    // Effects only run in the browser: restore persisted state after mount.
    Effect::new(move || {
        let mode = dark_mode::read_preference(&LocalStorage);
        dark_mode::apply(mode);
        theme.set(mode);
        widgets.set(WidgetStore::load(LocalStorage));
        auth.set(AuthState::check_auth(&LocalStorage));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/widgetdeck.css"/>
        <Title text="Widget Dashboard"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("data") view=DataPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}
