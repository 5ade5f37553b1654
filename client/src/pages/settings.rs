//! Settings page: appearance, layout reset and sign-out.

use leptos::prelude::*;

use crate::components::dashboard_layout::DashboardLayout;
use crate::state::auth::AuthState;
use crate::state::theme::ThemeMode;
use crate::state::widgets::WidgetStore;
use crate::util::dark_mode;
use crate::util::routes::AppRoute;
use crate::util::storage::LocalStorage;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let widgets = expect_context::<RwSignal<WidgetStore<LocalStorage>>>();
    let theme = expect_context::<RwSignal<ThemeMode>>();
    let reset_done = RwSignal::new(false);

    let on_reset = move |_| {
        widgets.update(WidgetStore::reset);
        reset_done.set(true);
        leptos::logging::log!("widget layout reset to defaults");
    };

    view! {
        <DashboardLayout route=AppRoute::Settings.path()>
            <div class="settings">
                <section class="card settings__section">
                    <h2>"Appearance"</h2>
                    <p>{move || if theme.get().is_dark() { "Dark mode is on." } else { "Light mode is on." }}</p>
                    <button
                        class="btn"
                        on:click=move |_| theme.set(dark_mode::toggle(&LocalStorage, theme.get_untracked()))
                    >
                        {move || theme.get().toggle_label()}
                    </button>
                </section>

                <section class="card settings__section">
                    <h2>"Layout"</h2>
                    <p>"Remove every widget on every page and restore the default dashboard."</p>
                    <button class="btn btn--danger" on:click=on_reset>"Reset layout"</button>
                    <Show when=move || reset_done.get()>
                        <p class="settings__note">"Layout restored."</p>
                    </Show>
                </section>

                <section class="card settings__section">
                    <h2>"Account"</h2>
                    <p>{move || auth.with(|a| a.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}</p>
                    <button class="btn" on:click=move |_| auth.update(|a| a.logout(&LocalStorage))>"Logout"</button>
                </section>
            </div>
        </DashboardLayout>
    }
}
