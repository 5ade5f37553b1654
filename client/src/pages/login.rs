//! Login page for the demo account.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form starts filled with the demo credentials. A successful login
//! updates the shared session; the route guard then moves the visitor to
//! the dashboard, which also covers arriving here already signed in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, DEMO_EMAIL, DEMO_PASSWORD};
use crate::state::theme::ThemeMode;
use crate::util::auth::install_route_guard;
use crate::util::dark_mode;
use crate::util::routes::LOGIN_PATH;
use crate::util::storage::LocalStorage;

/// Hint shown under the form.
pub fn demo_hint() -> String {
    format!("{DEMO_EMAIL} / {DEMO_PASSWORD}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<RwSignal<ThemeMode>>();
    install_route_guard(auth, LOGIN_PATH, use_navigate());

    let email = RwSignal::new(DEMO_EMAIL.to_owned());
    let password = RwSignal::new(DEMO_PASSWORD.to_owned());
    let form_error = move || auth.with(|a| a.error.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        auth.update(|a| {
            if let Err(e) = a.login(&LocalStorage, &email_value, &password_value) {
                leptos::logging::warn!("login rejected: {e}");
            }
        });
    };

    let clear_error = move || {
        if auth.with_untracked(|a| a.error.is_some()) {
            auth.update(AuthState::clear_error);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card card">
                <div class="login-card__header">
                    <h1>"Sign in to your account"</h1>
                    <button
                        class="btn navbar__theme-toggle"
                        title=move || theme.get().toggle_label()
                        on:click=move |_| theme.set(dark_mode::toggle(&LocalStorage, theme.get_untracked()))
                    >
                        {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                    </button>
                </div>
                <form class="login-form" on:submit=on_submit>
                    {move || form_error().map(|message| view! { <div class="form-error">{message}</div> })}
                    <label class="login-form__label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            clear_error();
                            email.set(event_target_value(&ev));
                        }
                    />
                    <label class="login-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            clear_error();
                            password.set(event_target_value(&ev));
                        }
                    />
                    <button class="btn btn--primary login-form__submit" type="submit">"Sign in"</button>
                </form>
                <p class="login-card__hint">
                    <span class="badge">"Demo credentials:"</span>
                    " "
                    {demo_hint()}
                </p>
            </div>
        </div>
    }
}
