//! Current-weather card for one city.
//!
//! SYSTEM CONTEXT
//! ==============
//! The city is stored per widget instance. Changing it saves the new value
//! and restarts the poll loop, which fetches at once and then every
//! `WEATHER_POLL_INTERVAL`. A failed poll keeps the last reading on screen
//! next to the error message.

#[cfg(test)]
#[path = "weather_widget_test.rs"]
mod weather_widget_test;

use leptos::prelude::*;

use crate::config::{ClientConfig, WEATHER_POLL_INTERVAL};
use crate::net::types::WeatherData;
use crate::state::remote::FetchState;
use crate::state::weather::{load_location, normalize_search, save_location};
use crate::util::poll::Poller;
use crate::util::storage::LocalStorage;

pub fn format_temperature(celsius: i32) -> String {
    format!("{celsius}°C")
}

pub fn format_wind(km_h: i32) -> String {
    format!("{km_h} km/h")
}

#[component]
pub fn WeatherWidget(widget_id: String) -> impl IntoView {
    let config = ClientConfig::from_build_env();
    if !config.has_weather_key() {
        leptos::logging::warn!("OPENWEATHER_API_KEY was not set at build time; weather requests will be rejected");
    }
    let location = RwSignal::new(load_location(&LocalStorage, &widget_id));
    let search = RwSignal::new(location.get_untracked());
    let state = RwSignal::new(FetchState::<WeatherData>::default());

    let refresh = move |loc: String| {
        state.update(FetchState::begin);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::weather::fetch_weather(&loc, config.openweather_api_key).await {
                Ok(data) => state.update(|s| s.succeed(data)),
                Err(e) => {
                    leptos::logging::warn!("weather fetch for {loc} failed: {e}");
                    state.update(|s| s.fail(crate::net::weather::error_message(&e)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (loc, config);
    };

    let poller = Poller::new();
    let poll = poller.clone();
    Effect::new(move || {
        let loc = location.get();
        poll.restart(WEATHER_POLL_INTERVAL, move || refresh(loc.clone()));
    });
    on_cleanup(move || poller.stop());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match normalize_search(&search.get_untracked()) {
            Ok(loc) => {
                save_location(&LocalStorage, &widget_id, &loc);
                search.set(loc.clone());
                location.set(loc);
            }
            Err(message) => state.update(|s| s.fail(message)),
        }
    };

    view! {
        <div class="weather">
            <form class="weather__search" on:submit=on_search>
                <input
                    class="input"
                    type="text"
                    placeholder="Enter city name"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Search"</button>
            </form>

            {move || state.with(|s| s.error.clone()).map(|message| view! { <p class="widget-error">{message}</p> })}

            <Show when=move || state.with(FetchState::shows_spinner)>
                <div class="spinner"></div>
            </Show>

            {move || {
                state
                    .with(|s| s.data.clone())
                    .map(|data| {
                        view! {
                            <div class="weather__reading">
                                <div class="weather__headline">
                                    <img class="weather__icon" src=data.icon_url() alt=data.description.clone()/>
                                    <div>
                                        <div class="weather__temp">{format_temperature(data.temperature)}</div>
                                        <div class="weather__location">{data.location.clone()}</div>
                                    </div>
                                </div>
                                <p class="weather__description">{data.description.clone()}</p>
                                <dl class="weather__details">
                                    <dt>"Humidity"</dt>
                                    <dd>{format!("{}%", data.humidity)}</dd>
                                    <dt>"Wind"</dt>
                                    <dd>{format_wind(data.wind_speed)}</dd>
                                </dl>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
