//! Live price list for a user-chosen set of coins.
//!
//! SYSTEM CONTEXT
//! ==============
//! The coin selection is stored per widget instance. Any change to it saves
//! the selection and restarts the poll loop (fetch now, then every
//! `CRYPTO_POLL_INTERVAL`). Only catalog coins can be added and the last
//! remaining coin cannot be removed.

#[cfg(test)]
#[path = "crypto_widget_test.rs"]
mod crypto_widget_test;

use leptos::prelude::*;

use crate::config::{CRYPTO_POLL_INTERVAL, ClientConfig};
use crate::net::types::CryptoQuote;
use crate::state::crypto::CoinSelection;
use crate::state::remote::FetchState;
use crate::util::poll::Poller;
use crate::util::storage::LocalStorage;

/// Group the integer digits of an already formatted number in threes.
fn group_thousands(formatted: &str) -> String {
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted, ""));
    let (sign, int_part) = int_part.strip_prefix('-').map_or(("", int_part), |rest| ("-", rest));
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(formatted.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// USD price with two decimals, or up to six for sub-dollar coins.
pub fn format_price(usd: f64) -> String {
    if usd.abs() >= 1.0 {
        format!("${}", group_thousands(&format!("{usd:.2}")))
    } else {
        format!("${usd:.6}")
    }
}

/// Signed 24h change with two decimals.
pub fn format_change(percent: f64) -> String {
    if percent >= 0.0 { format!("+{percent:.2}%") } else { format!("{percent:.2}%") }
}

#[component]
pub fn CryptoWidget(widget_id: String) -> impl IntoView {
    let config = ClientConfig::from_build_env();
    let selection = RwSignal::new(CoinSelection::load(&LocalStorage, &widget_id));
    let state = RwSignal::new(FetchState::<Vec<CryptoQuote>>::default());

    let refresh = move |coins: Vec<String>| {
        state.update(FetchState::begin);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::crypto::fetch_prices(&coins, config.coingecko_api_key).await {
                Ok(quotes) => state.update(|s| s.succeed(quotes)),
                Err(e) => {
                    leptos::logging::warn!("crypto fetch failed: {e}");
                    state.update(|s| s.fail(crate::net::crypto::FETCH_FAILED_MESSAGE));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (coins, config);
    };

    let poller = Poller::new();
    let poll = poller.clone();
    Effect::new(move || {
        let coins = selection.with(|s| s.coins().to_vec());
        poll.restart(CRYPTO_POLL_INTERVAL, move || refresh(coins.clone()));
    });
    on_cleanup(move || poller.stop());

    let add_id = widget_id.clone();
    let on_add = move |ev: leptos::ev::Event| {
        let coin = event_target_value(&ev);
        if coin.is_empty() {
            return;
        }
        let mut next = selection.get_untracked();
        if next.add(&coin) {
            next.save(&LocalStorage, &add_id);
            selection.set(next);
        }
    };

    let remove_coin = move |coin: String| {
        let mut next = selection.get_untracked();
        if next.remove(&coin) {
            next.save(&LocalStorage, &widget_id);
            selection.set(next);
        }
    };

    view! {
        <div class="crypto">
            {move || state.with(|s| s.error.clone()).map(|message| view! { <p class="widget-error">{message}</p> })}

            <Show when=move || state.with(FetchState::shows_spinner)>
                <div class="spinner"></div>
            </Show>

            <ul class="crypto__list">
                {move || {
                    let can_remove = selection.with(CoinSelection::can_remove);
                    state
                        .with(|s| s.data.clone())
                        .unwrap_or_default()
                        .into_iter()
                        .map(|quote| {
                            let remove_coin = remove_coin.clone();
                            let coin = quote.id.clone();
                            view! {
                                <li class="crypto__row">
                                    <img class="crypto__logo" src=quote.image.clone() alt=quote.symbol.clone()/>
                                    <span class="crypto__name">{quote.name.clone()}</span>
                                    <span class="crypto__symbol">{quote.symbol.clone()}</span>
                                    <span class="crypto__price">{format_price(quote.price)}</span>
                                    <span
                                        class="crypto__change"
                                        class:crypto__change--up=quote.is_up()
                                        class:crypto__change--down=!quote.is_up()
                                    >
                                        {format_change(quote.change_24h)}
                                    </span>
                                    <button
                                        class="widget__action"
                                        title="Remove coin"
                                        disabled=!can_remove
                                        on:click=move |_| remove_coin(coin.clone())
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            <Show when=move || selection.with(|s| !s.available().is_empty())>
                <select class="input crypto__add" on:change=on_add.clone() prop:value="">
                    <option value="">"Add coin…"</option>
                    {move || {
                        selection
                            .with(CoinSelection::available)
                            .into_iter()
                            .map(|coin| view! { <option value=coin.id>{coin.name}</option> })
                            .collect_view()
                    }}
                </select>
            </Show>
        </div>
    }
}
