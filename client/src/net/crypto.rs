//! CoinGecko simple-price client.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "crypto_test.rs"]
mod crypto_test;

use std::collections::HashMap;

use serde::Deserialize;

use super::FetchError;
use super::types::CryptoQuote;
use crate::state::crypto::{COIN_CATALOG, coin_info};

pub const PRICE_ENDPOINT: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Message shown for any failed price poll.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch crypto data. Please try again later.";

#[derive(Debug, Deserialize)]
struct CoinPrice {
    usd: f64,
    #[serde(default)]
    usd_24h_change: Option<f64>,
}

/// Query parameters for the comma-joined coin id list.
pub fn price_query(ids: &str) -> [(&'static str, &str); 4] {
    [
        ("ids", ids),
        ("vs_currencies", "usd"),
        ("include_24hr_change", "true"),
        ("include_last_updated_at", "true"),
    ]
}

/// Decode a provider body into quotes, in the order of `selected`.
///
/// Coins outside the catalog are labelled by their id and use the Bitcoin
/// logo.
///
/// # Errors
///
/// Returns `FetchError::Decode` for a malformed body or when a selected coin
/// has no price in it.
pub fn parse_prices(body: &str, selected: &[String]) -> Result<Vec<CryptoQuote>, FetchError> {
    let prices: HashMap<String, CoinPrice> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    selected
        .iter()
        .map(|id| {
            let price = prices
                .get(id)
                .ok_or_else(|| FetchError::Decode(format!("no price for {id}")))?;
            let info = coin_info(id);
            Ok(CryptoQuote {
                id: id.clone(),
                name: info.map_or_else(|| id.clone(), |c| c.name.to_owned()),
                symbol: info.map_or_else(|| id.to_uppercase(), |c| c.symbol.to_owned()),
                price: price.usd,
                change_24h: price.usd_24h_change.unwrap_or(0.0),
                image: info.map_or(COIN_CATALOG[0].image, |c| c.image).to_owned(),
            })
        })
        .collect()
}

/// Fetch USD prices for `selected`.
///
/// # Errors
///
/// Returns a [`FetchError`] on network failure, non-2xx status or an
/// undecodable body. Outside the browser always `FetchError::Unavailable`.
pub async fn fetch_prices(selected: &[String], api_key: &str) -> Result<Vec<CryptoQuote>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let ids = selected.join(",");
        let mut request = gloo_net::http::Request::get(PRICE_ENDPOINT)
            .query(price_query(&ids))
            .header("accept", "application/json");
        if !api_key.is_empty() {
            request = request.header("x-cg-demo-api-key", api_key);
        }
        let resp = request.send().await.map_err(|e| FetchError::Network(e.to_string()))?;
        super::check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
        parse_prices(&body, selected)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (selected, api_key);
        Err(FetchError::Unavailable)
    }
}
