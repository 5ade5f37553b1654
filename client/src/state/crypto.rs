//! Crypto widget configuration: the coin catalog and per-instance selection.

#[cfg(test)]
#[path = "crypto_test.rs"]
mod crypto_test;

use crate::state::registry::WidgetKind;
use crate::util::storage::{KeyValueStore, load_json, persist_json};

/// A coin the widget knows how to label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoinInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub image: &'static str,
}

/// Coins offered in the "Add coin" picker.
pub static COIN_CATALOG: [CoinInfo; 6] = [
    CoinInfo {
        id: "bitcoin",
        name: "Bitcoin",
        symbol: "BTC",
        image: "https://assets.coingecko.com/coins/images/1/small/bitcoin.png",
    },
    CoinInfo {
        id: "ethereum",
        name: "Ethereum",
        symbol: "ETH",
        image: "https://assets.coingecko.com/coins/images/279/small/ethereum.png",
    },
    CoinInfo {
        id: "solana",
        name: "Solana",
        symbol: "SOL",
        image: "https://assets.coingecko.com/coins/images/4128/small/solana.png",
    },
    CoinInfo {
        id: "cardano",
        name: "Cardano",
        symbol: "ADA",
        image: "https://assets.coingecko.com/coins/images/975/small/cardano.png",
    },
    CoinInfo {
        id: "polkadot",
        name: "Polkadot",
        symbol: "DOT",
        image: "https://assets.coingecko.com/coins/images/12171/small/polkadot.png",
    },
    CoinInfo {
        id: "binancecoin",
        name: "Binance Coin",
        symbol: "BNB",
        image: "https://assets.coingecko.com/coins/images/825/small/bnb-icon2_2x.png",
    },
];

const DEFAULT_COINS: [&str; 3] = ["bitcoin", "ethereum", "solana"];

/// Catalog entry for `id`, if known.
#[must_use]
pub fn coin_info(id: &str) -> Option<&'static CoinInfo> {
    COIN_CATALOG.iter().find(|c| c.id == id)
}

/// Ordered, duplicate-free set of coins one widget instance tracks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinSelection {
    coins: Vec<String>,
}

impl Default for CoinSelection {
    fn default() -> Self {
        Self { coins: DEFAULT_COINS.iter().map(|c| (*c).to_owned()).collect() }
    }
}

impl CoinSelection {
    /// Load the selection of widget `widget_id`; missing, malformed or empty
    /// values fall back to the defaults.
    pub fn load(store: &impl KeyValueStore, widget_id: &str) -> Self {
        let key = WidgetKind::Crypto.config_key(widget_id);
        match load_json::<Vec<String>>(store, &key) {
            Some(mut coins) if !coins.is_empty() => {
                let mut seen = Vec::with_capacity(coins.len());
                coins.retain(|c| {
                    let fresh = !seen.contains(c);
                    seen.push(c.clone());
                    fresh
                });
                Self { coins }
            }
            _ => Self::default(),
        }
    }

    pub fn save(&self, store: &impl KeyValueStore, widget_id: &str) {
        persist_json(store, &WidgetKind::Crypto.config_key(widget_id), &self.coins);
    }

    pub fn coins(&self) -> &[String] {
        &self.coins
    }

    /// Comma-joined id list used as the price query.
    pub fn query_ids(&self) -> String {
        self.coins.join(",")
    }

    /// Catalog coins not yet selected, in catalog order.
    pub fn available(&self) -> Vec<&'static CoinInfo> {
        COIN_CATALOG.iter().filter(|c| !self.coins.iter().any(|s| s == c.id)).collect()
    }

    /// Add a catalog coin. Unknown or already-selected ids are refused.
    pub fn add(&mut self, id: &str) -> bool {
        if coin_info(id).is_none() || self.coins.iter().any(|c| c == id) {
            return false;
        }
        self.coins.push(id.to_owned());
        true
    }

    /// Remove a coin. The last remaining coin cannot be removed.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.coins.len() <= 1 {
            return false;
        }
        let before = self.coins.len();
        self.coins.retain(|c| c != id);
        self.coins.len() != before
    }

    pub fn can_remove(&self) -> bool {
        self.coins.len() > 1
    }
}
