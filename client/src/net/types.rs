//! Shared data shapes for session identity and widget feeds.
//!
//! DESIGN
//! ======
//! `User` is persisted verbatim under the `user` storage key, so its serde
//! field names are part of the stored format. The feed types are the
//! already-normalized view models widgets render, not provider payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Avatar image URL, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Current conditions for one location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Resolved location name as reported by the provider.
    pub location: String,
    /// Temperature in whole degrees Celsius.
    pub temperature: i32,
    /// Human-readable conditions, e.g. `"light rain"`.
    pub description: String,
    /// Provider icon code, e.g. `"10d"`.
    pub icon: String,
    /// Relative humidity in percent.
    pub humidity: u8,
    /// Wind speed in whole km/h.
    pub wind_speed: i32,
}

impl WeatherData {
    /// URL of the provider's icon image.
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }
}

/// Spot price for one coin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CryptoQuote {
    /// Provider coin id, e.g. `"bitcoin"`.
    pub id: String,
    /// Display name, e.g. `"Bitcoin"`.
    pub name: String,
    /// Ticker symbol, e.g. `"BTC"`.
    pub symbol: String,
    /// USD price.
    pub price: f64,
    /// 24-hour change in percent.
    pub change_24h: f64,
    /// Logo image URL.
    pub image: String,
}

impl CryptoQuote {
    /// `true` when the 24h change is zero or positive.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.change_24h >= 0.0
    }
}
