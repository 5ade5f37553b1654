//! Build-time client configuration.
//!
//! API keys for the public data providers are baked in at compile time from
//! `OPENWEATHER_API_KEY` and `COINGECKO_API_KEY`; an unset key compiles to an
//! empty string and the provider answers with an error the widget displays.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Refresh cadence of the crypto widget.
pub const CRYPTO_POLL_INTERVAL: Duration = Duration::from_secs(60);
/// Refresh cadence of the weather widget.
pub const WEATHER_POLL_INTERVAL: Duration = Duration::from_secs(300);

/// Provider credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub openweather_api_key: &'static str,
    pub coingecko_api_key: &'static str,
}

impl ClientConfig {
    /// Read the keys captured when the crate was compiled.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            openweather_api_key: option_env!("OPENWEATHER_API_KEY").unwrap_or_default(),
            coingecko_api_key: option_env!("COINGECKO_API_KEY").unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn has_weather_key(&self) -> bool {
        !self.openweather_api_key.is_empty()
    }
}
