use super::*;

#[test]
fn poll_intervals_match_provider_cadence() {
    assert_eq!(CRYPTO_POLL_INTERVAL, Duration::from_secs(60));
    assert_eq!(WEATHER_POLL_INTERVAL, Duration::from_secs(300));
}

#[test]
fn has_weather_key_reflects_value() {
    let config = ClientConfig { openweather_api_key: "", coingecko_api_key: "k" };
    assert!(!config.has_weather_key());
    let config = ClientConfig { openweather_api_key: "k", ..config };
    assert!(config.has_weather_key());
}

#[test]
fn from_build_env_is_constructible() {
    let config = ClientConfig::from_build_env();
    assert_eq!(config.has_weather_key(), !config.openweather_api_key.is_empty());
}
