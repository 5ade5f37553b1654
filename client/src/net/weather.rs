//! OpenWeatherMap current-conditions client.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as [`FetchError`]; [`error_message`] turns them into the
//! widget-local text. Nothing is retried here, the widget's next poll is the
//! retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

use serde::Deserialize;

use super::FetchError;
use super::types::WeatherData;

pub const WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Deserialize)]
struct OwmResponse {
    name: String,
    main: OwmMain,
    weather: Vec<OwmCondition>,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

/// Query parameters for `location` in metric units.
pub fn weather_query<'a>(location: &'a str, api_key: &'a str) -> [(&'static str, &'a str); 3] {
    [("q", location.trim()), ("appid", api_key), ("units", "metric")]
}

/// Decode a provider body into the widget view model.
///
/// Temperature is rounded to whole °C; wind speed is converted from m/s to
/// whole km/h.
///
/// # Errors
///
/// Returns `FetchError::Decode` when the body does not have the expected shape.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_weather(body: &str) -> Result<WeatherData, FetchError> {
    let raw: OwmResponse = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let condition = raw
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Decode("missing weather conditions".to_owned()))?;
    Ok(WeatherData {
        location: raw.name,
        temperature: raw.main.temp.round() as i32,
        description: condition.description,
        icon: condition.icon,
        humidity: raw.main.humidity,
        wind_speed: (raw.wind.speed * 3.6).round() as i32,
    })
}

/// Widget-facing text for a failed weather poll.
#[must_use]
pub fn error_message(err: &FetchError) -> &'static str {
    match err {
        FetchError::NotFound => "City not found. Please check the spelling and try again.",
        _ => "Failed to fetch weather data. Please try again later.",
    }
}

/// Fetch current conditions for `location`.
///
/// # Errors
///
/// Returns a [`FetchError`] on network failure, non-2xx status or a body that
/// cannot be decoded. Outside the browser always `FetchError::Unavailable`.
pub async fn fetch_weather(location: &str, api_key: &str) -> Result<WeatherData, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(WEATHER_ENDPOINT)
            .query(weather_query(location, api_key))
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        super::check_status(resp.status())?;
        let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
        parse_weather(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (location, api_key);
        Err(FetchError::Unavailable)
    }
}
