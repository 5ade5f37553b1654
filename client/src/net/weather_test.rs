use super::*;

const LONDON: &str = r#"{
    "name": "London",
    "main": {"temp": 11.6, "humidity": 81, "pressure": 1012},
    "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
    "wind": {"speed": 4.12, "deg": 240}
}"#;

#[test]
fn parse_weather_rounds_units() {
    let data = parse_weather(LONDON).unwrap();
    assert_eq!(data.location, "London");
    assert_eq!(data.temperature, 12);
    assert_eq!(data.description, "light rain");
    assert_eq!(data.icon, "10d");
    assert_eq!(data.humidity, 81);
    assert_eq!(data.wind_speed, 15);
}

#[test]
fn parse_weather_handles_negative_temperature() {
    let body = LONDON.replace("11.6", "-3.7");
    assert_eq!(parse_weather(&body).unwrap().temperature, -4);
}

#[test]
fn parse_weather_requires_condition() {
    let body = r#"{"name":"X","main":{"temp":1.0,"humidity":5},"weather":[],"wind":{"speed":0.0}}"#;
    assert!(matches!(parse_weather(body), Err(FetchError::Decode(_))));
}

#[test]
fn parse_weather_rejects_garbage() {
    assert!(matches!(parse_weather("<html>"), Err(FetchError::Decode(_))));
}

#[test]
fn weather_query_trims_location() {
    let q = weather_query("  Paris ", "key");
    assert_eq!(q, [("q", "Paris"), ("appid", "key"), ("units", "metric")]);
}

#[test]
fn error_message_distinguishes_not_found() {
    assert_eq!(
        error_message(&FetchError::NotFound),
        "City not found. Please check the spelling and try again."
    );
    assert_eq!(
        error_message(&FetchError::Status(500)),
        "Failed to fetch weather data. Please try again later."
    );
    assert_eq!(
        error_message(&FetchError::Network("offline".to_owned())),
        "Failed to fetch weather data. Please try again later."
    );
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn fetch_weather_is_unavailable_outside_browser() {
    assert_eq!(fetch_weather("London", "").await, Err(FetchError::Unavailable));
}
