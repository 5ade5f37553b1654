use super::*;

fn make_user() -> User {
    User {
        id: "1".to_owned(),
        name: "User Name".to_owned(),
        email: "demo@example.com".to_owned(),
        avatar: None,
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_round_trips_without_avatar_field() {
    let json = serde_json::to_value(make_user()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"id": "1", "name": "User Name", "email": "demo@example.com"})
    );
    let back: User = serde_json::from_value(json).unwrap();
    assert_eq!(back, make_user());
}

#[test]
fn user_accepts_empty_avatar_string() {
    let user: User =
        serde_json::from_str(r#"{"id":"1","name":"N","email":"e@x","avatar":""}"#).unwrap();
    assert_eq!(user.avatar.as_deref(), Some(""));
}

// =============================================================
// Feed view models
// =============================================================

#[test]
fn weather_icon_url_uses_icon_code() {
    let data = WeatherData {
        location: "London".to_owned(),
        temperature: 12,
        description: "light rain".to_owned(),
        icon: "10d".to_owned(),
        humidity: 80,
        wind_speed: 15,
    };
    assert_eq!(data.icon_url(), "https://openweathermap.org/img/wn/10d@2x.png");
}

#[test]
fn crypto_quote_direction() {
    let mut quote = CryptoQuote {
        id: "bitcoin".to_owned(),
        name: "Bitcoin".to_owned(),
        symbol: "BTC".to_owned(),
        price: 50_000.0,
        change_24h: 0.0,
        image: String::new(),
    };
    assert!(quote.is_up());
    quote.change_24h = -1.5;
    assert!(!quote.is_up());
}
