use super::*;

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn price_query_joins_requested_ids() {
    let q = price_query("bitcoin,solana");
    assert_eq!(q[0], ("ids", "bitcoin,solana"));
    assert_eq!(q[1], ("vs_currencies", "usd"));
    assert_eq!(q[2], ("include_24hr_change", "true"));
}

#[test]
fn parse_prices_keeps_selection_order_and_labels() {
    let body = r#"{
        "solana": {"usd": 140.25, "usd_24h_change": -2.5},
        "bitcoin": {"usd": 65000.0, "usd_24h_change": 1.25, "last_updated_at": 1700000000}
    }"#;
    let quotes = parse_prices(body, &ids(&["bitcoin", "solana"])).unwrap();
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].id, "bitcoin");
    assert_eq!(quotes[0].name, "Bitcoin");
    assert_eq!(quotes[0].symbol, "BTC");
    assert!((quotes[0].price - 65000.0).abs() < f64::EPSILON);
    assert_eq!(quotes[1].symbol, "SOL");
    assert!(!quotes[1].is_up());
}

#[test]
fn parse_prices_defaults_missing_change_to_zero() {
    let body = r#"{"cardano": {"usd": 0.45}}"#;
    let quotes = parse_prices(body, &ids(&["cardano"])).unwrap();
    assert!(quotes[0].change_24h.abs() < f64::EPSILON);
    assert!(quotes[0].is_up());
}

#[test]
fn parse_prices_labels_unknown_coin_by_id() {
    let body = r#"{"dogecoin": {"usd": 0.1}}"#;
    let quotes = parse_prices(body, &ids(&["dogecoin"])).unwrap();
    assert_eq!(quotes[0].name, "dogecoin");
    assert_eq!(quotes[0].symbol, "DOGECOIN");
    assert_eq!(quotes[0].image, COIN_CATALOG[0].image);
}

#[test]
fn parse_prices_fails_when_coin_missing() {
    let body = r#"{"bitcoin": {"usd": 1.0}}"#;
    assert!(matches!(
        parse_prices(body, &ids(&["bitcoin", "ethereum"])),
        Err(FetchError::Decode(_))
    ));
}

#[test]
fn parse_prices_rejects_error_payload() {
    let body = r#"{"status": {"error_code": 429, "error_message": "rate limited"}}"#;
    assert!(parse_prices(body, &ids(&["bitcoin"])).is_err());
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn fetch_prices_is_unavailable_outside_browser() {
    assert_eq!(fetch_prices(&ids(&["bitcoin"]), "").await, Err(FetchError::Unavailable));
}
