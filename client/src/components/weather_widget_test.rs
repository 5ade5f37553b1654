use super::*;

#[test]
fn format_temperature_appends_unit() {
    assert_eq!(format_temperature(12), "12°C");
    assert_eq!(format_temperature(-4), "-4°C");
}

#[test]
fn format_wind_uses_km_h() {
    assert_eq!(format_wind(15), "15 km/h");
}
