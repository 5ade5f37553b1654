use super::*;

#[test]
fn is_active_matches_exact_route() {
    assert!(is_active(AppRoute::Dashboard, "/dashboard"));
    assert!(is_active(AppRoute::Settings, "/settings/"));
    assert!(!is_active(AppRoute::Users, "/dashboard"));
}

#[test]
fn is_active_is_false_for_unknown_paths() {
    for route in AppRoute::NAV {
        assert!(!is_active(route, "/nowhere"));
    }
}
