use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(User {
            id: "1".to_owned(),
            name: "User Name".to_owned(),
            email: "demo@example.com".to_owned(),
            avatar: None,
        }),
        token: Some("mock-jwt-token".to_owned()),
        loading: false,
        error: None,
    }
}

#[test]
fn session_not_ready_when_signed_out() {
    let state = AuthState { loading: false, ..AuthState::default() };
    assert!(!session_ready(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::default();
    assert!(!session_ready(&state));
    assert_eq!(guard_target(&state, "/dashboard"), None);
}

#[test]
fn session_ready_when_signed_in() {
    assert!(session_ready(&signed_in()));
}

#[test]
fn guard_target_follows_route_policy() {
    let signed_out = AuthState { loading: false, ..AuthState::default() };
    assert_eq!(guard_target(&signed_out, "/users"), Some("/login"));
    assert_eq!(guard_target(&signed_out, "/login"), None);
    assert_eq!(guard_target(&signed_in(), "/login"), Some("/dashboard"));
    assert_eq!(guard_target(&signed_in(), "/users"), None);
}
