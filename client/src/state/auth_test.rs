use super::*;
use crate::util::storage::MemoryStore;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading_until_checked() {
    let state = AuthState::default();
    assert!(state.loading);
}

// =============================================================
// login
// =============================================================

#[test]
fn login_with_demo_credentials_authenticates_and_persists() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    assert_eq!(state.login(&store, DEMO_EMAIL, DEMO_PASSWORD), Ok(()));
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some(DEMO_EMAIL));
    assert!(store.get(TOKEN_KEY).unwrap().is_some());
    assert!(store.get(USER_KEY).unwrap().is_some());
}

#[test]
fn login_with_wrong_password_fails_without_session() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    assert_eq!(state.login(&store, DEMO_EMAIL, "hunter2"), Err(AuthError::InvalidCredentials));
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    assert!(store.is_empty());
}

#[test]
fn login_with_other_email_fails() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    assert_eq!(
        state.login(&store, "someone@example.com", DEMO_PASSWORD),
        Err(AuthError::InvalidCredentials)
    );
    assert!(!state.is_authenticated());
}

#[test]
fn login_rejects_padded_email() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    assert_eq!(
        state.login(&store, "  demo@example.com  ", DEMO_PASSWORD),
        Err(AuthError::InvalidCredentials)
    );
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(store.is_empty());
}

#[test]
fn login_with_whitespace_email_is_invalid() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    assert_eq!(state.login(&store, "  ", DEMO_PASSWORD), Err(AuthError::InvalidCredentials));
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn login_with_blank_fields_reports_missing() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    assert_eq!(state.login(&store, "", DEMO_PASSWORD), Err(AuthError::MissingCredentials));
    assert_eq!(state.login(&store, DEMO_EMAIL, ""), Err(AuthError::MissingCredentials));
    assert_eq!(state.error.as_deref(), Some("Email and password are required"));
}

#[test]
fn failed_login_keeps_existing_session() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    state.login(&store, DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    let _ = state.login(&store, DEMO_EMAIL, "wrong");
    assert!(state.is_authenticated());
    assert!(state.error.is_some());
    state.clear_error();
    assert!(state.error.is_none());
}

// =============================================================
// logout / check_auth
// =============================================================

#[test]
fn logout_clears_state_and_storage() {
    let store = MemoryStore::new();
    let mut state = AuthState::default();
    state.login(&store, DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    state.logout(&store);
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(store.is_empty());
}

#[test]
fn check_auth_restores_persisted_session() {
    let store = MemoryStore::new();
    AuthState::default().login(&store, DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    let restored = AuthState::check_auth(&store);
    assert!(restored.is_authenticated());
    assert!(!restored.loading);
    assert_eq!(restored.user.map(|u| u.name), Some("User Name".to_owned()));
}

#[test]
fn check_auth_without_session_is_signed_out() {
    let restored = AuthState::check_auth(&MemoryStore::new());
    assert!(!restored.is_authenticated());
    assert!(!restored.loading);
}

#[test]
fn check_auth_with_malformed_user_is_signed_out() {
    let store = MemoryStore::with_entries([(TOKEN_KEY, "\"mock-jwt-token\""), (USER_KEY, "{oops")]);
    let restored = AuthState::check_auth(&store);
    assert!(!restored.is_authenticated());
}
