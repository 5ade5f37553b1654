//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.
//!
//! TRADE-OFFS
//! ==========
//! This is a mocked gate, not a security boundary: one hardcoded credential
//! pair is accepted and the persisted token is trusted on reload without any
//! signature or expiry check.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::util::storage::{KeyValueStore, load_json, persist_json};

/// Storage key for the session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the signed-in user.
pub const USER_KEY: &str = "user";

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password";
const MOCK_TOKEN: &str = "mock-jwt-token";

/// Login rejection reasons, rendered verbatim as the form message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Authentication state tracking the current user and loading status.
///
/// `loading` starts `true` and drops once the persisted session has been
/// checked, so guards do not redirect before the startup check runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, token: None, loading: true, error: None }
    }
}

fn demo_user() -> User {
    User {
        id: "1".to_owned(),
        name: "User Name".to_owned(),
        email: DEMO_EMAIL.to_owned(),
        avatar: None,
    }
}

impl AuthState {
    /// Whether a session token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Rebuild the session from whatever was persisted last.
    ///
    /// A session needs both a token and a decodable user; anything less is
    /// treated as signed out.
    pub fn check_auth(store: &impl KeyValueStore) -> Self {
        let token: Option<String> = load_json(store, TOKEN_KEY);
        let user: Option<User> = load_json(store, USER_KEY);
        match (token, user) {
            (Some(token), Some(user)) => Self {
                user: Some(user),
                token: Some(token),
                loading: false,
                error: None,
            },
            _ => Self { loading: false, ..Self::default() },
        }
    }

    /// Attempt a login. On failure only `error` changes.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingCredentials` when either field is blank and
    /// `AuthError::InvalidCredentials` for any pair other than the demo one.
    pub fn login(&mut self, store: &impl KeyValueStore, email: &str, password: &str) -> Result<(), AuthError> {
        let result = verify_credentials(email, password);
        match &result {
            Ok(user) => {
                let token = MOCK_TOKEN.to_owned();
                persist_json(store, TOKEN_KEY, &token);
                persist_json(store, USER_KEY, user);
                self.user = Some(user.clone());
                self.token = Some(token);
                self.error = None;
                leptos::logging::log!("signed in as {}", user.email);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
        result.map(|_| ())
    }

    /// Sign out and forget the persisted session.
    pub fn logout(&mut self, store: &impl KeyValueStore) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(e) = store.remove(key) {
                leptos::logging::warn!("failed to clear {key}: {e}");
            }
        }
        *self = Self { loading: false, ..Self::default() };
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

fn verify_credentials(email: &str, password: &str) -> Result<User, AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(demo_user())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}
