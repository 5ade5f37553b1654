//! Client route table and redirect policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes double as the partition key for widget layouts, so the paths here
//! are also the `route` values persisted on widget instances.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Sign-in page.
pub const LOGIN_PATH: &str = "/login";
/// Landing route for authenticated users and target for unknown paths.
pub const HOME_PATH: &str = "/dashboard";

/// Every client-side route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Dashboard,
    Analytics,
    Users,
    Data,
    Settings,
}

impl AppRoute {
    /// Routes listed in the sidebar, in display order.
    pub const NAV: [AppRoute; 5] = [
        AppRoute::Dashboard,
        AppRoute::Analytics,
        AppRoute::Users,
        AppRoute::Data,
        AppRoute::Settings,
    ];

    /// Match a location path. A single trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
        match trimmed {
            "/login" => Some(Self::Login),
            "/dashboard" => Some(Self::Dashboard),
            "/analytics" => Some(Self::Analytics),
            "/users" => Some(Self::Users),
            "/data" => Some(Self::Data),
            "/settings" => Some(Self::Settings),
            _ => None,
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Dashboard => HOME_PATH,
            Self::Analytics => "/analytics",
            Self::Users => "/users",
            Self::Data => "/data",
            Self::Settings => "/settings",
        }
    }

    /// Sidebar label and page heading.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Analytics => "Analytics",
            Self::Users => "Users",
            Self::Data => "Data",
            Self::Settings => "Settings",
        }
    }

    /// Short glyph shown next to the sidebar label.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Login => "→",
            Self::Dashboard => "▦",
            Self::Analytics => "▥",
            Self::Users => "☺",
            Self::Data => "▤",
            Self::Settings => "⚙",
        }
    }

    #[must_use]
    pub fn requires_auth(self) -> bool {
        self != Self::Login
    }
}

/// Where a visit to `path` should be sent instead, if anywhere.
///
/// Unknown paths (including `/`) go to [`HOME_PATH`]; protected routes send
/// signed-out visitors to [`LOGIN_PATH`]; the login page sends signed-in
/// visitors home.
#[must_use]
pub fn redirect_for(path: &str, authenticated: bool) -> Option<&'static str> {
    match AppRoute::from_path(path) {
        None => Some(HOME_PATH),
        Some(route) if route.requires_auth() && !authenticated => Some(LOGIN_PATH),
        Some(AppRoute::Login) if authenticated => Some(HOME_PATH),
        Some(_) => None,
    }
}
