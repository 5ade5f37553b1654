//! Host process configuration.
//!
//! Values come from the environment, after `.env` has been loaded by
//! `dotenvy`. Leptos site options are read separately from
//! `[package.metadata.leptos]`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a valid
    /// port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    /// Build configuration from a raw `PORT` value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] for non-numeric or out-of-range
    /// values.
    pub fn from_port_var(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self { port: DEFAULT_PORT });
        };
        raw.parse::<u16>()
            .map(|port| Self { port })
            .map_err(|e| ConfigError::InvalidPort { value: raw.to_owned(), reason: e.to_string() })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
