//! Networking modules for the widget data providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `weather` and `crypto` each wrap one public endpoint; `types` holds the
//! normalized view models widgets render. Requests only run in the browser
//! build.


pub mod crypto;
pub mod types;
pub mod weather;

/// Why a provider poll failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("resource not found")]
    NotFound,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("requests are only available in the browser")]
    Unavailable,
}

/// Map an HTTP status to success or the matching [`FetchError`].
///
/// # Errors
///
/// Returns `NotFound` for 404 and `Status` for any other non-2xx code.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(FetchError::NotFound),
        other => Err(FetchError::Status(other)),
    }
}
