//! Loading/error/data state for a polled widget feed.
//!
//! DESIGN
//! ======
//! A failed poll keeps the previous data so the widget shows stale values
//! next to the error until the next successful tick.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

/// Per-widget feed state.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { data: None, loading: false, error: None }
    }
}

impl<T> FetchState<T> {
    /// A request went out.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.loading = false;
        self.error = None;
    }

    /// Record a failure; any previous data is retained.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Spinner only on the very first load; later polls refresh in place.
    pub fn shows_spinner(&self) -> bool {
        self.loading && self.data.is_none()
    }
}
