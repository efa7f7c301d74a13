//! Backend address configuration.

use std::env;

/// Development default, matching the backend's local port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Base address of the hub backend.
///
/// Resolved once at startup and injected into [`crate::HubClient`], so
/// several clients in one process can point at different backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    /// Normalize an explicit address. Surrounding whitespace and trailing
    /// slashes are trimmed; an empty value falls back to
    /// [`DEFAULT_BASE_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base = base_url.into().trim().to_string();
        while base.ends_with('/') {
            base.pop();
        }
        if base.is_empty() {
            base = DEFAULT_BASE_URL.to_string();
        }
        Self { base_url: base }
    }

    /// Resolve the address from the `BACKEND_URL` environment variable,
    /// defaulting when it is unset or empty.
    pub fn from_env() -> Self {
        Self::new(env::var("BACKEND_URL").unwrap_or_default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn into_base_url(self) -> String {
        self.base_url
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
