//! Client configuration baked in at compile time.
//!
//! `VOICEAI_API_URL` is read with `option_env!` so the WASM bundle carries the
//! API origin. Leaving it unset keeps every request relative to the page
//! origin, which is what the host binary's forwarding routes expect.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Client-wide request timeout applied by the browser transport.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined in front of every endpoint path. Empty means same origin.
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: String::new(), request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS) }
    }
}

impl ClientConfig {
    /// Build the config from compile-time environment, falling back to defaults.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("VOICEAI_API_URL").unwrap_or_default())
    }

    /// Config pointing at `base_url`, with trailing slashes removed.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self { api_base_url: base_url.trim().trim_end_matches('/').to_owned(), ..Self::default() }
    }

    /// Absolute (or origin-relative) URL for an endpoint path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}
