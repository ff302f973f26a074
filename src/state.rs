//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the forwarding handlers via the `State`
//! extractor. It holds one pooled `reqwest::Client` and the backend origin
//! every forwarded call is joined onto.

use std::time::Duration;

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: String,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the builder error when the TLS backend cannot be initialized.
    pub fn new(backend_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, backend_url: backend_url.into() })
    }

    /// # Errors
    ///
    /// See [`AppState::new`].
    pub fn from_config(config: &HostConfig) -> Result<Self, reqwest::Error> {
        Self::new(config.backend_url.clone(), config.proxy_timeout)
    }
}
