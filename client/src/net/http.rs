//! Credential-attaching HTTP adapter.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ApiClient`] sits between the endpoint helpers in `net::api` and an
//! [`HttpTransport`]. Before a request is sent it attaches the `Authorization`
//! header built from the session store; after a response arrives it checks
//! for 401.
//!
//! A 401 from any call ends the session: the stored entries are removed and
//! every subscriber registered with [`ApiClient::on_unauthorized`] is invoked.
//! Navigation is the subscriber's business; this module never touches routing.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use super::error::ApiError;
use crate::config::ClientConfig;
use crate::session::{self, SessionStore};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const DEFAULT_TOKEN_TYPE: &str = "bearer";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully prepared request handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: Method::Get, url: url.into(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self { method: Method::Post, url: url.into(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    /// First header value matching `name`, case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends one request. Any status is a successful exchange; `Err` means no
/// response was obtained.
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

type UnauthorizedListener = Arc<dyn Fn() + Send + Sync>;

/// REST client shared by the auth flows.
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    store: Arc<dyn SessionStore>,
    listeners: Mutex<Vec<UnauthorizedListener>>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, transport: Arc<dyn HttpTransport>, store: Arc<dyn SessionStore>) -> Self {
        Self { config, transport, store, listeners: Mutex::new(Vec::new()) }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The session store credentials are read from.
    #[must_use]
    pub fn store(&self) -> &dyn SessionStore {
        self.store.as_ref()
    }

    /// Subscribe to session-ending 401 responses.
    pub fn on_unauthorized<F>(&self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner).push(Arc::new(listener));
    }

    /// `Authorization` header value for the stored session, if a non-empty token exists.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        let token = session::stored_value(self.store(), session::TOKEN_KEY)?;
        let token_type = session::stored_value(self.store(), session::TOKEN_TYPE_KEY)
            .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_owned());
        Some(authorization_value(&token_type, &token))
    }

    /// Send a request for `path` with default headers and stored credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx responses (after running the
    /// 401 handler when applicable) and passes transport errors through.
    pub async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse, ApiError> {
        let url = self.config.endpoint(path);
        let mut request = match method {
            Method::Get => HttpRequest::get(url),
            Method::Post => HttpRequest::post(url),
        }
        .with_header("Content-Type", FORM_CONTENT_TYPE);
        if let Some(auth) = self.authorization() {
            request = request.with_header("Authorization", auth);
        }
        if let Some(body) = body {
            request = request.with_body(body);
        }

        let response = self.transport.send(request).await?;
        if response.status == 401 {
            self.handle_unauthorized(path);
        }
        if !response.is_success() {
            return Err(ApiError::Status { status: response.status, body: response.body });
        }
        Ok(response)
    }

    fn handle_unauthorized(&self, path: &str) {
        leptos::logging::warn!("401 from {path}; ending session");
        self.store.clear();
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner).clone();
        for listener in listeners {
            listener();
        }
    }
}

/// `"<Type> <token>"` with the type's first character upper-cased.
#[must_use]
pub fn authorization_value(token_type: &str, token: &str) -> String {
    format!("{} {token}", capitalize(token_type))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
