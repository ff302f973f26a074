//! Leptos context wrapper around [`AuthService`].
//!
//! Components call [`use_auth`] to read the reactive [`AuthState`] and to run
//! the login, register, and logout flows. The wrapper keeps the signal in step
//! with the session store after every flow, and after any 401 seen by the
//! shared [`ApiClient`].

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::AuthService;
use crate::config::ClientConfig;
use crate::net::browser::BrowserTransport;
use crate::net::http::ApiClient;
use crate::net::types::{LoginCredentials, Registration, UserProfile};
use crate::session::LocalStorageStore;
use crate::state::auth::AuthState;

#[derive(Clone)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    /// Bumped every time a 401 ends the session.
    session_ended: RwSignal<u32>,
    service: Arc<AuthService>,
}

impl AuthContext {
    /// Wrap `service` and subscribe to its client's unauthorized events.
    pub fn new(service: Arc<AuthService>) -> Self {
        let state = RwSignal::new(AuthState::pending());
        let session_ended = RwSignal::new(0_u32);
        service.client().on_unauthorized(move || {
            state.set(AuthState::signed_out());
            session_ended.update(|n| *n = n.wrapping_add(1));
        });
        Self { state, session_ended, service }
    }

    /// Context backed by `localStorage` and the `gloo-net` transport.
    pub fn browser() -> Self {
        let config = ClientConfig::from_build_env();
        let transport = Arc::new(BrowserTransport::new(config.request_timeout));
        let client = ApiClient::new(config, transport, Arc::new(LocalStorageStore));
        Self::new(Arc::new(AuthService::new(Arc::new(client))))
    }

    /// Reactive auth state.
    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    /// Counter that changes whenever the server rejects the session.
    pub fn session_ended(&self) -> ReadSignal<u32> {
        self.session_ended.read_only()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().authenticated
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.get().user
    }

    pub fn loading(&self) -> bool {
        self.state.get().loading
    }

    /// Read the stored session once at startup.
    pub fn hydrate(&self) {
        let state = match self.service.hydrate() {
            Some(user) => AuthState::signed_in(user),
            None => AuthState::signed_out(),
        };
        self.state.set(state);
    }

    /// # Errors
    ///
    /// Returns the display message from [`AuthService::login`].
    pub async fn login(&self, credentials: LoginCredentials) -> Result<(), String> {
        self.state.update(|s| s.loading = true);
        let result = self.service.login(&credentials).await;
        self.sync();
        result.map(|_| ())
    }

    /// # Errors
    ///
    /// Returns the display message from [`AuthService::register`].
    pub async fn register(&self, registration: Registration) -> Result<(), String> {
        self.state.update(|s| s.loading = true);
        let result = self.service.register(&registration).await;
        self.sync();
        result.map(|_| ())
    }

    pub async fn logout(&self) {
        self.service.logout().await;
        self.state.set(AuthState::signed_out());
    }

    fn sync(&self) {
        let state = if self.service.is_authenticated() {
            AuthState { user: self.service.current_user(), authenticated: true, loading: false }
        } else {
            AuthState::signed_out()
        };
        self.state.set(state);
    }
}

/// Install the browser-backed [`AuthContext`] for the component tree.
pub fn provide_auth() -> AuthContext {
    let auth = AuthContext::browser();
    provide_context(auth.clone());
    auth
}

/// The [`AuthContext`] installed by the root component.
///
/// # Panics
///
/// Panics when called outside the tree set up by [`provide_auth`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
