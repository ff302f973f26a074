//! Session-mutating auth flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthService`] is the only writer of the session besides the 401 handler.
//! It turns API outcomes into stored sessions and every failure into a single
//! display string, so views never see an `ApiError`. The Leptos-facing
//! wrapper lives in [`context`].
//!
//! STATES
//! ======
//! Unauthenticated until a login or registration succeeds; authenticated until
//! logout or a 401. A failed call leaves the session untouched.


pub mod context;

use std::sync::Arc;

use crate::net::http::{ApiClient, DEFAULT_TOKEN_TYPE};
use crate::net::types::{LoginCredentials, Registration, UserProfile, non_empty};
use crate::session::{self, Session, SessionLoad};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

pub struct AuthService {
    client: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// True iff a token is stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        session::has_token(self.client.store())
    }

    /// Stored profile of the authenticated user.
    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        if !self.is_authenticated() {
            return None;
        }
        session::stored_user(self.client.store())
    }

    /// Restore the session persisted by a previous page load.
    ///
    /// Incomplete or malformed entries are discarded and the user starts
    /// signed out.
    pub fn hydrate(&self) -> Option<UserProfile> {
        match Session::load(self.client.store()) {
            SessionLoad::Restored(session) => Some(session.user),
            SessionLoad::Empty => None,
            SessionLoad::Incomplete => {
                leptos::logging::warn!("discarding incomplete stored session");
                self.client.store().clear();
                None
            }
            SessionLoad::Malformed(e) => {
                leptos::logging::warn!("discarding stored session with malformed user: {e}");
                self.client.store().clear();
                None
            }
        }
    }

    /// Exchange credentials for a token and store the session.
    ///
    /// # Errors
    ///
    /// Returns the normalized display message when the call fails or the
    /// response lacks `access_token` or `token_type`.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<UserProfile, String> {
        let response = self.client.login(credentials).await.map_err(|e| {
            leptos::logging::warn!("login failed: {e}");
            e.user_message(LOGIN_FAILED)
        })?;

        let (Some(token), Some(token_type)) =
            (non_empty(response.access_token.as_deref()), non_empty(response.token_type.as_deref()))
        else {
            leptos::logging::warn!("login response missing access_token or token_type");
            return Err(LOGIN_FAILED.to_owned());
        };

        let session = Session {
            token: token.to_owned(),
            token_type: token_type.to_owned(),
            user: UserProfile::from_login(&response),
        };
        self.persist(session, LOGIN_FAILED)
    }

    /// Validate, create the account, and store the returned session.
    ///
    /// # Errors
    ///
    /// Returns the validation message without calling the API, or the
    /// normalized display message when the call fails or the response lacks a
    /// token or user.
    pub async fn register(&self, registration: &Registration) -> Result<UserProfile, String> {
        registration.validate().map_err(str::to_owned)?;

        let response = self.client.signup(registration).await.map_err(|e| {
            leptos::logging::warn!("registration failed: {e}");
            e.user_message(REGISTRATION_FAILED)
        })?;

        let (Some(token), Some(user)) = (non_empty(response.token.as_deref()), response.user.clone()) else {
            leptos::logging::warn!("signup response missing token or user");
            return Err(REGISTRATION_FAILED.to_owned());
        };

        let token_type = non_empty(response.token_type.as_deref()).unwrap_or(DEFAULT_TOKEN_TYPE);
        let session = Session { token: token.to_owned(), token_type: token_type.to_owned(), user };
        self.persist(session, REGISTRATION_FAILED)
    }

    /// Tell the server, then drop the local session regardless of the outcome.
    pub async fn logout(&self) {
        if let Err(e) = self.client.logout().await {
            leptos::logging::error!("logout request failed: {e}");
        }
        self.client.store().clear();
    }

    fn persist(&self, session: Session, fallback: &str) -> Result<UserProfile, String> {
        session.save(self.client.store()).map_err(|e| {
            leptos::logging::error!("storing session failed: {e}");
            fallback.to_owned()
        })?;
        Ok(session.user)
    }
}
