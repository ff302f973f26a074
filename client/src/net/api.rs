//! REST endpoint helpers.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; the auth service decides how a
//! failure is shown. Nothing here writes the session beyond what the 401
//! handler in [`ApiClient::send`] already does.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{ApiClient, Method};
use super::types::{LoginCredentials, LoginResponse, Registration, SignupResponse, UserProfile};

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const LOGOUT_PATH: &str = "/logout";
pub const PROFILE_PATH: &str = "/profile";

fn form_body<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_urlencoded::to_string(value).map_err(|e| ApiError::Decode(e.to_string()))
}

impl ApiClient {
    /// `POST /login` with form-encoded credentials.
    ///
    /// # Errors
    ///
    /// Returns the transport/status error, or [`ApiError::Decode`] if the
    /// success body is not a JSON object.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        let body = form_body(credentials)?;
        self.send(Method::Post, LOGIN_PATH, Some(body)).await?.json()
    }

    /// `POST /signup` with the form-encoded registration (confirmation omitted).
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::login`].
    pub async fn signup(&self, registration: &Registration) -> Result<SignupResponse, ApiError> {
        let body = form_body(registration)?;
        self.send(Method::Post, SIGNUP_PATH, Some(body)).await?.json()
    }

    /// `POST /logout`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the transport/status error.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(Method::Post, LOGOUT_PATH, None).await.map(|_| ())
    }

    /// `GET /profile` for the current session.
    ///
    /// # Errors
    ///
    /// Returns the transport/status error or a decode error.
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.send(Method::Get, PROFILE_PATH, None).await?.json()
    }
}
