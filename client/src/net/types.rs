//! Wire DTOs for the REST API.
//!
//! DESIGN
//! ======
//! Request bodies are form-encoded (`serde_urlencoded`); responses are JSON.
//! Response fields are optional so that a missing field is a flow decision in
//! the auth service rather than a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";

/// Profile shown in the navbar and dashboard. Display data only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub email: String,
    /// Backend ids are integers; the login flow synthesizes `"user"`.
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub id: String,
}

impl UserProfile {
    /// Placeholder id used when the login response carries no user id.
    pub const LOGIN_ID: &'static str = "user";
    pub const DEFAULT_FIRST_NAME: &'static str = "User";

    /// Synthesize the profile from a login response, defaulting absent fields.
    #[must_use]
    pub fn from_login(resp: &LoginResponse) -> Self {
        Self {
            first_name: non_empty(resp.first_name.as_deref()).unwrap_or(Self::DEFAULT_FIRST_NAME).to_owned(),
            last_name: non_empty(resp.last_name.as_deref()).unwrap_or_default().to_owned(),
            email: non_empty(resp.email.as_deref()).unwrap_or_default().to_owned(),
            id: Self::LOGIN_ID.to_owned(),
        }
    }

    /// Name for greetings; falls back to `"User"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(Some(self.first_name.as_str())).unwrap_or(Self::DEFAULT_FIRST_NAME)
    }
}

/// `POST /login` body. The backend reads the email from `username`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// `POST /signup` body as collected by the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Form-only confirmation; never sent.
    #[serde(skip)]
    pub confirm_password: String,
}

impl Registration {
    /// Check the password fields before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the passwords differ or are too short.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(PASSWORD_TOO_SHORT);
        }
        Ok(())
    }
}

/// `POST /login` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `POST /signup` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// `Some(s)` when `s` is present and non-empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Accept a string, number, or null for text fields.
fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}
