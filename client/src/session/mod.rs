//! Persistent client session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is three string entries (`token`, `token_type`, `user`) kept in
//! a [`SessionStore`]. The browser build backs the store with `localStorage`;
//! tests and SSR use [`MemoryStore`]. Only the auth service and the 401 handler
//! in `net::http` write to it.
//!
//! INVARIANT
//! =========
//! A user is authenticated iff the `token` entry is present and non-empty. The `user` entry is
//! display data and never consulted for access decisions.


mod local;
mod memory;

pub use local::LocalStorageStore;
pub use memory::MemoryStore;

use crate::net::types::UserProfile;

pub const TOKEN_KEY: &str = "token";
pub const TOKEN_TYPE_KEY: &str = "token_type";
pub const USER_KEY: &str = "user";

/// Every key owned by the session, in write order.
pub const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, TOKEN_TYPE_KEY, USER_KEY];

/// String key/value storage that survives page reloads.
///
/// Implementations swallow backend failures (quota, disabled storage): a lost
/// write degrades to an unauthenticated reload rather than an error.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Remove every session entry.
    fn clear(&self) {
        for key in SESSION_KEYS {
            self.remove(key);
        }
    }
}

/// A complete stored session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub token_type: String,
    pub user: UserProfile,
}

/// Outcome of reading the session at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionLoad {
    /// All three entries present and the profile decoded.
    Restored(Session),
    /// No session entries at all.
    Empty,
    /// Some entries present, others missing.
    Incomplete,
    /// The `user` entry is not a profile object.
    Malformed(String),
}

impl Session {
    /// Read the stored session without modifying the store.
    pub fn load(store: &dyn SessionStore) -> SessionLoad {
        if SESSION_KEYS.iter().all(|key| store.get(key).is_none()) {
            return SessionLoad::Empty;
        }

        match (stored_value(store, TOKEN_KEY), stored_value(store, TOKEN_TYPE_KEY), stored_value(store, USER_KEY)) {
            (Some(token), Some(token_type), Some(user)) => match serde_json::from_str::<UserProfile>(&user) {
                Ok(user) => SessionLoad::Restored(Self { token, token_type, user }),
                Err(e) => SessionLoad::Malformed(e.to_string()),
            },
            _ => SessionLoad::Incomplete,
        }
    }

    /// Write all three entries.
    ///
    /// # Errors
    ///
    /// Returns the encoding error if the profile cannot be serialized; nothing
    /// is written in that case.
    pub fn save(&self, store: &dyn SessionStore) -> Result<(), serde_json::Error> {
        let user = serde_json::to_string(&self.user)?;
        store.set(TOKEN_KEY, &self.token);
        store.set(TOKEN_TYPE_KEY, &self.token_type);
        store.set(USER_KEY, &user);
        Ok(())
    }
}

/// The stored profile, if present and decodable.
pub fn stored_user(store: &dyn SessionStore) -> Option<UserProfile> {
    store.get(USER_KEY).and_then(|raw| serde_json::from_str(&raw).ok())
}

/// Whether a non-empty token is stored.
pub fn has_token(store: &dyn SessionStore) -> bool {
    stored_value(store, TOKEN_KEY).is_some()
}

/// The entry under `key`; an empty string counts as absent.
pub fn stored_value(store: &dyn SessionStore, key: &str) -> Option<String> {
    store.get(key).filter(|v| !v.is_empty())
}
