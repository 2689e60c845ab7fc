//! Persisted login session and request-header derivation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues a JWT at login; the client keeps it in `localStorage`
//! next to a small JSON profile. Every component that calls a protected
//! endpoint reads credentials through one [`SessionContext`] provided as
//! Leptos context instead of touching storage directly.
//!
//! ERROR HANDLING
//! ==============
//! Storage access never fails loudly. A profile blob that does not parse is
//! treated as "not logged in".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;

/// String key/value persistence backing the session.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Every call is a no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                leptos::logging::warn!("localStorage write failed for {key}: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-process store used in tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Profile blob persisted under the profile key, as returned by login.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub authorities: Vec<String>,
}

/// The current user's credentials as seen by the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub display_name: String,
    pub roles: BTreeSet<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Typed accessor over the persisted session, shared through context.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
    token_key: String,
    profile_key: String,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("token_key", &self.token_key)
            .field("profile_key", &self.profile_key)
            .finish_non_exhaustive()
    }
}

impl SessionContext {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &ClientConfig) -> Self {
        Self { store, token_key: config.token_key.clone(), profile_key: config.profile_key.clone() }
    }

    /// Session backed by the browser's `localStorage`.
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(Arc::new(BrowserStore), config)
    }

    /// Raw bearer token, if one is stored and non-empty.
    pub fn token(&self) -> Option<String> {
        self.store.get(&self.token_key).filter(|t| !t.trim().is_empty())
    }

    /// Read the current session.
    ///
    /// A missing profile is tolerated (the token alone identifies the user);
    /// a profile that fails to parse makes the whole session anonymous.
    pub fn current(&self) -> Session {
        let Some(token) = self.token() else {
            return Session::default();
        };
        let profile = match self.store.get(&self.profile_key) {
            None => StoredProfile::default(),
            Some(raw) => match serde_json::from_str::<StoredProfile>(&raw) {
                Ok(profile) => profile,
                Err(e) => {
                    leptos::logging::warn!("stored profile is malformed, treating as logged out: {e}");
                    return Session::default();
                }
            },
        };
        Session {
            token: Some(token),
            display_name: profile.username,
            roles: profile.authorities.into_iter().collect(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_authenticated()
    }

    /// Headers for a JSON API call: content type always, bearer only with a token.
    pub fn auth_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![("Content-Type", "application/json".to_owned())];
        if let Some(token) = self.token() {
            headers.push(("Authorization", format!("Bearer {token}")));
        }
        headers
    }

    /// Bearer header alone, for multipart bodies whose content type the browser sets.
    pub fn bearer_header(&self) -> Option<(&'static str, String)> {
        self.token().map(|token| ("Authorization", format!("Bearer {token}")))
    }

    /// Persist token and profile together.
    pub fn set_session(&self, token: &str, profile: &StoredProfile) {
        let raw = match serde_json::to_string(profile) {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::warn!("profile serialization failed: {e}");
                return;
            }
        };
        self.store.set(&self.profile_key, &raw);
        self.store.set(&self.token_key, token);
    }

    pub fn clear_session(&self) {
        self.store.remove(&self.token_key);
        self.store.remove(&self.profile_key);
    }
}
