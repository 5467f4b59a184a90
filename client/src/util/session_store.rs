//! Persisted session storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives page reloads by living in browser `localStorage` under
//! two keys: `token` (the bearer credential) and `user` (the JSON-encoded
//! subject). Everything that needs the session goes through [`SessionStore`],
//! which is injected rather than reached for globally so tests and server
//! rendering can substitute an in-memory backend.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail. Malformed or partial stored data is logged and reported as
//! "no session". A rejected write clears both keys so a half-written session
//! can never be observed.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::net::types::Subject;
use crate::state::auth::Session;

/// Storage key holding the bearer credential.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded subject.
pub const USER_KEY: &str = "user";

/// Failure writing to a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage rejected write to `{key}`")]
    WriteRejected { key: String },
    #[error("could not encode session subject: {0}")]
    Encode(String),
}

/// Minimal string key-value store with `localStorage` semantics.
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when the backend cannot accept the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str);
}

/// Save/read/clear capability for the single active session.
pub trait SessionStore: Send + Sync {
    /// Store `credential` and `subject` together, replacing any prior session.
    fn save(&self, credential: &str, subject: &Subject);

    /// Current session, or `None` when absent, partial, or undecodable.
    fn read(&self) -> Option<Session>;

    /// Remove the session. Idempotent.
    fn clear(&self);
}

/// [`SessionStore`] over any [`StorageBackend`].
#[derive(Debug, Default)]
pub struct KeyValueSessionStore<B> {
    backend: B,
}

/// Session store backed by `window.localStorage`.
pub type BrowserSessionStore = KeyValueSessionStore<LocalStorage>;

/// Session store backed by process memory.
pub type MemorySessionStore = KeyValueSessionStore<MemoryStorage>;

impl<B: StorageBackend> KeyValueSessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Raw backend access, for seeding or inspecting stored values.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn write(&self, credential: &str, subject: &Subject) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(subject).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.backend.set_item(USER_KEY, &encoded)?;
        self.backend.set_item(TOKEN_KEY, credential)
    }
}

impl<B: StorageBackend> SessionStore for KeyValueSessionStore<B> {
    fn save(&self, credential: &str, subject: &Subject) {
        if let Err(e) = self.write(credential, subject) {
            log::warn!("session not persisted: {e}");
            self.clear();
        }
    }

    fn read(&self) -> Option<Session> {
        decode_session(self.backend.get_item(TOKEN_KEY), self.backend.get_item(USER_KEY))
    }

    fn clear(&self) {
        self.backend.remove_item(TOKEN_KEY);
        self.backend.remove_item(USER_KEY);
    }
}

/// Rebuild a session from the two raw stored values.
pub(crate) fn decode_session(token: Option<String>, user: Option<String>) -> Option<Session> {
    match (token, user) {
        (None, None) => None,
        (Some(credential), Some(raw)) => {
            if credential.is_empty() {
                log::warn!("discarding stored session: empty credential");
                return None;
            }
            match serde_json::from_str::<Subject>(&raw) {
                Ok(subject) => Some(Session { credential, subject }),
                Err(e) => {
                    log::warn!("discarding stored session: malformed user record: {e}");
                    None
                }
            }
        }
        (Some(_), None) | (None, Some(_)) => {
            log::warn!("discarding stored session: credential and user record out of step");
            None
        }
    }
}

/// `window.localStorage`. Always empty outside the hydrated browser build.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::WriteRejected { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage refused to remove {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process key-value map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    fn with_items<R>(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> R) -> R {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut items)
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_items(|items| items.insert(key.to_owned(), value.to_owned()));
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.with_items(|items| items.remove(key));
    }
}
