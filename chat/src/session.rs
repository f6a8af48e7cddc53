//! Session identifiers.
//!
//! One identifier is generated per storage scope and reused on every later
//! load. Hosts provide the storage through [`SessionStore`]: browser
//! `localStorage` in the client, a small file in the CLI.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use rand::Rng;

/// Storage key holding the session identifier.
pub const SESSION_STORAGE_KEY: &str = "matrix-chat-session";

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Error returned by [`SessionStore::save`].
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The backing store cannot be reached at all.
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    /// The store rejected the write.
    #[error("failed to persist session: {0}")]
    Write(String),
}

/// Minimal key-value storage for the session identifier.
pub trait SessionStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`SessionError`] if the value could not be persisted.
    fn save(&mut self, key: &str, value: &str) -> Result<(), SessionError>;
}

/// In-memory store; scope ends when the value is dropped.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Generate a fresh identifier: `session_{unix_millis}_{9 base-36 chars}`.
pub fn generate_session_id<R: Rng + ?Sized>(now_ms: u64, rng: &mut R) -> String {
    let suffix = (0..SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
        .collect::<String>();
    format!("session_{now_ms}_{suffix}")
}

/// Return the stored identifier, generating and saving one on first use.
///
/// A failed save is logged and the generated identifier is still returned,
/// so the current page keeps a stable id even when storage is read-only.
pub fn session_id<S, R>(store: &mut S, now_ms: u64, rng: &mut R) -> String
where
    S: SessionStore + ?Sized,
    R: Rng + ?Sized,
{
    if let Some(existing) = store.load(SESSION_STORAGE_KEY).filter(|id| !id.is_empty()) {
        return existing;
    }

    let fresh = generate_session_id(now_ms, rng);
    if let Err(e) = store.save(SESSION_STORAGE_KEY, &fresh) {
        log::warn!("session id not persisted: {e}");
    }
    fresh
}
