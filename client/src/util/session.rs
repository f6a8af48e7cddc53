//! `localStorage`-backed session identifier.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identifier is created once per browser storage scope and reused on
//! every later visit. When storage is unavailable (private mode, host builds)
//! the id still exists for the current page, it just is not persisted.

use chat::session::{SessionError, SessionStore, session_id};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::util::clock;

/// [`SessionStore`] over `window.localStorage`.
#[derive(Default)]
pub struct BrowserSessionStore {
    #[cfg(feature = "csr")]
    storage: Option<web_sys::Storage>,
}

impl BrowserSessionStore {
    pub fn open() -> Self {
        #[cfg(feature = "csr")]
        {
            Self { storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()) }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

impl SessionStore for BrowserSessionStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            self.storage.as_ref()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            let storage = self
                .storage
                .as_ref()
                .ok_or_else(|| SessionError::Unavailable("localStorage".to_owned()))?;
            storage
                .set_item(key, value)
                .map_err(|e| SessionError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(SessionError::Unavailable("not running in a browser".to_owned()))
        }
    }
}

/// Load or create the session identifier for this browser.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn resolve_session_id() -> String {
    let mut store = BrowserSessionStore::open();
    let mut rng = SmallRng::seed_from_u64(clock::entropy_seed());
    session_id(&mut store, clock::now_ms().max(0.0) as u64, &mut rng)
}
