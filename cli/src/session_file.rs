//! File-backed session store.
//!
//! The file holds a flat JSON object of key/value pairs, so the same file
//! could carry more than the session identifier later. A missing or unreadable
//! file starts empty; the next save rewrites it.

#[cfg(test)]
#[path = "session_file_test.rs"]
mod session_file_test;

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chat::session::{SessionError, SessionStore};

/// Default session file, relative to the working directory.
pub const DEFAULT_SESSION_FILE: &str = ".matrix-chat-session";

#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileSessionStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(path = %path.display(), %error, "ignoring unreadable session file");
                BTreeMap::new()
            }),
            Err(error) if error.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "session file not readable");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        let rendered =
            serde_json::to_string_pretty(&self.entries).map_err(|e| SessionError::Write(e.to_string()))?;
        fs::write(&self.path, rendered).map_err(|e| SessionError::Write(e.to_string()))
    }
}
