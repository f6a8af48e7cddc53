//! Transcript messages.
//!
//! A message is immutable once appended, with one exception: bot replies
//! carry a reveal cursor so hosts can type them out one character at a time.
//! The cursor only moves forward and never changes `text`.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
    System,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
            Self::System => "system",
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier (UUID string).
    pub id: String,
    pub role: Role,
    pub text: String,
    /// Elapsed time since the conversation started, as `HH:MM:SS`.
    pub timestamp: String,
    /// Number of characters currently visible.
    #[serde(default)]
    visible_chars: usize,
}

impl Message {
    fn new(role: Role, text: String, elapsed: Duration, visible_chars: usize) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text,
            timestamp: format_elapsed(elapsed),
            visible_chars,
        }
    }

    /// A fully visible user message.
    #[must_use]
    pub fn user(text: impl Into<String>, elapsed: Duration) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self::new(Role::User, text, elapsed, len)
    }

    /// A bot reply that starts hidden and is revealed by [`Message::reveal_next`].
    #[must_use]
    pub fn bot(text: impl Into<String>, elapsed: Duration) -> Self {
        Self::new(Role::Bot, text.into(), elapsed, 0)
    }

    /// A fully visible system notice.
    #[must_use]
    pub fn system(text: impl Into<String>, elapsed: Duration) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self::new(Role::System, text, elapsed, len)
    }

    /// The revealed prefix of `text`. Always ends on a char boundary.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        match self.text.char_indices().nth(self.visible_chars) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }

    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.visible_chars < self.text.chars().count()
    }

    /// Show one more character. Returns `true` while text remains hidden.
    pub fn reveal_next(&mut self) -> bool {
        if self.is_revealing() {
            self.visible_chars += 1;
        }
        self.is_revealing()
    }

    /// Make the whole text visible.
    pub fn reveal_all(&mut self) {
        self.visible_chars = self.text.chars().count();
    }
}

/// Format an elapsed duration as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped at 24.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
