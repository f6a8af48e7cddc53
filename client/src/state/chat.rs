//! Reactive chat state provided to the terminal components.
//!
//! Wraps the platform-independent [`Conversation`] with the page clock origin
//! and the reveal-loop guard. Components hold it as `RwSignal<ChatState>`.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::time::Duration;

use chat::{ChatError, Conversation, Role, Stamp};
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct ChatState {
    pub conversation: Conversation,
    /// `Date.now()` when the page mounted; origin of message timestamps.
    pub started_ms: f64,
    /// A typewriter loop is currently advancing bot replies.
    pub reveal_running: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(Conversation::new(String::new(), 0), 0.0)
    }
}

impl ChatState {
    #[must_use]
    pub fn new(conversation: Conversation, started_ms: f64) -> Self {
        Self { conversation, started_ms, reveal_running: false }
    }

    /// Time since mount. Clock skew backwards clamps to zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn elapsed(&self, now_ms: f64) -> Duration {
        Duration::from_millis((now_ms - self.started_ms).max(0.0) as u64)
    }

    #[must_use]
    pub fn stamp(&self, now_ms: f64, iso8601: String) -> Stamp {
        Stamp { elapsed: self.elapsed(now_ms), iso8601 }
    }

    /// Resolve the pending exchange.
    ///
    /// Returns `true` when the caller should start a reveal loop: a bot reply
    /// was appended and no loop is running yet.
    pub fn resolve(&mut self, result: Result<Value, ChatError>, now_ms: f64) -> bool {
        let elapsed = self.elapsed(now_ms);
        let appended = self.conversation.resolve(result, elapsed);
        if appended == Some(Role::Bot) && !self.reveal_running {
            self.reveal_running = true;
            return true;
        }
        false
    }

    /// One typewriter step. Returns `false` once every reply is visible,
    /// at which point the loop guard is released.
    pub fn reveal_tick(&mut self) -> bool {
        let more = self.conversation.advance_reveal();
        if !more {
            self.reveal_running = false;
        }
        more
    }

    /// Connection label for the status bar.
    #[must_use]
    pub fn link_label(&self) -> &'static str {
        if self.conversation.endpoint().is_some() {
            "WEBHOOK: LINKED"
        } else {
            "WEBHOOK: OFFLINE"
        }
    }

    /// Timestamp shown on the typing indicator: when the pending message was sent.
    #[must_use]
    pub fn typing_since(&self) -> Option<String> {
        if !self.conversation.is_pending() {
            return None;
        }
        self.conversation.transcript().last().map(|m| m.timestamp.clone())
    }
}
