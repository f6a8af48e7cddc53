//! Conversation controller.
//!
//! DESIGN
//! ======
//! The controller is a synchronous state machine; the network call happens
//! outside it. A host drives one exchange as:
//!
//! 1. [`Conversation::submit`] appends the user message and, when accepted,
//!    hands back a [`WebhookRequest`].
//! 2. The host performs the GET with its own transport.
//! 3. [`Conversation::resolve`] appends the bot reply or a system notice.
//! 4. [`Conversation::advance_reveal`] is called every [`REVEAL_TICK_MS`]
//!    until it returns `false`.
//!
//! Between 1 and 3 the conversation is pending and further submissions are
//! rejected. There is no retry and no cancellation.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_json::Value;

use crate::config::{WidgetConfig, normalize_endpoint};
use crate::error::ChatError;
use crate::message::{Message, Role};
use crate::reply::ReplyShape;
use crate::request::{WebhookQuery, WebhookRequest};

/// Interval between revealed characters of a bot reply.
pub const REVEAL_TICK_MS: u32 = 30;

/// System notice appended for every failed submission.
pub const CONNECTION_ERROR_TEXT: &str = "Connection error. Please check your webhook configuration.";

/// Time context for a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stamp {
    /// Time since the conversation started; drives the display timestamp.
    pub elapsed: Duration,
    /// Wall-clock time, ISO-8601; sent to the webhook.
    pub iso8601: String,
}

/// Why a submission was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Input was empty or whitespace only.
    Empty,
    /// A previous submission has not resolved yet.
    Pending,
}

/// Outcome of [`Conversation::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Nothing changed.
    Rejected(RejectReason),
    /// User message appended; the host must send this request and then call
    /// [`Conversation::resolve`].
    Dispatched(WebhookRequest),
    /// User message appended and the submission already failed locally. The
    /// system notice is in the transcript and nothing is pending.
    Failed(ChatError),
}

/// Chat state for one widget instance.
#[derive(Clone, Debug)]
pub struct Conversation {
    messages: Vec<Message>,
    message_count: u32,
    pending: bool,
    endpoint: Option<String>,
    session_id: String,
    rng: SmallRng,
}

impl Conversation {
    /// Create an unconfigured conversation. `seed` drives placeholder choice.
    #[must_use]
    pub fn new(session_id: impl Into<String>, seed: u64) -> Self {
        Self {
            messages: Vec::new(),
            message_count: 0,
            pending: false,
            endpoint: None,
            session_id: session_id.into(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create a conversation with the endpoint taken from `config`.
    #[must_use]
    pub fn with_config(config: &WidgetConfig, session_id: impl Into<String>, seed: u64) -> Self {
        let mut conversation = Self::new(session_id, seed);
        conversation.endpoint.clone_from(&config.webhook_url);
        conversation
    }

    /// Set the webhook base URL. A blank value clears it.
    pub fn configure_endpoint(&mut self, url: &str) {
        self.endpoint = normalize_endpoint(url);
        log::info!(
            "webhook URL {}",
            if self.endpoint.is_some() { "configured" } else { "cleared" }
        );
    }

    /// Accept user input.
    ///
    /// Appends exactly one user message for any accepted input, before the
    /// host has a chance to start network activity.
    pub fn submit(&mut self, raw: &str, at: &Stamp) -> Submission {
        let text = raw.trim();
        if text.is_empty() {
            return Submission::Rejected(RejectReason::Empty);
        }
        if self.pending {
            return Submission::Rejected(RejectReason::Pending);
        }

        self.messages.push(Message::user(text, at.elapsed));
        self.message_count += 1;
        self.pending = true;

        let Some(endpoint) = self.endpoint.clone() else {
            let err = ChatError::ConfigurationMissing;
            self.fail(&err, at.elapsed);
            return Submission::Failed(err);
        };

        log::debug!("dispatching message #{} to webhook", self.message_count);
        Submission::Dispatched(WebhookRequest {
            endpoint,
            query: WebhookQuery {
                message: text.to_owned(),
                timestamp: at.iso8601.clone(),
                session_id: self.session_id.clone(),
            },
        })
    }

    /// Complete the pending submission with the transport's result.
    ///
    /// Returns the role of the appended message, or `None` if nothing was
    /// pending.
    pub fn resolve(&mut self, result: Result<Value, ChatError>, elapsed: Duration) -> Option<Role> {
        if !self.pending {
            log::warn!("resolve called with no pending submission");
            return None;
        }

        match result {
            Ok(body) => {
                let shape = ReplyShape::classify(&body);
                if shape == ReplyShape::Unrecognized {
                    log::debug!("unrecognized webhook reply, using placeholder: {body}");
                }
                let text = shape.into_text(&mut self.rng);
                self.messages.push(Message::bot(text, elapsed));
                self.pending = false;
                Some(Role::Bot)
            }
            Err(err) => {
                self.fail(&err, elapsed);
                Some(Role::System)
            }
        }
    }

    /// Reveal one more character of every bot reply still being typed out.
    ///
    /// Returns `true` while any reply remains partially hidden.
    pub fn advance_reveal(&mut self) -> bool {
        let mut in_progress = false;
        for message in self.messages.iter_mut().filter(|m| m.is_revealing()) {
            in_progress |= message.reveal_next();
        }
        in_progress
    }

    /// Finish every reveal immediately.
    pub fn reveal_all(&mut self) {
        for message in &mut self.messages {
            message.reveal_all();
        }
    }

    fn fail(&mut self, err: &ChatError, elapsed: Duration) {
        log::error!("webhook exchange failed: {err}");
        self.messages.push(Message::system(CONNECTION_ERROR_TEXT, elapsed));
        self.pending = false;
    }

    // --- Queries ---

    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.messages
    }

    /// Number of accepted user submissions.
    #[must_use]
    pub fn message_count(&self) -> u32 {
        self.message_count
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}
