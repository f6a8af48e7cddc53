//! Outbound webhook request model.
//!
//! The webhook is reached with a single HTTP GET per submission:
//!
//! ```text
//! {endpoint}?message={text}&timestamp={ISO-8601}&sessionId={session}
//! Accept: application/json
//! ```
//!
//! Transports (`gloo-net` in the browser, `reqwest` in the CLI) attach
//! [`WebhookQuery`] as form-encoded query parameters.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::Serialize;

use crate::error::ChatError;

/// `Accept` header value sent with every webhook request.
pub const ACCEPT_JSON: &str = "application/json";

/// Query parameters of a webhook request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WebhookQuery {
    pub message: String,
    /// Wall-clock send time, ISO-8601.
    pub timestamp: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

impl WebhookQuery {
    /// Parameters as `(name, value)` pairs in wire order.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("message", self.message.as_str()),
            ("timestamp", self.timestamp.as_str()),
            ("sessionId", self.session_id.as_str()),
        ]
    }
}

/// A fully described webhook call, ready for a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookRequest {
    /// Webhook base URL, without the query string.
    pub endpoint: String,
    pub query: WebhookQuery,
}

/// Map an HTTP status to the submission outcome. Only 2xx is success.
///
/// # Errors
///
/// Returns [`ChatError::Http`] for any status outside `200..=299`.
pub fn check_status(status: u16) -> Result<(), ChatError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ChatError::Http { status })
    }
}
