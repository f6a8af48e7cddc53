//! Recognized webhook response shapes.
//!
//! The webhook contract is informal. A reply body is checked against the
//! shapes below in priority order; the first match wins:
//!
//! 1. `{"text": "..."}`
//! 2. `[{"text": "..."}, ...]` (first element only)
//! 3. `{"message": "..."}`
//!
//! Anything else falls back to a placeholder line. A field only counts when
//! it is "truthy": a non-empty string, `true`, or a non-zero number. Numbers
//! render the way a browser would print them, so `1.0` shows as `1`.

#[cfg(test)]
#[path = "reply_test.rs"]
mod reply_test;

use rand::Rng;
use serde_json::Value;

/// Placeholder lines used when a reply body matches no recognized shape.
pub const FALLBACK_RESPONSES: [&str; 8] = [
    "I'm processing your request through the Matrix...",
    "Neural pathways activated. Analyzing your input...",
    "Connection to the mainframe established. Please wait...",
    "Decrypting your message through quantum channels...",
    "The Oracle is consulting the source code...",
    "Routing through secure Matrix protocols...",
    "Your request has been logged in the system archives...",
    "Initiating response sequence from the machine city...",
];

/// Classified webhook reply body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplyShape {
    /// Object with a `text` field.
    Text(String),
    /// Non-empty array whose first element has a `text` field.
    FirstItemText(String),
    /// Object with a `message` field.
    Message(String),
    /// None of the above.
    Unrecognized,
}

impl ReplyShape {
    /// Classify a decoded JSON body.
    #[must_use]
    pub fn classify(body: &Value) -> Self {
        if let Some(text) = truthy_text(body.get("text")) {
            return Self::Text(text);
        }
        if let Some(text) = body
            .as_array()
            .and_then(|items| items.first())
            .and_then(|first| truthy_text(first.get("text")))
        {
            return Self::FirstItemText(text);
        }
        if let Some(text) = truthy_text(body.get("message")) {
            return Self::Message(text);
        }
        Self::Unrecognized
    }

    /// Reply text to show, substituting a placeholder for unrecognized bodies.
    pub fn into_text<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        match self {
            Self::Text(text) | Self::FirstItemText(text) | Self::Message(text) => text,
            Self::Unrecognized => fallback_response(rng).to_owned(),
        }
    }
}

/// Pick one placeholder line uniformly at random.
pub fn fallback_response<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FALLBACK_RESPONSES[rng.random_range(0..FALLBACK_RESPONSES.len())]
}

fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_owned()),
        Value::Number(n) if n.is_f64() => n.as_f64().filter(|v| *v != 0.0).map(display_float),
        Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

/// Whole floats print without a fractional part.
fn display_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
