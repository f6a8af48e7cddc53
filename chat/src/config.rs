//! Endpoint configuration.
//!
//! The widget has a single configuration value: the webhook base URL. It is
//! injected by the host (`window.ENV` in the browser, flags or environment
//! in the CLI). A missing or blank value is a valid state meaning
//! "unconfigured".

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the injected setting holding the webhook base URL.
pub const WEBHOOK_URL_ENV: &str = "N8N_WEBHOOK_URL";

/// Widget configuration resolved at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Webhook base URL, already trimmed. `None` when unconfigured.
    pub webhook_url: Option<String>,
}

impl WidgetConfig {
    /// Build a config from a raw, possibly blank, URL value.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        Self { webhook_url: raw.and_then(normalize_endpoint) }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }
}

/// Trim surrounding whitespace; blank input means no endpoint.
#[must_use]
pub fn normalize_endpoint(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
