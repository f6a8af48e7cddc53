//! Browser webhook transport.
//!
//! Client-side (csr): real HTTP GET via `gloo-net`.
//! Host builds (tests): a stub that reports the transport as unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped onto [`ChatError`] so the conversation can turn it
//! into a single system notice. No retry, no timeout beyond the browser's.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use chat::{ChatError, WebhookRequest};
use serde_json::Value;

#[cfg(any(test, feature = "csr"))]
fn send_failed(detail: impl std::fmt::Display) -> ChatError {
    ChatError::Network(detail.to_string())
}

#[cfg(any(test, feature = "csr"))]
fn body_failed(detail: impl std::fmt::Display) -> ChatError {
    ChatError::InvalidBody(detail.to_string())
}

/// Send `request` and decode the JSON reply body.
///
/// # Errors
///
/// Returns [`ChatError::Network`] if the request could not be sent,
/// [`ChatError::Http`] for a non-2xx status, and [`ChatError::InvalidBody`]
/// if the body is not JSON.
pub async fn fetch_reply(request: &WebhookRequest) -> Result<Value, ChatError> {
    #[cfg(feature = "csr")]
    {
        log::debug!("webhook request to {}", request.endpoint);
        let resp = gloo_net::http::Request::get(&request.endpoint)
            .query(request.query.pairs())
            .header("Accept", chat::request::ACCEPT_JSON)
            .send()
            .await
            .map_err(send_failed)?;
        log::debug!("webhook response status {}", resp.status());
        chat::request::check_status(resp.status())?;
        resp.json::<Value>().await.map_err(body_failed)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ChatError::Network("not available outside the browser".to_owned()))
    }
}
