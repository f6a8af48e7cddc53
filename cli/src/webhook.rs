//! `reqwest` transport for the webhook protocol.

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use chat::request::{ACCEPT_JSON, check_status};
use chat::{ChatError, WebhookRequest};
use reqwest::header::ACCEPT;
use serde_json::Value;

/// Build the GET request for one submission without sending it.
pub fn build_request(client: &reqwest::Client, request: &WebhookRequest) -> reqwest::RequestBuilder {
    client
        .get(&request.endpoint)
        .query(&request.query)
        .header(ACCEPT, ACCEPT_JSON)
}

/// Send one submission and decode the JSON reply.
///
/// # Errors
///
/// Returns [`ChatError::Network`] when the request cannot be completed,
/// [`ChatError::Http`] for a non-2xx status, and [`ChatError::InvalidBody`]
/// when the body is not JSON.
pub async fn fetch_reply(client: &reqwest::Client, request: &WebhookRequest) -> Result<Value, ChatError> {
    let response = build_request(client, request)
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;

    let status = response.status().as_u16();
    tracing::debug!(status, endpoint = %request.endpoint, "webhook responded");
    check_status(status)?;

    let body = response
        .text()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ChatError::InvalidBody(e.to_string()))
}
