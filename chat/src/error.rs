//! Failure modes of a single submission.
//!
//! Every variant is handled where the submission failed and becomes one
//! system-role transcript entry. A JSON body that matches no recognized
//! reply shape is not an error; see [`crate::reply`].

/// Reason a submission produced no bot reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// No webhook endpoint has been configured.
    #[error("webhook URL not configured")]
    ConfigurationMissing,
    /// The request could not be sent or the transport failed mid-flight.
    #[error("network request failed: {0}")]
    Network(String),
    /// The webhook answered with a non-2xx status.
    #[error("webhook returned status {status}")]
    Http { status: u16 },
    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}
