//! Conversation core for the Matrix terminal chat widget.
//!
//! This crate owns everything about a chat exchange that does not depend on
//! a browser: the message model, the append-only transcript, the controller
//! state machine that guards overlapping submissions, the webhook request and
//! response contract, and session identifiers. Both the `client` (WASM) and
//! `cli` (native) crates drive the same [`Conversation`] with their own HTTP
//! transport.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`conversation`] | Controller: submit, resolve, reveal |
//! | [`message`] | Message, role, and elapsed timestamp formatting |
//! | [`reply`] | Recognized webhook response shapes and placeholder lines |
//! | [`request`] | Webhook query model and status checks |
//! | [`session`] | Session identifier generation and the storage seam |
//! | [`config`] | Endpoint configuration |
//! | [`error`] | Error taxonomy for failed submissions |

pub mod config;
pub mod conversation;
pub mod error;
pub mod message;
pub mod reply;
pub mod request;
pub mod session;

pub use config::WidgetConfig;
pub use conversation::{Conversation, RejectReason, Stamp, Submission};
pub use error::ChatError;
pub use message::{Message, Role};
pub use reply::ReplyShape;
pub use request::{WebhookQuery, WebhookRequest};
