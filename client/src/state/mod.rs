//! Shared client-side state modules.

pub mod chat;
