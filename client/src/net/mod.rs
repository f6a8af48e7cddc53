//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `webhook` performs the single GET per submission. Request shape and
//! reply classification belong to the `chat` crate.

pub mod webhook;
