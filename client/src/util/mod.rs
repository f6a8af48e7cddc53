//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (clock, injected
//! config, storage) from component logic to improve reuse and testability.

pub mod clock;
pub mod env;
pub mod session;
