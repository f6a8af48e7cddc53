//! Top-level page components.

pub mod terminal;
