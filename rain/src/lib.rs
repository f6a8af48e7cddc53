//! Falling-glyph background animation for the Matrix terminal.
//!
//! This crate is compiled to WebAssembly and paints a full-viewport canvas
//! with descending columns of glyphs that leave fading trails. It has no
//! connection to the chat: the host mounts a `<canvas>`, creates an
//! [`engine::Engine`], calls [`engine::Engine::tick`] on a fixed interval,
//! and forwards viewport resizes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-bound engine and testable [`engine::RainCore`] |
//! | [`field`] | Per-column position/speed state and the pure step function |
//! | [`trail`] | Trail geometry and tint bands |
//! | [`render`] | Draws one frame to a 2D context |
//! | [`consts`] | Timing, sizing, and randomness ranges |

pub mod consts;
pub mod engine;
pub mod field;
pub mod render;
pub mod trail;
