//! # client
//!
//! Leptos + WASM front end for the Matrix terminal chat widget.
//!
//! This crate contains the terminal page, its components, reactive state,
//! the browser webhook transport, and browser glue (`window.ENV`,
//! `localStorage`, clocks). Conversation rules live in the `chat` crate;
//! the background animation lives in the `rain` crate and is mounted by the
//! `RainHost` component.
//!
//! Browser-only code is gated behind the `csr` feature so the state and
//! helper modules stay testable on the host target.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
