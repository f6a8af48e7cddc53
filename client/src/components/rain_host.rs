//! Bridge component between the Leptos UI and the imperative `rain::Engine`.
//!
//! ARCHITECTURE
//! ============
//! Mounts a full-viewport `<canvas>` behind the terminal, creates the engine
//! once the element exists, and drives it with a fixed `TICK_MS` interval for
//! the lifetime of the page. Window resizes are forwarded to the engine.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;
#[cfg(feature = "csr")]
use rain::consts::TICK_MS;
#[cfg(feature = "csr")]
use rain::engine::Engine;

#[cfg(feature = "csr")]
use crate::util::clock;

/// Background canvas running the falling-glyph animation.
#[component]
pub fn RainHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    {
        let started = Rc::new(Cell::new(false));
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if started.replace(true) {
                return;
            }
            start_rain(canvas);
        });
    }

    view! {
        <canvas class="rain-host" id="matrix-canvas" node_ref=canvas_ref aria-hidden="true"></canvas>
    }
}

#[cfg(feature = "csr")]
fn start_rain(canvas: web_sys::HtmlCanvasElement) {
    let mut engine = match Engine::new(canvas, clock::entropy_seed()) {
        Ok(engine) => engine,
        Err(err) => {
            log::warn!("background animation disabled: {err:?}");
            return;
        }
    };
    let (width, height) = viewport_size();
    engine.resize(width, height);
    log::debug!("rain started with {} columns", engine.column_count());

    let engine = Rc::new(RefCell::new(engine));

    let engine_for_tick = Rc::clone(&engine);
    let tick = Interval::new(TICK_MS, move || {
        if let Err(err) = engine_for_tick.borrow_mut().tick() {
            log::debug!("rain frame failed: {err:?}");
        }
    });
    // Runs until the page closes.
    tick.forget();

    let engine_for_resize = engine;
    let _resize = window_event_listener(leptos::ev::resize, move |_| {
        let (width, height) = viewport_size();
        engine_for_resize.borrow_mut().resize(width, height);
    });
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn viewport_size() -> (u32, u32) {
    let Some(window) = web_sys::window() else {
        return (0, 0);
    };
    let dim = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}
