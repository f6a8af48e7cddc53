use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{GLYPH_SIZE, GLYPHS};
use crate::field::RainField;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core animation state: everything that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Clone, Debug)]
pub struct RainCore {
    pub field: RainField,
    glyphs: Vec<char>,
    rng: SmallRng,
}

impl RainCore {
    #[must_use]
    pub fn new(width: f64, height: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let field = RainField::new(width, height, GLYPH_SIZE, &mut rng);
        Self { field, glyphs: GLYPHS.chars().collect(), rng }
    }

    /// Recompute dimensions and column count.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height, &mut self.rng);
        log::debug!("rain resized to {width}x{height}, {} columns", self.field.column_count());
    }

    /// Advance every column one tick.
    pub fn advance(&mut self) {
        self.field.step(&mut self.rng);
    }

    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    fn draw(&mut self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        render::draw_frame(ctx, &self.field, &self.glyphs, &mut self.rng)
    }
}

/// The full rain engine. Wraps `RainCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: RainCore,
}

impl Engine {
    /// Bind an engine to `canvas`, sized to the canvas's current dimensions.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, seed: u64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let core = RainCore::new(f64::from(canvas.width()), f64::from(canvas.height()), seed);
        Ok(Self { canvas, ctx, core })
    }

    // --- Viewport ---

    /// Resize the canvas backing store and recompute columns.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.core.resize(f64::from(width), f64::from(height));
    }

    // --- Tick ---

    /// Draw the current frame, then advance every column.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails; column state still advances.
    pub fn tick(&mut self) -> Result<(), JsValue> {
        let drawn = self.core.draw(&self.ctx);
        self.core.advance();
        drawn
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.core.field.column_count()
    }
}
