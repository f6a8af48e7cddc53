//! Rendering: paints one animation frame to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads column state and draws; stepping happens in [`crate::field`].
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use rand::Rng;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{FADE_FILL, FONT};
use crate::field::RainField;
use crate::trail::{random_trail_len, trail_cells};

/// Draw one frame: fade the previous frame, then every column's trail.
///
/// Glyphs are picked at random per cell, so trails shimmer between frames.
///
/// # Errors
///
/// Returns `Err` if a `fillText` call fails.
#[allow(clippy::cast_precision_loss)]
pub fn draw_frame<R: Rng + ?Sized>(
    ctx: &CanvasRenderingContext2d,
    field: &RainField,
    glyphs: &[char],
    rng: &mut R,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(FADE_FILL);
    ctx.fill_rect(0.0, 0.0, field.width(), field.height());

    if glyphs.is_empty() {
        return Ok(());
    }

    ctx.set_font(FONT);
    let glyph_size = field.glyph_size();
    let mut buf = [0_u8; 4];

    for (i, column) in field.columns().iter().enumerate() {
        let x = i as f64 * glyph_size;
        let len = random_trail_len(rng);
        for cell in trail_cells(column.head_y(glyph_size), glyph_size, len, field.height()) {
            ctx.set_fill_style_str(&cell.fill_style());
            if let Some((color, blur)) = cell.band.shadow() {
                ctx.set_shadow_color(color);
                ctx.set_shadow_blur(blur);
            }

            let glyph = glyphs[rng.random_range(0..glyphs.len())];
            ctx.fill_text(glyph.encode_utf8(&mut buf), x, cell.y)?;

            ctx.set_shadow_blur(0.0);
        }
    }

    Ok(())
}
