//! Trail geometry and tint bands.
//!
//! A trail hangs upward from a column's head. Cell `j` sits `j` glyphs above
//! the head and fades linearly with `j`. The first few cells are tinted and
//! glow brighter than the rest to sell the "leading edge" look.

#[cfg(test)]
#[path = "trail_test.rs"]
mod trail_test;

use rand::Rng;

use crate::consts::{TRAIL_LEN_MAX, TRAIL_LEN_MIN};

/// Tint band of a trail cell, from head to tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    /// `j == 0`: white.
    Head,
    /// `j < 2`: pale green.
    Glow,
    /// `j < 6`: bright green.
    Bright,
    /// `j < 12`: green.
    Medium,
    /// Everything after: dark green.
    Dark,
}

impl Band {
    #[must_use]
    pub fn for_index(j: usize) -> Self {
        match j {
            0 => Self::Head,
            1 => Self::Glow,
            2..=5 => Self::Bright,
            6..=11 => Self::Medium,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Head => (255, 255, 255),
            Self::Glow => (200, 255, 200),
            Self::Bright => (100, 255, 100),
            Self::Medium => (0, 255, 0),
            Self::Dark => (0, 180, 0),
        }
    }

    /// Shadow color and blur radius, if the band glows.
    #[must_use]
    pub fn shadow(self) -> Option<(&'static str, f64)> {
        match self {
            Self::Head => Some(("#ffffff", 8.0)),
            Self::Glow => Some(("#00ff00", 4.0)),
            Self::Bright => Some(("#00ff00", 2.0)),
            Self::Medium | Self::Dark => None,
        }
    }

    fn alpha(self, opacity: f64) -> f64 {
        match self {
            Self::Head => (opacity * 1.2).min(1.0),
            Self::Glow | Self::Bright => opacity,
            Self::Medium => opacity * 0.9,
            Self::Dark => opacity * 0.7,
        }
    }
}

/// One drawable glyph position in a trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailCell {
    /// Distance from the head, in cells.
    pub index: usize,
    /// Baseline y in pixels.
    pub y: f64,
    pub band: Band,
    /// Final fill alpha in `[0, 1]`.
    pub alpha: f64,
}

impl TrailCell {
    /// CSS fill style for this cell.
    #[must_use]
    pub fn fill_style(&self) -> String {
        let (r, g, b) = self.band.rgb();
        format!("rgba({r}, {g}, {b}, {})", self.alpha)
    }
}

/// Visible cells of a trail whose head is at `head_y`.
///
/// Cells are kept only while strictly inside `(-glyph_size, height + glyph_size)`
/// so glyphs partially above or below the canvas still draw.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn trail_cells(head_y: f64, glyph_size: f64, len: usize, height: f64) -> Vec<TrailCell> {
    if len == 0 {
        return Vec::new();
    }
    let len_f = len as f64;
    (0..len)
        .filter_map(|j| {
            let y = head_y - j as f64 * glyph_size;
            if y <= -glyph_size || y >= height + glyph_size {
                return None;
            }
            let opacity = ((len_f - j as f64) / len_f).max(0.0);
            let band = Band::for_index(j);
            Some(TrailCell { index: j, y, band, alpha: band.alpha(opacity) })
        })
        .collect()
}

/// Trail length for one column on one tick.
pub fn random_trail_len<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.random_range(TRAIL_LEN_MIN..=TRAIL_LEN_MAX)
}
