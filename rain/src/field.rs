//! Column state and the per-tick step function.
//!
//! Positions are measured in glyph rows: a column's head is drawn at
//! `position * glyph_size` pixels from the top. Negative positions sit above
//! the canvas and scroll into view.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;

use crate::consts::{INITIAL_OFFSET_MIN, RESET_OFFSET_MIN, RESET_SLACK_PX, SPEED_MAX, SPEED_MIN};

/// One vertical lane of the animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Column {
    /// Head position in glyph rows.
    pub position: f64,
    /// Rows advanced per tick.
    pub speed: f64,
}

impl Column {
    /// A column starting at a random whole row in `[offset_min, 0]`.
    pub fn seeded<R: Rng + ?Sized>(rng: &mut R, offset_min: i32) -> Self {
        Self {
            position: f64::from(rng.random_range(offset_min..=0)),
            speed: random_speed(rng),
        }
    }

    /// Head position in pixels.
    #[must_use]
    pub fn head_y(&self, glyph_size: f64) -> f64 {
        self.position * glyph_size
    }
}

/// All columns for a canvas of a given size.
#[derive(Clone, Debug, PartialEq)]
pub struct RainField {
    columns: Vec<Column>,
    width: f64,
    height: f64,
    glyph_size: f64,
}

impl RainField {
    /// Seed one column per glyph-width slot.
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, glyph_size: f64, rng: &mut R) -> Self {
        let count = column_count(width, glyph_size);
        let columns = (0..count)
            .map(|_| Column::seeded(rng, INITIAL_OFFSET_MIN))
            .collect();
        Self { columns, width, height, glyph_size }
    }

    /// Recompute dimensions and column count after a viewport change.
    ///
    /// Surviving columns keep their state; new columns are freshly seeded.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        let count = column_count(width, self.glyph_size);
        self.width = width;
        self.height = height;
        if count < self.columns.len() {
            self.columns.truncate(count);
        } else {
            let missing = count - self.columns.len();
            self.columns
                .extend((0..missing).map(|_| Column::seeded(rng, INITIAL_OFFSET_MIN)));
        }
    }

    /// Advance every column by its speed and recycle columns past the bottom.
    ///
    /// The reset threshold adds a fresh random slack per column per tick so
    /// columns do not restart in lockstep.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let glyph_size = self.glyph_size;
        let height = self.height;
        for column in &mut self.columns {
            column.position += column.speed;
            let slack = rng.random_range(0.0..RESET_SLACK_PX);
            if column.head_y(glyph_size) > height + slack {
                *column = Column::seeded(rng, RESET_OFFSET_MIN);
            }
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn glyph_size(&self) -> f64 {
        self.glyph_size
    }
}

/// `floor(width / glyph_size)`, or zero for degenerate sizes.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn column_count(width: f64, glyph_size: f64) -> usize {
    if !width.is_finite() || width <= 0.0 || glyph_size <= 0.0 {
        return 0;
    }
    (width / glyph_size).floor() as usize
}

fn random_speed<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random_range(SPEED_MIN..SPEED_MAX)
}
