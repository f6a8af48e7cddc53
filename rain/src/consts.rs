//! Shared numeric constants for the rain crate.

// ── Timing ──────────────────────────────────────────────────────

/// Fixed interval between animation ticks, in milliseconds.
pub const TICK_MS: u32 = 40;

// ── Glyphs ──────────────────────────────────────────────────────

/// Glyph cell size in CSS pixels; also the column width.
pub const GLYPH_SIZE: f64 = 18.0;

/// Canvas font used for glyphs.
pub const FONT: &str = "18px Courier New";

/// Katakana, digits, and uppercase Latin letters.
pub const GLYPHS: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// ── Fade ────────────────────────────────────────────────────────

/// Overlay painted every tick; low alpha leaves trailing afterimages.
pub const FADE_FILL: &str = "rgba(0, 0, 0, 0.05)";

// ── Columns ─────────────────────────────────────────────────────

/// Column speed range in glyph rows per tick (`min..max`).
pub const SPEED_MIN: f64 = 0.5;
pub const SPEED_MAX: f64 = 1.0;

/// Lowest starting row for a freshly seeded column.
pub const INITIAL_OFFSET_MIN: i32 = -100;

/// Lowest starting row for a column after it falls off screen.
pub const RESET_OFFSET_MIN: i32 = -50;

/// Upper bound of the random slack below the canvas before a column resets.
pub const RESET_SLACK_PX: f64 = 5000.0;

// ── Trails ──────────────────────────────────────────────────────

/// Trail length range in cells (`min..=max`).
pub const TRAIL_LEN_MIN: usize = 10;
pub const TRAIL_LEN_MAX: usize = 24;
