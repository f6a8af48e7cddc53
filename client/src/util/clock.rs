//! Browser clock and entropy.
//!
//! Requires a browser environment; host builds return fixed values.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch (`Date.now()`).
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Current wall-clock time as ISO-8601 (`Date.prototype.toISOString`).
pub fn iso_now() -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Seed for per-page random number generators.
pub fn entropy_seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        mix_seed(js_sys::Date::now(), js_sys::Math::random())
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Combine a millisecond timestamp with a `[0, 1)` noise sample.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn mix_seed(now_ms: f64, noise: f64) -> u64 {
    let time_bits = now_ms.max(0.0) as u64;
    let noise_bits = (noise.clamp(0.0, 1.0) * (1_u64 << 53) as f64) as u64;
    time_bits.rotate_left(21) ^ noise_bits
}
