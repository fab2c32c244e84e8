//! Tolerance-based float comparison.
//!
//! Entities re-serialized through a lossy numeric path (e.g. a different
//! precision) should still count as "the same asset" within an explicit
//! tolerance band. Two rules are provided:
//!
//! - by proportion: relative tolerance, scaled by the larger magnitude
//! - by deviation: absolute tolerance

/// Check if two values are within `max_proportion` of each other,
/// relative to the larger magnitude.
///
/// Exact equality short-circuits, so `x` is always within proportion 0
/// of itself (including zero and infinities).
#[inline]
pub fn within_proportion_f32(a: f32, b: f32, max_proportion: f32) -> bool {
    a == b || (a - b).abs() <= max_proportion * a.abs().max(b.abs())
}

/// Check if two values differ by at most `max_deviation`.
#[inline]
pub fn within_deviation_f32(a: f32, b: f32, max_deviation: f32) -> bool {
    a == b || (a - b).abs() <= max_deviation
}

/// Double-precision variant of [`within_proportion_f32`].
#[inline]
pub fn within_proportion_f64(a: f64, b: f64, max_proportion: f64) -> bool {
    a == b || (a - b).abs() <= max_proportion * a.abs().max(b.abs())
}

/// Double-precision variant of [`within_deviation_f32`].
#[inline]
pub fn within_deviation_f64(a: f64, b: f64, max_deviation: f64) -> bool {
    a == b || (a - b).abs() <= max_deviation
}
