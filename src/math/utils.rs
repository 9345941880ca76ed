//! Numeric helpers
//!
//! Pure functions, no clamping unless the name says so.

use std::f32::consts::PI;

/// Linear interpolation between `min` and `max` by `norm`
#[inline]
pub fn lerp(min: f32, max: f32, norm: f32) -> f32 {
    (max - min) * norm + min
}

/// Position of `value` within `[min, max]` as a 0..1 fraction (unclamped).
///
/// An empty range would divide by zero; the result is pinned to the nearer
/// boundary instead: 0 at or below `min`, 1 above it.
#[inline]
pub fn norm(min: f32, max: f32, value: f32) -> f32 {
    let span = max - min;
    if span == 0.0 {
        log::debug!("norm over empty range [{min}, {max}]");
        return if value <= min { 0.0 } else { 1.0 };
    }
    (value - min) / span
}

/// Bound `value` to `[min, max]`
#[inline]
pub fn clamp(min: f32, max: f32, value: f32) -> f32 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// Re-project `value` from the source range onto the destination range
#[inline]
pub fn map(value: f32, source_min: f32, source_max: f32, dest_min: f32, dest_max: f32) -> f32 {
    lerp(dest_min, dest_max, norm(source_min, source_max, value))
}

#[inline]
pub fn degrees_to_rads(deg: f32) -> f32 {
    deg / 180.0 * PI
}

#[inline]
pub fn rads_to_degrees(rad: f32) -> f32 {
    rad * 180.0 / PI
}
