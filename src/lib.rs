//! Speedo - a steerable ship with a speedometer gauge
//!
//! Core modules:
//! - `math`: Vector type and numeric helpers (lerp, norm, clamp, map)
//! - `sim`: Frame-driven simulation (ship particle, controls, needle gauge)
//! - `renderer`: Drawing primitives over a 2D canvas target
//! - `settings`: Tunables and preferences

pub mod math;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use math::Vector;
pub use settings::{BrakePolicy, Settings};

use glam::Vec2;

/// Simulation defaults
pub mod consts {
    /// Heading change per frame while a turn key is held (radians)
    pub const TURN_SPEED: f32 = 0.09;
    /// Thrust impulse per frame (pixels/frame)
    pub const ACCELERATION_SPEED: f32 = 0.1;
    /// Hard cap on ship speed (pixels/frame)
    pub const SPEED_LIMIT: f32 = 20.0;
    /// Speed removed per frame while braking
    pub const BRAKE_POWER: f32 = 0.2;
    /// Distance from gauge pivot to needle tip (pixels)
    pub const NEEDLE_LENGTH: f32 = 90.0;
    /// Initial heading: pointing up the screen
    pub const START_HEADING: f32 = -std::f32::consts::FRAC_PI_2;

    /// Gauge input range (speed that pins the needle at 180 degrees)
    pub const GAUGE_MAX_SPEED: f32 = 10.0;
    /// Needle sweep (degrees)
    pub const NEEDLE_MIN_ANGLE: f32 = 0.0;
    pub const NEEDLE_MAX_ANGLE: f32 = 180.0;
    /// Needle marker turns orange above this angle
    pub const NEEDLE_WARN_ANGLE: f32 = 90.0;
    /// Needle marker turns red at or above this angle
    pub const NEEDLE_DANGER_ANGLE: f32 = 130.0;

    /// Exhaust flame length range (pixels)
    pub const EXHAUST_MIN: f32 = 10.0;
    pub const EXHAUST_MAX: f32 = 40.0;
}

/// Normalized angle to [-π, π)
///
/// Constant time for any input; non-finite angles come back unchanged.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    if !angle.is_finite() {
        return angle;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU itself
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(-FRAC_PI_2) + FRAC_PI_2).abs() < 1e-6);
        assert!(normalize_angle(4.0 * PI).abs() < 1e-5);
        assert!((normalize_angle(2.5 * PI) - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_huge_angle_terminates() {
        let a = normalize_angle(1e30);
        assert!((-PI..PI).contains(&a));
        assert!(normalize_angle(f32::NAN).is_nan());
    }

    proptest! {
        #[test]
        fn normalize_angle_in_range(angle in -1e9f32..1e9) {
            let a = normalize_angle(angle);
            prop_assert!((-PI..PI).contains(&a));
        }
    }
}
