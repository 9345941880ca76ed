//! Speedometer needle geometry
//!
//! The gauge pivot sits at the bottom-center of the surface. Speed in
//! `[0, GAUGE_MAX_SPEED]` sweeps the needle from 0° (pointing left) through
//! 90° (straight up) to 180° (pointing right).

use glam::Vec2;

use crate::consts::*;
use crate::math::{clamp, degrees_to_rads, lerp, norm};

/// Needle tip marker color band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeedleZone {
    Normal,
    Warning,
    Danger,
}

impl NeedleZone {
    /// Zone for a needle angle in degrees. The red band starts at exactly
    /// `NEEDLE_DANGER_ANGLE` so every angle lands in one zone.
    pub fn from_angle(angle: f32) -> Self {
        if angle <= NEEDLE_WARN_ANGLE {
            NeedleZone::Normal
        } else if angle < NEEDLE_DANGER_ANGLE {
            NeedleZone::Warning
        } else {
            NeedleZone::Danger
        }
    }
}

/// Resolved needle for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeedleGeometry {
    /// Gauge pivot (bottom-center)
    pub pivot: Vec2,
    /// Needle tip
    pub tip: Vec2,
    /// Needle angle in degrees, 0..=180
    pub angle: f32,
    pub zone: NeedleZone,
}

/// Map the ship's speed to a needle of `arm_length` pivoting at
/// (`center_x`, `height`).
pub fn needle_geometry(speed: f32, arm_length: f32, center_x: f32, height: f32) -> NeedleGeometry {
    let needle_norm = norm(0.0, GAUGE_MAX_SPEED, clamp(0.0, GAUGE_MAX_SPEED, speed));
    let angle = lerp(NEEDLE_MIN_ANGLE, NEEDLE_MAX_ANGLE, needle_norm);

    let new_y = degrees_to_rads(angle).sin() * arm_length;
    let radicand = arm_length * arm_length - new_y * new_y;
    if radicand < 0.0 {
        log::debug!("needle radicand {radicand} clamped to 0 at {angle}°");
    }
    let new_x = radicand.max(0.0).sqrt();

    let tip_x = if angle <= NEEDLE_WARN_ANGLE {
        center_x - new_x
    } else {
        center_x + new_x
    };

    NeedleGeometry {
        pivot: Vec2::new(center_x, height),
        tip: Vec2::new(tip_x, height - new_y),
        angle,
        zone: NeedleZone::from_angle(angle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_needle_at_rest_points_left() {
        let n = needle_geometry(0.0, 90.0, 400.0, 600.0);
        assert_eq!(n.angle, 0.0);
        assert!((n.tip.x - 310.0).abs() < EPS);
        assert!((n.tip.y - 600.0).abs() < EPS);
        assert_eq!(n.zone, NeedleZone::Normal);
        assert_eq!(n.pivot, Vec2::new(400.0, 600.0));
    }

    #[test]
    fn test_needle_half_speed_points_up() {
        let n = needle_geometry(5.0, 90.0, 400.0, 600.0);
        assert!((n.angle - 90.0).abs() < EPS);
        assert!((n.tip.x - 400.0).abs() < 0.1);
        assert!((n.tip.y - 510.0).abs() < EPS);
        assert_eq!(n.zone, NeedleZone::Normal);
    }

    #[test]
    fn test_needle_pinned_above_gauge_range() {
        let n = needle_geometry(19.0, 90.0, 400.0, 600.0);
        assert_eq!(n.angle, 180.0);
        assert!((n.tip.x - 490.0).abs() < EPS);
        assert!((n.tip.y - 600.0).abs() < 0.01);
        assert_eq!(n.zone, NeedleZone::Danger);
    }

    #[test]
    fn test_negative_speed_reads_zero() {
        let n = needle_geometry(-3.0, 90.0, 400.0, 600.0);
        assert_eq!(n.angle, 0.0);
    }

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(NeedleZone::from_angle(90.0), NeedleZone::Normal);
        assert_eq!(NeedleZone::from_angle(90.5), NeedleZone::Warning);
        assert_eq!(NeedleZone::from_angle(129.9), NeedleZone::Warning);
        assert_eq!(NeedleZone::from_angle(130.0), NeedleZone::Danger);
        assert_eq!(NeedleZone::from_angle(130.5), NeedleZone::Danger);
    }

    proptest! {
        #[test]
        fn needle_is_always_finite(speed in -1e6f32..1e6, arm in 0.0f32..500.0) {
            let n = needle_geometry(speed, arm, 400.0, 600.0);
            prop_assert!(n.tip.x.is_finite() && n.tip.y.is_finite());
            prop_assert!((0.0..=180.0).contains(&n.angle));
            // Tip stays on the arm's circle
            let reach = (n.tip - n.pivot).length();
            prop_assert!((reach - arm).abs() < arm * 1e-3 + 1e-2);
        }
    }
}
