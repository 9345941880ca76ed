//! Per-frame simulation step
//!
//! One call advances the ship by exactly one display frame. Impulses are
//! per frame, so the host must call `tick` once per repaint.

use glam::Vec2;

use super::gauge::{NeedleGeometry, needle_geometry};
use super::input::TickInput;
use super::state::SimState;
use crate::consts::*;
use crate::math::{Vector, clamp, lerp, norm};
use crate::normalize_angle;

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Ship position after integration, before wraparound
    pub ship_pos: Vec2,
    pub heading: f32,
    pub speed: f32,
    /// Exhaust flame length, present only while thrusting
    pub exhaust: Option<f32>,
    pub needle: NeedleGeometry,
}

/// Flame length for the current speed
pub fn exhaust_length(speed: f32) -> f32 {
    let n = norm(0.0, GAUGE_MAX_SPEED, clamp(0.0, GAUGE_MAX_SPEED, speed));
    lerp(EXHAUST_MIN, EXHAUST_MAX, n)
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &TickInput) -> Frame {
    let settings = &state.settings;
    state.time_ticks += 1;

    // Both turn keys held cancel out
    if input.turning_left {
        state.heading -= settings.turn_speed;
    }
    if input.turning_right {
        state.heading += settings.turn_speed;
    }
    state.heading = normalize_angle(state.heading);

    let thrust_len = if input.thrusting && !input.braking {
        settings.acceleration_speed
    } else {
        0.0
    };
    state.thrust = Vector::from_polar(thrust_len, state.heading);

    if input.braking && !input.thrusting {
        let speed = state.ship.speed();
        if speed > 0.0 {
            let braked = settings.brake_policy.apply(speed, settings.brake_power);
            state.ship.velocity.set_length(braked);
        }
    }

    // Cap is checked before this frame's impulse
    if state.ship.speed() >= settings.speed_limit {
        state.ship.velocity.set_length(settings.speed_limit);
    }

    state.ship.accelerate(&state.thrust);
    state.ship.update();

    let speed = state.ship.speed();
    let needle = needle_geometry(
        speed,
        state.needle_arm(),
        state.bounds.width / 2.0,
        state.bounds.height,
    );
    state.needle.position = Vector::from(needle.tip);

    let frame = Frame {
        ship_pos: state.ship.position.as_vec2(),
        heading: state.heading,
        speed,
        exhaust: input.thrusting.then(|| exhaust_length(speed)),
        needle,
    };

    state.bounds.wrap(&mut state.ship.position);

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::gauge::NeedleZone;
    use crate::sim::state::Bounds;
    use crate::{BrakePolicy, Settings};
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-4;

    fn new_state() -> SimState {
        SimState::new(Bounds::new(800.0, 600.0), Settings::default())
    }

    fn thrust() -> TickInput {
        TickInput {
            thrusting: true,
            ..Default::default()
        }
    }

    fn brake() -> TickInput {
        TickInput {
            braking: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_tick_changes_nothing() {
        let mut state = new_state();
        let frame = tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.ship.position, Vector::new(400.0, 300.0));
        assert_eq!(frame.speed, 0.0);
        assert_eq!(frame.exhaust, None);
        assert_eq!(frame.needle.angle, 0.0);
    }

    #[test]
    fn test_turning() {
        let mut state = new_state();
        let both = TickInput {
            turning_left: true,
            turning_right: true,
            ..Default::default()
        };
        tick(&mut state, &both);
        assert!((state.heading - START_HEADING).abs() < EPS);

        let left = TickInput {
            turning_left: true,
            ..Default::default()
        };
        tick(&mut state, &left);
        assert!((state.heading - (START_HEADING - TURN_SPEED)).abs() < EPS);

        let right = TickInput {
            turning_right: true,
            ..Default::default()
        };
        tick(&mut state, &right);
        tick(&mut state, &right);
        assert!((state.heading - (START_HEADING + TURN_SPEED)).abs() < EPS);
    }

    #[test]
    fn test_heading_stays_wrapped() {
        let mut state = new_state();
        let right = TickInput {
            turning_right: true,
            ..Default::default()
        };
        for _ in 0..1_000 {
            tick(&mut state, &right);
            assert!((-PI..PI).contains(&state.heading));
        }

        // A huge turn rate still leaves a bounded heading
        state.settings.turn_speed = 1e30;
        tick(&mut state, &right);
        assert!((-PI..PI).contains(&state.heading));
    }

    #[test]
    fn test_first_impulse_follows_heading() {
        let mut state = new_state();
        tick(&mut state, &thrust());
        assert!(state.ship.velocity.x().abs() < EPS);
        assert!((state.ship.velocity.y() + ACCELERATION_SPEED).abs() < EPS);
    }

    #[test]
    fn test_thrust_and_brake_cancel() {
        let mut state = new_state();
        state.ship.velocity = Vector::from_polar(3.0, 0.0);
        let both = TickInput {
            thrusting: true,
            braking: true,
            ..Default::default()
        };
        let frame = tick(&mut state, &both);
        assert_eq!(state.thrust.length(), 0.0);
        assert!((frame.speed - 3.0).abs() < EPS);
        // Flame still drawn while the thrust key is held
        assert!(frame.exhaust.is_some());
    }

    #[test]
    fn test_brake_one_frame() {
        let mut state = new_state();
        state.ship.velocity = Vector::from_polar(5.0, 0.3);
        let frame = tick(&mut state, &brake());
        assert_eq!(state.thrust.length(), 0.0);
        assert!((frame.speed - 4.8).abs() < EPS);
        assert!((state.ship.velocity.angle() - 0.3).abs() < EPS);
    }

    #[test]
    fn test_brake_floors_at_zero() {
        let mut state = new_state();
        state.ship.velocity = Vector::from_polar(0.1, 1.0);
        for _ in 0..5 {
            let frame = tick(&mut state, &brake());
            assert!(frame.speed >= 0.0);
        }
        assert_eq!(state.ship.speed(), 0.0);
    }

    #[test]
    fn test_brake_reversal_policy() {
        let mut settings = Settings::default();
        settings.brake_policy = BrakePolicy::AllowReversal;
        let mut state = SimState::new(Bounds::new(800.0, 600.0), settings);
        let before = Vector::from_polar(0.1, 0.0);
        state.ship.velocity = before;

        tick(&mut state, &brake());
        assert!((state.ship.speed() - 0.1).abs() < EPS);
        assert!(state.ship.velocity.x() < 0.0);
    }

    #[test]
    fn test_speed_limit_applied_before_impulse() {
        let mut state = new_state();
        state.ship.velocity = Vector::from_polar(25.0, 0.0);
        let frame = tick(&mut state, &TickInput::default());
        assert!((frame.speed - SPEED_LIMIT).abs() < EPS);

        // Impulse along travel can push past the cap for one frame
        state.heading = 0.0;
        let frame = tick(&mut state, &thrust());
        assert!((frame.speed - (SPEED_LIMIT + ACCELERATION_SPEED)).abs() < EPS);
        let frame = tick(&mut state, &thrust());
        assert!((frame.speed - (SPEED_LIMIT + ACCELERATION_SPEED)).abs() < EPS);
    }

    #[test]
    fn test_speed_never_exceeds_cap_by_more_than_one_impulse() {
        let mut settings = Settings::default();
        settings.speed_limit = 2.0;
        settings.acceleration_speed = 0.3;
        let mut state = SimState::new(Bounds::new(800.0, 600.0), settings);

        for _ in 0..200 {
            let frame = tick(&mut state, &thrust());
            assert!(frame.speed <= 2.0 + 0.3 + EPS);
        }
    }

    #[test]
    fn test_thrust_upward_scenario() {
        let mut state = new_state();
        assert_eq!(state.heading, -FRAC_PI_2);

        let mut last_speed = 0.0;
        let mut last_y = state.ship.position.y();
        let mut wraps = 0;

        for _ in 0..100 {
            let frame = tick(&mut state, &thrust());
            assert!(frame.speed > last_speed);
            assert!(frame.speed <= SPEED_LIMIT);
            last_speed = frame.speed;

            let y = state.ship.position.y();
            if frame.ship_pos.y < 0.0 {
                wraps += 1;
                assert_eq!(y, 600.0);
            } else {
                assert!(y < last_y);
            }
            last_y = y;
            assert!((state.ship.position.x() - 400.0).abs() < 0.01);
        }

        assert_eq!(wraps, 1);
        assert!((last_speed - 10.0).abs() < 1e-2);
    }

    #[test]
    fn test_exhaust_grows_with_speed() {
        assert_eq!(exhaust_length(0.0), EXHAUST_MIN);
        assert_eq!(exhaust_length(5.0), 25.0);
        assert_eq!(exhaust_length(15.0), EXHAUST_MAX);

        let mut state = new_state();
        let frame = tick(&mut state, &thrust());
        let len = frame.exhaust.unwrap();
        assert!(len > EXHAUST_MIN && len < EXHAUST_MIN + 1.0);
    }

    #[test]
    fn test_needle_tracks_speed() {
        let mut state = new_state();
        state.heading = 0.0;
        state.ship.velocity = Vector::from_polar(8.0, 0.0);
        let frame = tick(&mut state, &TickInput::default());
        assert!((frame.needle.angle - 144.0).abs() < 1e-2);
        assert_eq!(frame.needle.zone, NeedleZone::Danger);
        assert_eq!(state.needle.position.as_vec2(), frame.needle.tip);
    }
}
