//! Simulation state
//!
//! One `SimState` exists per running surface. It is owned by whatever drives
//! the frames and passed into `tick` by reference.

use glam::Vec2;

use super::particle::Particle;
use crate::Settings;
use crate::consts::START_HEADING;
use crate::math::Vector;

/// Drawing surface extent; positions wrap toroidally inside it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Bottom-center point (gauge pivot)
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height)
    }

    /// Re-enter from the opposite edge on any axis that left the surface.
    /// Axes are independent.
    pub fn wrap(&self, pos: &mut Vector) {
        if pos.x() > self.width {
            pos.set_x(0.0);
        }
        if pos.x() < 0.0 {
            pos.set_x(self.width);
        }
        if pos.y() > self.height {
            pos.set_y(0.0);
        }
        if pos.y() < 0.0 {
            pos.set_y(self.height);
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub bounds: Bounds,
    pub settings: Settings,
    /// The player's ship
    pub ship: Particle,
    /// Gauge needle. Never integrated; its velocity length is the arm length.
    pub needle: Particle,
    /// Facing angle (radians), independent of the direction of travel
    pub heading: f32,
    /// This frame's thrust impulse
    pub thrust: Vector,
    /// Frames simulated so far
    pub time_ticks: u64,
}

impl SimState {
    /// Ship at rest in the middle of the surface, facing up
    pub fn new(bounds: Bounds, settings: Settings) -> Self {
        let ship = Particle::new(
            bounds.width / 2.0,
            bounds.height / 2.0,
            0.0,
            0.0,
            settings.gravity,
        );
        let needle = Particle::new(
            bounds.width / 2.0,
            bounds.height - settings.needle_length,
            settings.needle_length,
            0.0,
            0.0,
        );

        Self {
            bounds,
            settings,
            ship,
            needle,
            heading: START_HEADING,
            thrust: Vector::ZERO,
            time_ticks: 0,
        }
    }

    /// Needle arm length, read off the needle particle
    pub fn needle_arm(&self) -> f32 {
        self.needle.velocity.length()
    }
}
