//! Point particle with per-frame impulse integration

use crate::math::Vector;

/// A point mass moved by per-frame impulses.
///
/// Velocity is always updated before position, once per frame, with no
/// time-step scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vector,
    pub velocity: Vector,
    pub gravity: Vector,
}

impl Particle {
    /// Particle at (x, y) moving at `speed` towards `direction` (radians),
    /// pulled down by `gravity` each frame.
    pub fn new(x: f32, y: f32, speed: f32, direction: f32, gravity: f32) -> Self {
        let mut velocity = Vector::ZERO;
        velocity.set_length(speed);
        velocity.set_angle(direction);
        Self {
            position: Vector::new(x, y),
            velocity,
            gravity: Vector::new(0.0, gravity),
        }
    }

    /// Apply one frame's impulse. The caller scales `force` per frame.
    pub fn accelerate(&mut self, force: &Vector) {
        self.velocity.add_to(force);
    }

    /// Advance one frame: gravity into velocity, then velocity into position.
    pub fn update(&mut self) {
        self.velocity.add_to(&self.gravity);
        self.position.add_to(&self.velocity);
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}
