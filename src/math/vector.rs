//! Mutable 2D vector with polar accessors
//!
//! Wraps a `glam::Vec2` and adds length/angle setters that keep the other
//! polar component intact. Every entity owns its vectors; they are mutated
//! in place each frame.

use glam::Vec2;

use crate::{cartesian_to_polar, polar_to_cartesian};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector(Vec2);

impl Vector {
    pub const ZERO: Self = Self(Vec2::ZERO);

    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Build a vector from polar components
    pub fn from_polar(length: f32, angle: f32) -> Self {
        Self(polar_to_cartesian(length, angle))
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.0.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.0.y = y;
    }

    /// Euclidean norm
    #[inline]
    pub fn length(&self) -> f32 {
        self.0.length()
    }

    /// Polar angle in radians. A zero vector reports 0.
    #[inline]
    pub fn angle(&self) -> f32 {
        cartesian_to_polar(self.0).1
    }

    /// Rescale to `length`, keeping the current angle.
    ///
    /// A zero vector has angle 0, so it grows along +x. A negative length
    /// points the vector the opposite way.
    pub fn set_length(&mut self, length: f32) {
        self.0 = polar_to_cartesian(length, self.angle());
    }

    /// Rotate to `angle`, keeping the current length.
    pub fn set_angle(&mut self, angle: f32) {
        self.0 = polar_to_cartesian(self.length(), angle);
    }

    /// Componentwise in-place addition
    #[inline]
    pub fn add_to(&mut self, other: &Vector) {
        self.0 += other.0;
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        self.0
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<Vector> for Vec2 {
    fn from(v: Vector) -> Self {
        v.0
    }
}
