//! Math primitives
//!
//! A mutable polar-friendly 2D vector and the numeric helpers used to turn
//! speeds into gauge angles and flame lengths.

pub mod utils;
pub mod vector;

pub use utils::{clamp, degrees_to_rads, lerp, map, norm, rads_to_degrees};
pub use vector::Vector;
