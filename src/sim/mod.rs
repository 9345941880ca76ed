//! Frame-driven simulation
//!
//! All ship and gauge logic lives here. No rendering or platform
//! dependencies:
//! - One `tick` per display frame, impulses are per frame
//! - Input arrives as a `TickInput` snapshot
//! - Seeded RNG only (autopilot)

pub mod autopilot;
pub mod gauge;
pub mod input;
pub mod particle;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use gauge::{NeedleGeometry, NeedleZone, needle_geometry};
pub use input::{Key, TickInput};
pub use particle::Particle;
pub use state::{Bounds, SimState};
pub use tick::{Frame, exhaust_length, tick};
