//! Demo autopilot
//!
//! Flies the ship with a seeded input script so the gauge has something to
//! show without a player. Same seed, same flight.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::input::TickInput;
use super::state::SimState;
use crate::consts::GAUGE_MAX_SPEED;

/// Shortest and longest time a control combination is held (frames)
const MIN_HOLD: u32 = 20;
const MAX_HOLD: u32 = 90;

/// Above this speed the autopilot stops thrusting and brakes
const CRUISE_CEILING: f32 = GAUGE_MAX_SPEED * 0.8;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    held: TickInput,
    frames_left: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: TickInput::default(),
            frames_left: 0,
        }
    }

    /// Controls for the next frame
    pub fn next_input(&mut self, state: &SimState) -> TickInput {
        if self.frames_left == 0 {
            self.held = self.pick();
            self.frames_left = self.rng.random_range(MIN_HOLD..=MAX_HOLD);
        }
        self.frames_left -= 1;

        let mut input = self.held;
        if state.ship.speed() > CRUISE_CEILING {
            input.thrusting = false;
            input.braking = true;
        }
        input
    }

    fn pick(&mut self) -> TickInput {
        let thrusting = self.rng.random_bool(0.6);
        let braking = !thrusting && self.rng.random_bool(0.3);
        let (turning_left, turning_right) = match self.rng.random_range(0..3) {
            0 => (true, false),
            1 => (false, true),
            _ => (false, false),
        };

        TickInput {
            thrusting,
            braking,
            turning_left,
            turning_right,
        }
    }
}
