//! Fixed-step integration of falling bodies
//!
//! The host supplies an irregular frame delta; it is banked in an accumulator and
//! spent in whole fixed steps, at most `max_substeps` per tick. Anything beyond that
//! budget is dropped so a long stall costs a bounded amount of work.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::FallingBody;
use crate::settings::GameConfig;

/// Sub-stepping integrator with semi-implicit Euler steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Integrator {
    pub fixed_step: f32,
    pub max_substeps: u32,
    pub gravity: Vec3,
    pub linear_damping: f32,
    /// Unsimulated time carried to the next tick, always < `fixed_step` after a step
    accumulator: f32,
}

impl Integrator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            fixed_step: config.fixed_step,
            max_substeps: config.max_substeps,
            gravity: Vec3::new(0.0, config.gravity, 0.0),
            linear_damping: config.linear_damping,
            accumulator: 0.0,
        }
    }

    /// Advance every Active body by `dt` seconds of wall time.
    ///
    /// Returns the number of fixed steps taken. Non-positive or non-finite `dt`
    /// takes no steps.
    pub fn advance(&mut self, bodies: &mut [FallingBody], dt: f32) -> u32 {
        if !(dt > 0.0) || !dt.is_finite() {
            return 0;
        }

        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.fixed_step && substeps < self.max_substeps {
            for body in bodies.iter_mut().filter(|b| b.is_active()) {
                self.step_body(body);
            }
            self.accumulator -= self.fixed_step;
            substeps += 1;
        }

        if self.accumulator >= self.fixed_step {
            log::trace!(
                "Step budget exceeded, dropping {:.4}s of simulated time",
                self.accumulator - self.accumulator % self.fixed_step
            );
            self.accumulator %= self.fixed_step;
        }

        substeps
    }

    /// One fixed step: damp, accelerate, then move with the new velocity
    fn step_body(&self, body: &mut FallingBody) {
        let h = self.fixed_step;
        body.vel *= (1.0 - self.linear_damping).powf(h);
        body.vel += self.gravity * h;
        body.pos += body.vel * h;
    }

    /// Fraction of a fixed step left unsimulated, in [0, 1)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.fixed_step
    }

    /// Drop any banked time
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
