//! Seeded randomness for spawn order and release positions

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Deterministic RNG wrapper; same seed, same sequence
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform shuffle (Fisher-Yates) of the whole slice
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }

    /// Uniform draw from `[-half_range, half_range)`, or 0 for an empty or unbounded range
    pub fn symmetric(&mut self, half_range: f32) -> f32 {
        if !(half_range > 0.0) || !(2.0 * half_range).is_finite() {
            return 0.0;
        }
        self.inner.random_range(-half_range..half_range)
    }
}
