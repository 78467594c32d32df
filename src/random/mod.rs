use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

#[cfg(test)]
pub mod mock;

/// Source of independent uniform draws in `[0, 1)`.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

/// `StdRng` keyed by an explicit seed so any run can be replayed.
pub struct SeededSource {
    seed: u64,
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a fresh seed from the OS-seeded thread RNG.
    pub fn fresh() -> Self {
        Self::new(rand::thread_rng().next_u64())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl UniformSource for SeededSource {
    fn next_uniform(&mut self) -> f64 {
        // Standard samples f64 from the half-open interval [0, 1).
        self.rng.sample(Standard)
    }
}
