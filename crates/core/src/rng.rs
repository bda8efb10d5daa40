//! RNG module - serve direction generation
//!
//! A small LCG keeps the simulation deterministic for a given seed, which
//! the tests and `PONG_SEED` rely on.

use crate::types::Direction;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
    seed: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state, seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits: the low bits of a power-of-two LCG cycle with a short period.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Uniformly one of the four diagonals.
    pub fn random_diagonal(&mut self) -> Direction {
        Direction::DIAGONALS[self.next_range(Direction::DIAGONALS.len() as u32) as usize]
    }
}
