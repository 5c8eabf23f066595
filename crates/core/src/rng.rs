//! RNG module - seeded piece selection
//!
//! A small LCG lives inside the game state, so every transition stays a
//! deterministic function of (state, command): the same seed replays the same
//! sequence of pieces.

use crate::types::TetrominoKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
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
        // The high bits of an LCG are the well-mixed ones.
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Uniform pick among the seven kinds
    pub fn next_kind(&mut self) -> TetrominoKind {
        let all = TetrominoKind::ALL;
        all[self.next_range(all.len() as u32) as usize]
    }

    /// Current internal state (reseeding with it continues the sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_kind(), rng2.next_kind());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0), SimpleRng::new(1));
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_kind_reaches_every_kind() {
        let mut rng = SimpleRng::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[(rng.next_kind().id() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_reseeding_continues_sequence() {
        let mut rng = SimpleRng::new(99);
        rng.next_u32();
        let mut resumed = SimpleRng::new(rng.seed());
        assert_eq!(rng.next_u32(), resumed.next_u32());
    }
}
