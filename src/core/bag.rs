//! Bag module - shuffled piece randomizer
//!
//! Implements bag randomization over the full 14-kind set: the bag is
//! refilled and uniformly reshuffled only when exhausted, so within one cycle
//! every kind appears exactly once and no kind can drought longer than two
//! bags. A small seeded LCG keeps runs deterministic for tests.

use crate::types::{PieceKind, PIECE_KIND_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Bag randomizer over the full piece-kind set
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Remaining kinds of the current cycle, consumed back to front
    remaining: Vec<PieceKind>,
    rng: SimpleRng,
}

impl PieceBag {
    /// Create an empty bag; the first draw triggers the first shuffle
    pub fn new(seed: u32) -> Self {
        Self {
            remaining: Vec::with_capacity(PIECE_KIND_COUNT),
            rng: SimpleRng::new(seed),
        }
    }

    fn refill(&mut self) {
        self.remaining.clear();
        self.remaining.extend_from_slice(&PieceKind::ALL);
        self.rng.shuffle(&mut self.remaining);
    }

    /// Draw the next kind, refilling and reshuffling when the cycle is spent
    pub fn next_kind(&mut self) -> PieceKind {
        if self.remaining.is_empty() {
            self.refill();
        }
        // refill always leaves a full bag
        let last = self.remaining.len() - 1;
        let kind = self.remaining[last];
        self.remaining.truncate(last);
        kind
    }

    /// Current RNG state; reseeding with this continues the sequence
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    #[cfg(test)]
    pub fn remaining(&self) -> &[PieceKind] {
        &self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rng_deterministic() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_one_cycle_draws_each_kind_once() {
        let mut bag = PieceBag::new(7);
        let drawn: HashSet<_> = (0..PIECE_KIND_COUNT).map(|_| bag.next_kind()).collect();
        assert_eq!(drawn.len(), PIECE_KIND_COUNT);
    }

    #[test]
    fn test_refill_only_when_exhausted() {
        let mut bag = PieceBag::new(7);
        bag.next_kind();
        assert_eq!(bag.remaining().len(), PIECE_KIND_COUNT - 1);

        for _ in 0..PIECE_KIND_COUNT - 1 {
            bag.next_kind();
        }
        assert!(bag.remaining().is_empty());

        // Next draw starts a fresh cycle.
        bag.next_kind();
        assert_eq!(bag.remaining().len(), PIECE_KIND_COUNT - 1);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceBag::new(99);
        let mut b = PieceBag::new(99);
        for _ in 0..3 * PIECE_KIND_COUNT {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }
}
