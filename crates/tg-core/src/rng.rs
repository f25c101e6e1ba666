//! Random number generation for dungeon generation
//!
//! Uses a seeded ChaCha RNG so a map can be regenerated from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator random number source
///
/// Wraps ChaCha8Rng. Every random draw made while building a map goes
/// through one instance, passed by `&mut` down the pipeline.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns 1..n
    ///
    /// Returns 0 if n is 0.
    pub fn rnd(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }

    /// Roll n dice with m sides
    ///
    /// Saturates at `u32::MAX`.
    pub fn dice(&mut self, n: u32, m: u32) -> u32 {
        (0..n).fold(0u32, |total, _| total.saturating_add(self.rnd(m)))
    }

    /// Uniform integer in `lo..=hi`
    ///
    /// Returns `lo` when the range is empty.
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform count in `lo..=hi`
    ///
    /// Returns `lo` when the range is empty.
    pub fn range_usize(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform float in `[0, 1)`
    pub fn roll(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Returns true with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.roll() < p
    }

    /// Fair coin flip
    pub fn coin(&mut self) -> bool {
        self.rn2(2) == 1
    }

    /// Offset in `{-1, 0, 1}`
    pub fn jitter(&mut self) -> i32 {
        self.range_inclusive(-1, 1)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }

    /// Shuffle a slice in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rn2(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!(n < 10);
        }
    }

    #[test]
    fn test_dice() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.dice(2, 6);
            assert!((2..=12).contains(&n));
        }
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let j = rng.jitter();
            assert!((-1..=1).contains(&j));
            seen[(j + 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "jitter should hit all three offsets");
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert_eq!(rng.range_inclusive(5, 2), 5);
        assert_eq!(rng.range_usize(9, 3), 9);
        let big = rng.range_usize(3_000_000_000, 3_000_000_001);
        assert!((3_000_000_000..=3_000_000_001).contains(&big));
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
            assert_eq!(rng1.roll(), rng2.roll());
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(9);
        let mut items: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_inputs() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert_eq!(rng.rnd(0), 0);
        assert_eq!(rng.dice(0, 6), 0);
        assert_eq!(rng.dice(2, 0), 0);
        assert!(rng.choose::<u8>(&[]).is_none());
    }
}
