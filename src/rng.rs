//! Random sources for tile spawning.
//!
//! The engine only ever asks for uniform integers in an inclusive range,
//! so the seam is a single method. [`GameRng`] is the production source;
//! [`SequenceRng`] replays fixed draws so tests can pin down exactly which
//! tile appears where.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform integer draws.
pub trait TileRng {
    /// Draw a uniform integer in `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn draw(&mut self, low: u32, high: u32) -> u32;
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        (**self).draw(low, high)
    }
}

/// Deterministic RNG seeded from a `u64`.
///
/// Uses `ChaCha8`, so a given seed yields the same game on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl TileRng for GameRng {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each value is clamped into the requested range, so a sequence written
/// for one range never produces an out-of-range draw for another.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    draws: Vec<u32>,
    next: usize,
}

impl SequenceRng {
    /// Create a source that yields `draws` in order.
    ///
    /// An empty list behaves as if every draw were `low`.
    #[must_use]
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        Self {
            draws: draws.into(),
            next: 0,
        }
    }

    /// Number of draws taken so far.
    #[must_use]
    pub const fn taken(&self) -> usize {
        self.next
    }
}

impl TileRng for SequenceRng {
    fn draw(&mut self, low: u32, high: u32) -> u32 {
        let value = if self.draws.is_empty() {
            low
        } else {
            self.draws[self.next % self.draws.len()]
        };
        self.next += 1;
        value.clamp(low, high)
    }
}

/// Pick a seed from the wall clock.
#[must_use]
pub fn seed_from_time() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(42, |d| u64::try_from(d.as_nanos()).unwrap_or(42))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.draw(1, 10), rng2.draw(1, 10));
        }
    }

    #[test]
    fn test_rng_remembers_seed() {
        let mut rng = GameRng::new(987);
        rng.draw(1, 10);
        assert_eq!(rng.seed(), 987);
    }

    #[test]
    fn test_rng_stays_in_range() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 11];
        for _ in 0..1000 {
            let v = rng.draw(1, 10);
            assert!((1..=10).contains(&v));
            seen[usize::try_from(v).unwrap()] = true;
        }
        // Both bounds are reachable.
        assert!(seen[1] && seen[10]);
    }

    #[test]
    fn test_rng_degenerate_range() {
        let mut rng = GameRng::new(0);
        assert_eq!(rng.draw(0, 0), 0);
    }

    #[test]
    fn test_sequence_cycles_and_clamps() {
        let mut rng = SequenceRng::new(vec![9, 3, 20]);
        assert_eq!(rng.draw(1, 10), 9);
        assert_eq!(rng.draw(1, 10), 3);
        assert_eq!(rng.draw(1, 10), 10);
        assert_eq!(rng.draw(0, 2), 2);
        assert_eq!(rng.taken(), 4);
    }

    #[test]
    fn test_empty_sequence_yields_low() {
        let mut rng = SequenceRng::new(Vec::new());
        assert_eq!(rng.draw(3, 8), 3);
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn first_draw(mut rng: impl TileRng) -> u32 {
            rng.draw(1, 10)
        }

        let mut rng = SequenceRng::new([5]);
        assert_eq!(first_draw(&mut rng), 5);
        assert_eq!(rng.taken(), 1);
    }
}
