//! Deterministic per-game random source.
//!
//! Each [`GameInstance`](crate::game::GameInstance) owns one of these; there is
//! no process-wide RNG. The same seed always replays the same game.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use web_time::{SystemTime, UNIX_EPOCH};

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

    /// Seeds from the wall clock. Works in the browser as well as natively.
    #[must_use]
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(nanos)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let items: Vec<u32> = (0..100).collect();
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..50 {
            assert_eq!(rng1.choose(&items), rng2.choose(&items));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let items: Vec<u32> = (0..1000).collect();
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.choose(&items).copied()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.choose(&items).copied()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = GameRng::new(7);
        let empty: Vec<u8> = Vec::new();

        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn seed_is_remembered() {
        assert_eq!(GameRng::new(99).seed(), 99);
    }
}
