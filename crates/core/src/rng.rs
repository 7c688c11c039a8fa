//! RNG module - random tile spawning
//!
//! Picks the cell and value of every spawned tile: a uniformly random empty
//! cell, holding a 2 nine times out of ten and a 4 otherwise.
//!
//! Backed by a seeded ChaCha8 stream so that the same seed always replays the
//! same game, which is what the engine tests and benchmarks rely on.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{Tile, SPAWN_FOUR_PERCENT};

/// Seeded random source for tile spawns
#[derive(Debug, Clone)]
pub struct SpawnRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl SpawnRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG from a seed drawn from the operating system
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`
    ///
    /// `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Value of a freshly spawned tile
    pub fn spawn_value(&mut self) -> Tile {
        if self.rng.gen_range(0..100) < SPAWN_FOUR_PERCENT {
            Tile::FOUR
        } else {
            Tile::TWO
        }
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self::new(1)
    }
}
