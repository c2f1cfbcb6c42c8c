use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::snake::Direction;

/// Uniform integer in `[min, max]`. The bounds may be given in either order.
pub fn rand_int<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    let (low, high) = if min > max { (max, min) } else { (min, max) };
    rng.random_range(low..=high)
}

/// Seeded RNG owned by a single game so that a seed replays the same food and start positions.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rand_int(&mut self, min: i32, max: i32) -> i32 {
        rand_int(&mut self.rng, min, max)
    }

    pub fn random_direction(&mut self) -> Direction {
        Direction::ALL[self.rand_int(0, 3) as usize]
    }
}
