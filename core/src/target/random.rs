use super::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Uniformly random targets, row and column drawn independently.
#[derive(Clone, Debug)]
pub struct RandomTargets {
    rng: SmallRng,
}

impl RandomTargets {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TargetSource for RandomTargets {
    fn next_target(&mut self, config: GameConfig) -> Coord2 {
        let size = config.grid_size().max(1);
        let target = (self.rng.random_range(0..size), self.rng.random_range(0..size));
        log::trace!("new target drawn on a {0}x{0} grid", size);
        target
    }
}
