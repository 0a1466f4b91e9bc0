use crate::*;
pub use random::*;

mod random;

/// Picks where the plane hides at the start of each round.
pub trait TargetSource {
    fn next_target(&mut self, config: GameConfig) -> Coord2;
}

/// Always hides the plane at the same cell, regardless of grid size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedTarget(pub Coord2);

impl TargetSource for FixedTarget {
    fn next_target(&mut self, _config: GameConfig) -> Coord2 {
        self.0
    }
}
