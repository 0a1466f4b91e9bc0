#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use duration::*;
pub use engine::*;
pub use error::*;
pub use history::*;
pub use session::*;
pub use store::*;
pub use target::*;
pub use types::*;

mod duration;
mod engine;
mod error;
mod history;
mod session;
mod store;
mod target;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GameConfigFields")]
pub struct GameConfig {
    grid_size: Coord,
}

#[derive(Deserialize)]
struct GameConfigFields {
    grid_size: Coord,
}

impl From<GameConfigFields> for GameConfig {
    fn from(fields: GameConfigFields) -> Self {
        Self::new(fields.grid_size)
    }
}

impl GameConfig {
    pub const DEFAULT_GRID_SIZE: Coord = 5;

    pub const fn new_unchecked(grid_size: Coord) -> Self {
        Self { grid_size }
    }

    pub fn new(grid_size: Coord) -> Self {
        Self::new_unchecked(grid_size.clamp(1, Coord::MAX))
    }

    pub const fn grid_size(&self) -> Coord {
        self.grid_size
    }

    pub const fn total_cells(&self) -> u16 {
        let size = self.grid_size as u16;
        size.saturating_mul(size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_GRID_SIZE)
    }
}
