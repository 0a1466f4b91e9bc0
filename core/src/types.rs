/// Single coordinate axis used for the grid size and for row/column positions.
pub type Coord = u8;

/// Count type used for shot totals.
pub type ShotCount = u32;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Axis of a requested shot. Wider than [`Coord`] so off-board requests still decode and count as a miss.
pub type ShotCoord = i64;

/// Requested shot position `(row, col)`, not necessarily on the board.
pub type Shot2 = (ShotCoord, ShotCoord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Whether `coords` falls inside a square board of side `size`.
pub const fn in_bounds(coords: Coord2, size: Coord) -> bool {
    coords.0 < size && coords.1 < size
}

/// Board cell hit by `shot`, if it lands on a board of side `size`.
pub fn board_coords((row, col): Shot2, size: Coord) -> Option<Coord2> {
    let coords = (Coord::try_from(row).ok()?, Coord::try_from(col).ok()?);
    in_bounds(coords, size).then_some(coords)
}
