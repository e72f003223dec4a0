//! Cells and coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State(pub u8);

/// The Dead state.
pub const DEAD: State = State(0);
/// The Alive state.
pub const ALIVE: State = State(1);

/// The coordinates of a cell.
///
/// `(row, column)`. Both coordinates are signed and unbounded: the grid
/// has no fixed origin or size. When a world is decoded from a dense
/// grid, the grid's own 0-indexed row and column indices are used.
pub type Coord = (i64, i64);

/// Offsets of the eight Chebyshev neighbors of a cell.
pub(crate) const NEIGHBORS: [Coord; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
