//! The world.

use crate::{
    cells::{Coord, State, ALIVE, DEAD, NEIGHBORS},
    error::Error,
};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{self, Display, Formatter, Write},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The world: the set of living cells in the current generation.
///
/// The grid is unbounded. Only living cells are stored, keyed by their
/// coordinates, so a pattern may grow in any direction without ever
/// resizing a fixed array; a coordinate that is not stored is a dead
/// cell. The set is ordered, so iterating over living cells is
/// deterministic.
///
/// Dense grids of `0`/`1` values appear at the boundary only:
/// [`from_grid`](Self::from_grid) decodes one into a world, and
/// [`to_grid`](Self::to_grid) encodes the current generation, cropped to
/// the bounding box of its living cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct World {
    /// Living cells, keyed by `(row, column)`.
    cells: BTreeSet<Coord>,
}

impl World {
    /// Creates an empty world.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a dense grid of `0`/`1` values into a world.
    ///
    /// The grid's own row and column indices become the coordinates of
    /// the cells. Exactly the value `1` is read as a living cell; any
    /// other value is dead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if the grid has no rows or no
    /// columns, and [`Error::RaggedGrid`] if the rows do not all have
    /// the same length.
    pub fn from_grid(grid: &[Vec<u8>]) -> Result<Self, Error> {
        let expected = grid.first().map(Vec::len).ok_or(Error::EmptyGrid)?;
        if expected == 0 {
            return Err(Error::EmptyGrid);
        }
        let mut world = Self::new();
        for (row, values) in grid.iter().enumerate() {
            if values.len() != expected {
                return Err(Error::RaggedGrid {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value == 1 {
                    world.cells.insert((row as i64, col as i64));
                }
            }
        }
        Ok(world)
    }

    /// Sets the state of the cell at `coord`.
    pub fn set_cell(&mut self, coord: Coord, state: State) {
        if state == ALIVE {
            self.cells.insert(coord);
        } else {
            self.cells.remove(&coord);
        }
    }

    /// Gets the state of the cell at `coord`.
    pub fn get_cell(&self, coord: Coord) -> State {
        if self.cells.contains(&coord) {
            ALIVE
        } else {
            DEAD
        }
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no living cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the coordinates of living cells, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// The smallest rectangle containing all living cells, as
    /// `((min_row, min_col), (max_row, max_col))`.
    ///
    /// Returns `None` when the world is empty.
    pub fn bounding_box(&self) -> Option<(Coord, Coord)> {
        let &(min_row, _) = self.cells.first()?;
        let &(max_row, _) = self.cells.last()?;
        let min_col = self.cells.iter().map(|&(_, col)| col).min()?;
        let max_col = self.cells.iter().map(|&(_, col)| col).max()?;
        Some(((min_row, min_col), (max_row, max_col)))
    }

    /// The cells that may change state in the next generation: every
    /// living cell, plus every dead cell adjacent to one (the shell).
    ///
    /// Each coordinate appears exactly once, mapped to whether it is
    /// currently alive; a living cell is never also a dead candidate.
    /// Dead cells with no living neighbor are absent, since they cannot
    /// satisfy the birth rule.
    fn candidates(&self) -> BTreeMap<Coord, bool> {
        let mut candidates: BTreeMap<Coord, bool> =
            self.cells.iter().map(|&coord| (coord, true)).collect();
        for &(row, col) in &self.cells {
            for &(dr, dc) in &NEIGHBORS {
                candidates.entry((row + dr, col + dc)).or_insert(false);
            }
        }
        candidates
    }

    /// Number of living neighbors of `coord` in the current generation.
    ///
    /// The cell itself is not counted, even when it is alive.
    fn live_neighbor_count(&self, (row, col): Coord) -> usize {
        NEIGHBORS
            .iter()
            .filter(|&&(dr, dc)| self.cells.contains(&(row + dr, col + dc)))
            .count()
    }

    /// Advances the world by one generation.
    ///
    /// The next set of living cells is computed entirely from the
    /// current one and then swapped in, so every cell is judged against
    /// the same pre-transition generation. Exposed separately from
    /// [`advance`](Self::advance) so that callers needing cancellation
    /// can check a signal between generations.
    pub fn step(&mut self) {
        let mut next = BTreeSet::new();
        for (coord, alive) in self.candidates() {
            match (alive, self.live_neighbor_count(coord)) {
                // A living cell with two or three living neighbors
                // survives; a dead cell with exactly three is born.
                // Everything else is simply absent from the next
                // generation.
                (true, 2) | (true, 3) | (false, 3) => {
                    next.insert(coord);
                }
                _ => (),
            }
        }
        self.cells = next;
    }

    /// Advances the world by `generations` generations.
    ///
    /// `generations == 0` leaves the world unchanged.
    pub fn advance(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Encodes the world into a dense grid of `0`/`1` values, cropped to
    /// the bounding box of the living cells.
    ///
    /// The first and last row and the first and last column of the
    /// result each contain at least one `1`. Dimensions are recomputed
    /// from the current cells on every call, never carried over from
    /// the grid the world was decoded from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyLiveSet`] if there are no living cells: an
    /// empty world has no bounding box to crop to. A pattern that dies
    /// out during a simulation is only reported here, at the encoding
    /// boundary.
    pub fn to_grid(&self) -> Result<Vec<Vec<u8>>, Error> {
        let ((min_row, min_col), (max_row, max_col)) =
            self.bounding_box().ok_or(Error::EmptyLiveSet)?;
        let width = (max_col - min_col + 1) as usize;
        let height = (max_row - min_row + 1) as usize;
        let mut grid = vec![vec![0; width]; height];
        for &(row, col) in &self.cells {
            grid[(row - min_row) as usize][(col - min_col) as usize] = 1;
        }
        Ok(grid)
    }
}

/// Displays the world in [Plaintext](https://conwaylife.com/wiki/Plaintext)
/// format, cropped to the bounding box of the living cells.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `O`.
///
/// An empty world displays as an empty string.
impl Display for World {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(((min_row, min_col), (max_row, max_col))) = self.bounding_box() {
            for row in min_row..=max_row {
                for col in min_col..=max_col {
                    match self.get_cell((row, col)) {
                        ALIVE => f.write_char('O')?,
                        _ => f.write_char('.')?,
                    }
                }
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

/// Computes the state of the world after `generations` generations,
/// going from dense grid to dense grid.
///
/// This is the whole pipeline: decode the starting grid, advance the
/// requested number of generations, and encode the result cropped to
/// the bounding box of the surviving cells. `generations == 0` is the
/// identity up to that re-cropping.
///
/// # Errors
///
/// Returns [`Error::EmptyGrid`] or [`Error::RaggedGrid`] if the input
/// grid is malformed, and [`Error::EmptyLiveSet`] if no cells are alive
/// when the result is encoded.
pub fn compute_generation(grid: &[Vec<u8>], generations: u64) -> Result<Vec<Vec<u8>>, Error> {
    let mut world = World::from_grid(grid)?;
    world.advance(generations);
    world.to_grid()
}
