//! A [Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! engine on an unbounded grid.
//!
//! Only living cells are stored, so a pattern may grow in any direction
//! without hitting an edge or resizing a fixed array. Dense grids of
//! `0`/`1` values are used at the boundary only: [`World::from_grid`]
//! decodes one, and [`World::to_grid`] encodes the current generation
//! cropped to the bounding box of its living cells.
//!
//! ```
//! use sparselife_lib::compute_generation;
//!
//! // A blinker: three cells in a column become three cells in a row.
//! let grid = vec![vec![1], vec![1], vec![1]];
//! assert_eq!(compute_generation(&grid, 1)?, vec![vec![1, 1, 1]]);
//! # Ok::<(), sparselife_lib::Error>(())
//! ```

mod cells;
mod error;
mod world;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use error::Error;
pub use world::{compute_generation, World};
