//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// The grid has no rows or no columns.
    EmptyGrid,
    /// Row {row} has length {found}, but the first row has length {expected}.
    RaggedGrid {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// Cannot encode an empty live set: no bounding box is definable.
    EmptyLiveSet,
}
