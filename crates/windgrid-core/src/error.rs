//! Error taxonomy for maze construction and cell access.

use thiserror::Error;

use crate::geom::Point;

/// Failures raised by the grid model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Construction input rows had inconsistent widths. Never silently
    /// truncated.
    #[error("malformed maze: row {row} has width {found}, expected {expected}")]
    MalformedMaze {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// Construction input contained a symbol that is neither passable nor
    /// wall (this includes a dangling half-symbol at the end of a row).
    #[error("malformed maze: unrecognized symbol {symbol:?} in row {row}")]
    UnknownSymbol { row: usize, symbol: String },

    /// Construction input had no rows or no columns.
    #[error("malformed maze: empty grid")]
    EmptyMaze,

    /// A cell was requested outside `[0, width) x [0, height)`. Internal
    /// callers are expected to check `in_bounds` first; seeing this error
    /// means a caller skipped that check.
    #[error("coordinate {pos} outside the {width}x{height} grid")]
    OutOfBounds {
        pos: Point,
        width: i32,
        height: i32,
    },
}
