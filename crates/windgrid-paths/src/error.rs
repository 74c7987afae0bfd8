use thiserror::Error;

use windgrid_core::{MazeError, Point};

/// Failures reported by the search engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The goal lies outside the grid. Recoverable: the maze is handed back
    /// with only the entrance marked, nothing else was explored.
    #[error("goal {goal} outside the {width}x{height} grid")]
    InvalidGoal {
        goal: Point,
        width: i32,
        height: i32,
    },

    /// A grid access failed mid-search. The engine bounds-checks before
    /// every access, so this only surfaces on an internal defect; it is
    /// propagated rather than swallowed.
    #[error(transparent)]
    Grid(#[from] MazeError),
}
