//! **windgrid-core** — model types for wind-biased maze search.
//!
//! This crate provides the grid side of the *windgrid* workspace: the
//! [`Point`] geometry primitive, the [`Terrain`] encoding used by maze
//! construction input, and the [`Maze`] itself — a rectangular array of
//! [`Cell`]s that the search engine in `windgrid-paths` mutates in place,
//! plus the per-search discovery record ([`TraceEntry`]).

pub mod error;
pub mod geom;
pub mod maze;

pub use error::MazeError;
pub use geom::Point;
pub use maze::{Cell, Maze, Terrain, TraceEntry};
