//! **windgrid-paths** — deterministic A* search over wind-biased mazes.
//!
//! The maze has an asymmetric movement cost (a tail wind blowing south):
//! southward steps cost 1, northward steps cost 3, lateral steps cost 2.
//! [`search`] expands cells in best-first order under that cost model with a
//! matching admissible heuristic ([`wind_estimate`]), annotating every
//! discovered cell with its discovery order and `g`/`h`/`f` values in place.
//!
//! The expansion order is fully deterministic: frontier ties on `f` are
//! broken by the smaller discovery order, and neighbors are always visited
//! North, West, South, East. Repeated runs over the same maze produce
//! identical discovery sequences.
//!
//! An unreachable goal is a normal outcome, not an error: the frontier
//! drains and the goal cell's `explored` flag stays false. Only a goal
//! outside the grid is reported as [`SearchError::InvalidGoal`].

mod astar;
mod error;
mod frontier;
mod wind;

pub use astar::search;
pub use error::SearchError;
pub use wind::{MOVES, step_cost, wind_estimate};
