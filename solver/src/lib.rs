//! Demo maze solver for the *windgrid* workspace.
//!
//! Holds the fixed demo maze and the text output surface: the rendered grid
//! (explored cells shown as their two-digit discovery order) and the
//! human-readable discovery trace. The search engine never depends on any
//! of this; it only consumes the engine's output.

pub mod fixture;
pub mod render;

pub use fixture::{ENTRANCE, EXIT, demo_maze};
pub use render::{render, trace_lines};
