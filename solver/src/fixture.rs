//! The fixed demo maze: 12 cells wide, 11 tall, one entrance on the top
//! edge and one exit on the right edge.

use windgrid_core::{Maze, MazeError, Point};

/// Entrance on the top edge.
pub const ENTRANCE: Point = Point::new(3, 0);

/// Exit on the right edge.
pub const EXIT: Point = Point::new(11, 3);

/// Terrain rows in wire-symbol form.
pub const ROWS: [&str; 11] = [
    "######[]################",
    "##[][][][]##[][][][][]##",
    "##[]####[]##[]######[]##",
    "##[]##[][]##[][][]##[][]",
    "##[]############[]######",
    "##[][]##[][][]##[][][]##",
    "####[]##[]######[]##[]##",
    "##[][][][]##[][][]##[]##",
    "##[]########[]##[]######",
    "##[][][][][][]##[][][]##",
    "########################",
];

/// Build the demo maze.
pub fn demo_maze() -> Result<Maze, MazeError> {
    Maze::parse(&ROWS)
}
