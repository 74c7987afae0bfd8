//! Text output: the annotated grid and the discovery trace.

use windgrid_core::Maze;

/// Render the maze as one line per row, cells joined by single spaces.
///
/// Explored cells print their zero-padded two-digit discovery order (the
/// entrance is `00`); unexplored passable cells print `[]`, walls `##`.
pub fn render(maze: &Maze) -> String {
    let mut out = String::new();
    for (p, cell) in maze.iter() {
        if p.x > 0 {
            out.push(' ');
        }
        match cell.discovery_order {
            Some(order) => out.push_str(&format!("{order:02}")),
            None => out.push_str(cell.terrain.symbol()),
        }
        if p.x == maze.width() - 1 {
            out.push('\n');
        }
    }
    out
}

/// One formatted line per discovered cell, in discovery order:
/// `Node 01 (x: 3, y: 1) - g(n):  1, h(n): 18, f(n): 19`.
pub fn trace_lines(maze: &Maze) -> impl Iterator<Item = String> + '_ {
    maze.trace().iter().map(|e| {
        format!(
            "Node {:02} (x:{:>2}, y:{:>2}) - g(n): {:>2}, h(n): {:>2}, f(n): {:>2}",
            e.order, e.pos.x, e.pos.y, e.g, e.h, e.f
        )
    })
}
