//! The best-first expansion loop.

use windgrid_core::{Maze, Point, TraceEntry};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::wind::{MOVES, step_cost, wind_estimate};

/// Run an A* search over `maze` from `entrance` toward `goal`.
///
/// Discovered cells are annotated in place with their discovery order and
/// `g`/`h`/`f` values, and a [`TraceEntry`] snapshot is appended to the
/// maze's record for each (the entrance is order 0). The search stops as
/// soon as the goal cell is discovered, or when the frontier drains.
///
/// Both outcomes return `Ok(())`; the caller distinguishes them by the goal
/// cell's `explored` flag. A goal outside the grid is reported as
/// [`SearchError::InvalidGoal`], leaving only the entrance marked. The
/// entrance itself is assumed to be a valid passable cell.
pub fn search(maze: &mut Maze, entrance: Point, goal: Point) -> Result<(), SearchError> {
    let mut frontier = Frontier::new();

    // Mark and record the entrance before validating the goal, so an
    // invalid goal hands back a maze with exactly one cell touched.
    let h = wind_estimate(entrance, goal);
    let cell = maze.cell_at_mut(entrance)?;
    cell.explored = true;
    cell.discovery_order = Some(0);
    cell.g = 0;
    cell.h = h;
    cell.f = h;
    maze.record(TraceEntry {
        pos: entrance,
        order: 0,
        g: 0,
        h,
        f: h,
    });
    frontier.push(entrance, h, 0);

    if !maze.in_bounds(goal) {
        return Err(SearchError::InvalidGoal {
            goal,
            width: maze.width(),
            height: maze.height(),
        });
    }

    let mut next_order: u32 = 1;
    loop {
        if maze.cell_at(goal)?.explored {
            break;
        }
        let Some(current) = frontier.pop() else {
            break;
        };
        let current_g = maze.cell_at(current)?.g;

        for delta in MOVES {
            let np = current + delta;
            if !maze.in_bounds(np) || maze.is_blocked(np) {
                continue;
            }
            let cell = maze.cell_at_mut(np)?;
            if cell.explored {
                continue;
            }

            let g = current_g + step_cost(delta);
            let h = wind_estimate(np, goal);
            let f = g + h;
            let order = next_order;
            next_order += 1;

            cell.explored = true;
            cell.discovery_order = Some(order);
            cell.g = g;
            cell.h = h;
            cell.f = f;
            maze.record(TraceEntry {
                pos: np,
                order,
                g,
                h,
                f,
            });
            frontier.push(np, f, order);
        }
    }

    Ok(())
}
