use windgrid_paths::{SearchError, search};
use windgrid_solver::{ENTRANCE, EXIT, demo_maze, render, trace_lines};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("A* Search");

    let mut maze = demo_maze()?;
    match search(&mut maze, ENTRANCE, EXIT) {
        Ok(()) => {
            if !maze.cell_at(EXIT)?.explored {
                log::warn!("exit {EXIT} is unreachable; showing partial exploration");
            }
        }
        Err(err @ SearchError::InvalidGoal { .. }) => {
            // Recoverable: the maze is still printable with just the
            // entrance marked.
            log::warn!("{err}");
        }
        Err(err) => return Err(err.into()),
    }

    print!("{}", render(&maze));
    for line in trace_lines(&maze) {
        println!("{line}");
    }
    Ok(())
}
