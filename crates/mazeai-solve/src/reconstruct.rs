use std::collections::HashMap;

use log::warn;
use mazeai_core::{CellId, Maze};

use crate::error::{Result, SolveError};

/// Mark the path recorded in `prev` on the maze.
///
/// Walks from `goal` back through the predecessor map until `start`,
/// flagging every cell on the way (both endpoints included). Returns the
/// path length in edges.
///
/// A missing predecessor stops the walk immediately with
/// [`SolveError::BrokenChain`]; cells already flagged stay flagged. A chain
/// longer than the maze itself is reported as
/// [`SolveError::PredecessorCycle`].
pub(crate) fn reconstruct(
    maze: &mut Maze,
    prev: &HashMap<CellId, CellId>,
    start: CellId,
    goal: CellId,
) -> Result<usize> {
    let limit = maze.len();
    let mut at = goal;
    let mut steps = 0;

    while at != start {
        let Some(&p) = prev.get(&at) else {
            warn!("no predecessor recorded for cell {at} while rebuilding the path");
            return Err(SolveError::BrokenChain { at });
        };
        if steps >= limit {
            warn!("predecessor chain exceeds {limit} cells");
            return Err(SolveError::PredecessorCycle { limit });
        }
        maze[at].set_on_solution_path(true);
        steps += 1;
        at = p;
    }

    maze[start].set_on_solution_path(true);
    Ok(steps)
}
