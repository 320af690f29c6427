use std::collections::{HashMap, VecDeque};

use log::trace;
use mazeai_core::{CellId, Direction};

use crate::Solver;
use crate::error::Result;
use crate::reconstruct::reconstruct;
use crate::solver::Outcome;

/// Side order in which BFS enqueues neighbours.
const ORDER: [Direction; 4] = [
    Direction::Top,
    Direction::Left,
    Direction::Bottom,
    Direction::Right,
];

impl Solver<'_> {
    /// Breadth-first search from `start` to `goal`.
    ///
    /// Finds a path with the fewest edges. Predecessors are recorded when a
    /// cell is enqueued, so no cell enters the queue twice; cells are marked
    /// visited when dequeued.
    pub(crate) fn bfs(&mut self, start: CellId, goal: CellId) -> Result<Outcome> {
        let maze = &mut *self.maze;

        let mut queue: VecDeque<CellId> = VecDeque::from([start]);
        let mut prev: HashMap<CellId, CellId> = HashMap::new();
        let mut found = false;

        while let Some(id) = queue.pop_front() {
            if maze[id].is_visited() {
                continue;
            }
            maze[id].mark_visited();
            trace!("BFS: dequeue {}", maze[id].pos());

            if id == goal {
                found = true;
                break;
            }

            for next in maze[id].neighbors(&ORDER) {
                if next == start || maze[next].is_visited() || prev.contains_key(&next) {
                    continue;
                }
                prev.insert(next, id);
                queue.push_back(next);
            }
        }

        if !found {
            return Ok(Outcome::NoPath);
        }
        let length = reconstruct(maze, &prev, start, goal)?;
        Ok(Outcome::Solved { length })
    }
}
