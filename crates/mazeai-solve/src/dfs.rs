use log::trace;
use mazeai_core::{CellId, Direction};

use crate::Solver;
use crate::solver::Outcome;

/// Side order in which DFS tries neighbours.
const ORDER: [Direction; 4] = [
    Direction::Left,
    Direction::Top,
    Direction::Right,
    Direction::Bottom,
];

impl Solver<'_> {
    /// Depth-first search from `start` to `goal`.
    ///
    /// Every cell is marked visited on entry and never re-entered. When the
    /// goal is reached, exactly the cells on the current branch (start and
    /// goal included) are flagged as solution; abandoned branches stay
    /// visited only. The traversal keeps an explicit stack of
    /// `(cell, next side to try)` frames instead of recursing, so deep mazes
    /// cannot overflow the call stack.
    pub(crate) fn dfs(&mut self, start: CellId, goal: CellId) -> Outcome {
        let maze = &mut *self.maze;

        if maze[start].is_visited() {
            return Outcome::NoPath;
        }
        maze[start].mark_visited();
        if start == goal {
            maze[start].set_on_solution_path(true);
            return Outcome::Solved { length: 0 };
        }

        let mut stack: Vec<(CellId, usize)> = vec![(start, 0)];

        while let Some(top) = stack.len().checked_sub(1) {
            let (id, side) = stack[top];
            if side == ORDER.len() {
                // Dead end: every side tried, none led to the goal.
                stack.pop();
                continue;
            }
            stack[top].1 += 1;

            let Some(next) = maze[id].neighbor(ORDER[side]) else {
                continue;
            };
            if maze[next].is_visited() {
                continue;
            }
            maze[next].mark_visited();
            trace!("DFS: enter {}", maze[next].pos());

            if next == goal {
                maze[next].set_on_solution_path(true);
                for &(on_path, _) in &stack {
                    maze[on_path].set_on_solution_path(true);
                }
                return Outcome::Solved {
                    length: stack.len(),
                };
            }
            stack.push((next, 0));
        }

        Outcome::NoPath
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::assert_valid_route;
    use crate::{Algorithm, Outcome, Solver, SolverConfig};
    use mazeai_core::{Maze, MazeBuilder, Point};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn dfs(maze: &mut Maze) -> Outcome {
        let config = SolverConfig::default().with_algorithm(Algorithm::Dfs);
        Solver::with_config(maze, config).solve().unwrap()
    }

    #[test]
    fn open_grid_snakes_in_side_order() {
        let mut b = MazeBuilder::open_grid(3, 3);
        b.endpoints(p(0, 0), p(2, 2)).unwrap();
        let mut m = b.build();

        // Left, top, right, bottom: run right along the top row, then
        // wind back through the middle and bottom rows.
        assert_eq!(dfs(&mut m), Outcome::Solved { length: 8 });
        let marked: Vec<_> = m.solution_cells().into_iter().map(|id| m[id].pos()).collect();
        assert_eq!(marked.len(), 9);
        assert_eq!(m.visited_count(), 9);
        assert_valid_route(&m);
    }

    #[test]
    fn dead_branches_stay_unmarked() {
        // The left-first order explores the dead end at (0, 1) before
        // finding the corridor to the right.
        let text = "\
.S..E
.####";
        let mut m = Maze::parse(text).unwrap();
        assert_eq!(dfs(&mut m), Outcome::Solved { length: 3 });

        for pos in [p(0, 0), p(0, 1)] {
            let c = m.cell_at(pos).unwrap();
            assert!(c.is_visited(), "{pos}");
            assert!(!c.is_on_solution_path(), "{pos}");
        }
        for pos in [p(1, 0), p(2, 0), p(3, 0), p(4, 0)] {
            assert!(m.cell_at(pos).unwrap().is_on_solution_path(), "{pos}");
        }
    }

    #[test]
    fn cycles_terminate() {
        let text = "\
S...
.##.
....
###E";
        let mut m = Maze::parse(text).unwrap();
        let outcome = dfs(&mut m);
        assert!(outcome.is_solved());
        assert_eq!(outcome.length(), Some(m.solution_len() - 1));
        assert_valid_route(&m);
    }

    #[test]
    fn deep_corridor_does_not_overflow() {
        let mut b = MazeBuilder::open_grid(20_000, 1);
        b.endpoints(p(0, 0), p(19_999, 0)).unwrap();
        let mut m = b.build();
        assert_eq!(dfs(&mut m), Outcome::Solved { length: 19_999 });
    }

    #[test]
    fn exhausted_search_marks_nothing() {
        let text = "S.#E";
        let mut m = Maze::parse(text).unwrap();
        assert_eq!(dfs(&mut m), Outcome::NoPath);
        assert_eq!(m.solution_len(), 0);
        assert_eq!(m.visited_count(), 2);
    }
}
