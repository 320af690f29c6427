//! Maze solving strategies.
//!
//! A [`Solver`] is bound to a [`Maze`](mazeai_core::Maze) and runs one of four
//! graph searches from the maze's root to its exit:
//!
//! - **DFS**: depth-first, neighbours tried left, top, right, bottom
//! - **BFS**: breadth-first, fewest edges
//! - **Dijkstra**: uniform-cost, fewest edges under unit weights
//! - **A\***: Dijkstra's frontier ordered by a tunable [`Heuristic`]
//!
//! The strategy is picked by an integer selector taken `mod 4`
//! ([`Algorithm::from_selector`]). Results are written into the cells'
//! `visited` / `on_solution_path` flags; [`Solver::solve`] additionally
//! reports an [`Outcome`].
//!
//! ```
//! use mazeai_core::Maze;
//! use mazeai_solve::{Outcome, Solver, SolverConfig};
//!
//! let mut maze = Maze::parse("S..\n.#.\n..E").unwrap();
//! let mut solver = Solver::with_config(&mut maze, SolverConfig::default().with_option(1));
//! assert_eq!(solver.algorithm().name(), "BFS");
//! assert_eq!(solver.solve().unwrap(), Outcome::Solved { length: 4 });
//! assert_eq!(maze.solution_len(), 5);
//! ```
//!
//! Re-running on the same maze requires [`Maze::reset`](mazeai_core::Maze::reset)
//! first.

mod algorithm;
mod astar;
mod bfs;
mod config;
mod dfs;
mod dijkstra;
mod error;
mod frontier;
mod heuristic;
mod reconstruct;
mod solver;

#[cfg(test)]
mod testutil;

pub use algorithm::Algorithm;
pub use config::SolverConfig;
pub use error::{ParseNameError, Result, SolveError};
pub use heuristic::Heuristic;
pub use solver::{Outcome, Solver};
