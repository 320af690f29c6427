use log::debug;
use mazeai_core::Maze;

use crate::algorithm::Algorithm;
use crate::config::SolverConfig;
use crate::error::Result;
use crate::heuristic::Heuristic;

/// How a [`Solver::solve`] run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The maze has no root or no exit; nothing was touched.
    Skipped,
    /// A path was found and flagged. `length` counts edges, so a maze whose
    /// root is its exit solves with length 0.
    Solved { length: usize },
    /// The frontier ran dry before the exit was reached.
    NoPath,
}

impl Outcome {
    #[inline]
    pub fn is_solved(self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// Path length in edges, if solved.
    #[inline]
    pub fn length(self) -> Option<usize> {
        match self {
            Self::Solved { length } => Some(length),
            _ => None,
        }
    }
}

/// Runs one search strategy over a bound [`Maze`].
///
/// The result of a run lives entirely in the maze's cell flags
/// ([`Cell::is_visited`](mazeai_core::Cell::is_visited),
/// [`Cell::is_on_solution_path`](mazeai_core::Cell::is_on_solution_path)).
/// The solver keeps nothing between runs and never clears those flags: call
/// [`Maze::reset`] before solving the same maze again, or the stale
/// `visited` marks make the next run treat cells as already explored.
///
/// Holding the maze by `&mut` rules out two solvers on one maze at a time.
pub struct Solver<'m> {
    pub(crate) config: SolverConfig,
    pub(crate) maze: &'m mut Maze,
}

impl<'m> Solver<'m> {
    /// A solver with the default configuration (DFS).
    pub fn new(maze: &'m mut Maze) -> Self {
        Self::with_config(maze, SolverConfig::default())
    }

    pub fn with_config(maze: &'m mut Maze, config: SolverConfig) -> Self {
        Self { config, maze }
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The raw algorithm selector.
    #[inline]
    pub fn option(&self) -> i32 {
        self.config.option
    }

    pub fn set_option(&mut self, option: i32) {
        self.config.option = option;
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.option = algorithm.selector();
    }

    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        self.config.heuristic = heuristic;
    }

    /// The strategy [`solve`](Self::solve) will run. Does not search.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm()
    }

    /// The bound maze, for reading the flags a run left behind.
    #[inline]
    pub fn maze(&self) -> &Maze {
        &*self.maze
    }

    #[inline]
    pub fn maze_mut(&mut self) -> &mut Maze {
        &mut *self.maze
    }

    /// Run the configured strategy from the root to the exit.
    ///
    /// Returns [`Outcome::Skipped`] without touching any cell when the maze
    /// has no root or no exit. An error means the search broke one of its own
    /// invariants while rebuilding the path, never that the maze is
    /// unsolvable.
    pub fn solve(&mut self) -> Result<Outcome> {
        let (Some(start), Some(goal)) = (self.maze.root(), self.maze.exit()) else {
            debug!("solve skipped: maze has no root or no exit");
            return Ok(Outcome::Skipped);
        };

        let algorithm = self.algorithm();
        let heuristic = self.config.heuristic;
        debug!(
            "{algorithm}: solving from {} to {}",
            self.maze[start].pos(),
            self.maze[goal].pos()
        );

        let outcome = match algorithm {
            Algorithm::Dfs => Ok(self.dfs(start, goal)),
            Algorithm::Bfs => self.bfs(start, goal),
            Algorithm::Dijkstra => self.dijkstra(start, goal),
            Algorithm::AStar => self.astar(start, goal, heuristic),
        }?;

        debug!(
            "{algorithm}: {outcome:?}, {} cells visited",
            self.maze.visited_count()
        );
        Ok(outcome)
    }
}
