use mazeai_core::CellId;

use crate::Solver;
use crate::error::Result;
use crate::heuristic::Heuristic;
use crate::solver::Outcome;

impl Solver<'_> {
    /// A* search from `start` to `goal`.
    ///
    /// Same frontier and relaxation as [`dijkstra`](Self::dijkstra), with the
    /// frontier ordered by accumulated cost plus `heuristic` from the cell to
    /// the goal. With the default squared-Euclidean estimate the search is
    /// greedy and the path is not guaranteed to be the shortest; see
    /// [`Heuristic`].
    pub(crate) fn astar(
        &mut self,
        start: CellId,
        goal: CellId,
        heuristic: Heuristic,
    ) -> Result<Outcome> {
        let target = self.maze[goal].pos();
        self.best_first(start, goal, move |pos| heuristic.estimate(pos, target))
    }
}
