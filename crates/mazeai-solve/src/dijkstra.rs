use std::collections::{BinaryHeap, HashMap};

use log::trace;
use mazeai_core::{CellId, Direction, Point};

use crate::Solver;
use crate::error::Result;
use crate::frontier::FrontierEntry;
use crate::reconstruct::reconstruct;
use crate::solver::Outcome;

/// Side order in which Dijkstra and A* relax neighbours.
const ORDER: [Direction; 4] = [
    Direction::Bottom,
    Direction::Top,
    Direction::Left,
    Direction::Right,
];

/// Cost of moving between two linked cells.
const STEP_COST: i64 = 1;

impl Solver<'_> {
    /// Uniform-cost search from `start` to `goal`.
    pub(crate) fn dijkstra(&mut self, start: CellId, goal: CellId) -> Result<Outcome> {
        self.best_first(start, goal, |_| 0)
    }

    /// Priority-frontier search shared by Dijkstra and A*.
    ///
    /// Cells are ordered by accumulated cost plus `estimate(pos)`. Relaxation
    /// only compares accumulated costs. A cell may sit in the heap several
    /// times; entries whose cost is worse than the best recorded one are
    /// skipped when popped. Neighbours are marked visited as soon as they are
    /// looked at, so `visited` means "explored", not "finalized".
    pub(crate) fn best_first(
        &mut self,
        start: CellId,
        goal: CellId,
        estimate: impl Fn(Point) -> i64,
    ) -> Result<Outcome> {
        let maze = &mut *self.maze;

        let mut dist: HashMap<CellId, i64> = HashMap::from([(start, 0)]);
        let mut prev: HashMap<CellId, CellId> = HashMap::new();
        let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut seq = 0u64;

        maze[start].mark_visited();
        open.push(FrontierEntry {
            id: start,
            cost: 0,
            priority: estimate(maze[start].pos()),
            seq,
        });

        let mut nbuf: Vec<CellId> = Vec::with_capacity(ORDER.len());
        let mut found = false;

        while let Some(current) = open.pop() {
            let ci = current.id;

            // Skip stale entries.
            if dist.get(&ci).is_some_and(|&best| current.cost > best) {
                continue;
            }

            if ci == goal {
                found = true;
                break;
            }
            trace!("expand {} at cost {}", maze[ci].pos(), current.cost);

            nbuf.clear();
            nbuf.extend(maze[ci].neighbors(&ORDER));

            for &ni in nbuf.iter() {
                maze[ni].mark_visited();
                let tentative = current.cost + STEP_COST;
                let known = *dist.entry(ni).or_insert(i64::MAX);
                if tentative >= known {
                    continue;
                }

                dist.insert(ni, tentative);
                prev.insert(ni, ci);
                seq += 1;
                open.push(FrontierEntry {
                    id: ni,
                    cost: tentative,
                    priority: tentative.saturating_add(estimate(maze[ni].pos())),
                    seq,
                });
            }
        }

        if !found {
            return Ok(Outcome::NoPath);
        }
        let length = reconstruct(maze, &prev, start, goal)?;
        Ok(Outcome::Solved { length })
    }
}
