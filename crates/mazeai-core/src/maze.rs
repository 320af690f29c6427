//! The [`Maze`] arena and its [`MazeBuilder`].
//!
//! A maze owns every [`Cell`] in a flat `Vec`; cells refer to each other with
//! [`CellId`] indices into that vector, so the cyclic grid graph needs no
//! shared ownership. Insertion order is preserved, which makes
//! [`Maze::exit`] deterministic.

use std::collections::{HashMap, VecDeque};
use std::ops::{Index, IndexMut};

use crate::cell::{Cell, CellId};
use crate::error::{MazeError, Result};
use crate::geom::{Direction, Point};

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// An owned collection of cells plus the designated start cell.
///
/// The search flags on the cells are plain mutable state: a maze must not be
/// searched by two solvers at once, and it must be [`reset`](Maze::reset)
/// between runs.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MazeRepr", into = "MazeRepr")
)]
pub struct Maze {
    cells: Vec<Cell>,
    by_pos: HashMap<Point, CellId>,
    root: Option<CellId>,
}

impl Maze {
    /// An empty maze with no root. Nothing can be solved on it.
    pub fn new() -> Self {
        Self::default()
    }

    /// The start cell, if any.
    #[inline]
    pub fn root(&self) -> Option<CellId> {
        self.root
    }

    /// The first cell (in insertion order) flagged as exit.
    pub fn exit(&self) -> Option<CellId> {
        self.cells.iter().position(Cell::is_exit).map(CellId)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Look up a cell by id.
    #[inline]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    /// Look up a cell by id, mutably.
    #[inline]
    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id.0)
    }

    /// Id of the cell at `pos`.
    #[inline]
    pub fn id_at(&self, pos: Point) -> Option<CellId> {
        self.by_pos.get(&pos).copied()
    }

    /// The cell at `pos`.
    pub fn cell_at(&self, pos: Point) -> Option<&Cell> {
        self.id_at(pos).and_then(|id| self.cell(id))
    }

    /// All cells with their ids, in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter().enumerate().map(|(i, c)| (CellId(i), c))
    }

    /// Clear the search flags of every cell.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset();
        }
    }

    /// Ids of the cells flagged as lying on the solution path.
    pub fn solution_cells(&self) -> Vec<CellId> {
        self.cells()
            .filter(|(_, c)| c.is_on_solution_path())
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of cells flagged as lying on the solution path.
    pub fn solution_len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_on_solution_path()).count()
    }

    /// Number of cells the last run explored.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_visited()).count()
    }

    /// Recover an ordered root-to-exit route through the flagged solution
    /// cells, following neighbour links.
    ///
    /// Returns `None` when no such route exists, i.e. the flagged cells do not
    /// connect the root to the exit. When the flagged set contains shortcuts
    /// the shortest route through it is returned.
    pub fn solution_route(&self) -> Option<Vec<CellId>> {
        let root = self.root?;
        let exit = self.exit()?;
        if !self[root].is_on_solution_path() || !self[exit].is_on_solution_path() {
            return None;
        }

        let mut prev: HashMap<CellId, CellId> = HashMap::new();
        let mut queue = VecDeque::from([root]);
        while let Some(id) = queue.pop_front() {
            if id == exit {
                let mut route = vec![exit];
                let mut at = exit;
                while at != root {
                    at = prev[&at];
                    route.push(at);
                }
                route.reverse();
                return Some(route);
            }
            for next in self[id].neighbors(&Direction::ALL) {
                if next != root
                    && !prev.contains_key(&next)
                    && self.cell(next).is_some_and(Cell::is_on_solution_path)
                {
                    prev.insert(next, id);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    fn push_cell(&mut self, pos: Point) -> Result<CellId> {
        if self.by_pos.contains_key(&pos) {
            return Err(MazeError::DuplicatePosition(pos));
        }
        Ok(self.push_new_cell(pos))
    }

    /// Append a cell whose position is known to be free.
    fn push_new_cell(&mut self, pos: Point) -> CellId {
        let id = CellId(self.cells.len());
        self.cells.push(Cell::new(pos));
        self.by_pos.insert(pos, id);
        id
    }

    /// Open the wall between two existing cells, in both directions.
    fn connect(&mut self, from: CellId, dir: Direction, to: CellId) {
        self[from].set_link(dir, Some(to));
        self[to].set_link(dir.reverse(), Some(from));
    }

    fn check(&self, id: CellId) -> Result<()> {
        if id.0 < self.cells.len() {
            Ok(())
        } else {
            Err(MazeError::UnknownCell(id))
        }
    }
}

impl Index<CellId> for Maze {
    type Output = Cell;

    fn index(&self, id: CellId) -> &Cell {
        self.cell(id)
            .unwrap_or_else(|| panic!("cell {id} is not part of this maze"))
    }
}

impl IndexMut<CellId> for Maze {
    fn index_mut(&mut self, id: CellId) -> &mut Cell {
        self.cell_mut(id)
            .unwrap_or_else(|| panic!("cell {id} is not part of this maze"))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MazeRepr {
    cells: Vec<Cell>,
    root: Option<CellId>,
}

#[cfg(feature = "serde")]
impl From<Maze> for MazeRepr {
    fn from(m: Maze) -> Self {
        Self {
            cells: m.cells,
            root: m.root,
        }
    }
}

/// Deserialized mazes are checked the way [`MazeBuilder`] checks its input:
/// every link and the root must name a cell of the arena, positions must be
/// unique and at most one cell may be the exit.
#[cfg(feature = "serde")]
impl TryFrom<MazeRepr> for Maze {
    type Error = MazeError;

    fn try_from(r: MazeRepr) -> Result<Self> {
        let n = r.cells.len();
        let known = |id: CellId| {
            if id.0 < n {
                Ok(())
            } else {
                Err(MazeError::UnknownCell(id))
            }
        };

        let mut by_pos = HashMap::with_capacity(n);
        let mut exits = 0;
        for (i, cell) in r.cells.iter().enumerate() {
            if by_pos.insert(cell.pos(), CellId(i)).is_some() {
                return Err(MazeError::DuplicatePosition(cell.pos()));
            }
            if cell.is_exit() {
                exits += 1;
                if exits > 1 {
                    return Err(MazeError::MultipleExits);
                }
            }
            for next in cell.neighbors(&Direction::ALL) {
                known(next)?;
            }
        }
        if let Some(root) = r.root {
            known(root)?;
        }

        Ok(Self {
            cells: r.cells,
            by_pos,
            root: r.root,
        })
    }
}

// ---------------------------------------------------------------------------
// MazeBuilder
// ---------------------------------------------------------------------------

/// Incremental constructor for a [`Maze`].
///
/// ```
/// use mazeai_core::{Direction, MazeBuilder, Point};
///
/// let mut b = MazeBuilder::new();
/// let a = b.add_cell(Point::new(0, 0)).unwrap();
/// let e = b.add_cell(Point::new(1, 0)).unwrap();
/// b.link(a, Direction::Right).unwrap();
/// b.set_root(a).unwrap();
/// b.set_exit(e).unwrap();
/// let maze = b.build();
/// assert_eq!(maze.exit(), Some(e));
/// ```
#[derive(Debug, Default)]
pub struct MazeBuilder {
    maze: Maze,
}

impl MazeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `width` × `height` block of cells with every wall closed.
    ///
    /// Cells are inserted row by row.
    pub fn grid(width: i32, height: i32) -> Self {
        let mut b = Self::new();
        for y in 0..height.max(0) {
            for x in 0..width.max(0) {
                b.maze.push_new_cell(Point::new(x, y));
            }
        }
        b
    }

    /// A `width` × `height` block of cells with every internal wall open.
    pub fn open_grid(width: i32, height: i32) -> Self {
        let mut b = Self::grid(width, height);
        for i in 0..b.maze.cells.len() {
            let id = CellId(i);
            let pos = b.maze[id].pos();
            for dir in [Direction::Right, Direction::Bottom] {
                if let Some(to) = pos.checked_step(dir).and_then(|n| b.maze.id_at(n)) {
                    b.maze.connect(id, dir, to);
                }
            }
        }
        b
    }

    /// Add a cell at `pos`.
    pub fn add_cell(&mut self, pos: Point) -> Result<CellId> {
        self.maze.push_cell(pos)
    }

    /// Id of the cell at `pos`.
    pub fn id_at(&self, pos: Point) -> Option<CellId> {
        self.maze.id_at(pos)
    }

    /// Open the wall on side `dir` of `from`, in both directions.
    pub fn link(&mut self, from: CellId, dir: Direction) -> Result<CellId> {
        let to = self.link_one_way(from, dir)?;
        self.maze[to].set_link(dir.reverse(), Some(from));
        Ok(to)
    }

    /// Open the wall on side `dir` of `from` without touching the neighbour.
    ///
    /// Searches assume an undirected grid; this exists for callers that model
    /// one-way passages deliberately.
    pub fn link_one_way(&mut self, from: CellId, dir: Direction) -> Result<CellId> {
        self.maze.check(from)?;
        let pos = self.maze[from].pos();
        let to = pos
            .checked_step(dir)
            .and_then(|n| self.maze.id_at(n))
            .ok_or(MazeError::NoNeighbor { from: pos, dir })?;
        self.maze[from].set_link(dir, Some(to));
        Ok(to)
    }

    /// Close the wall on side `dir` of `from`, in both directions.
    pub fn unlink(&mut self, from: CellId, dir: Direction) -> Result<()> {
        self.maze.check(from)?;
        if let Some(to) = self.maze[from].neighbor(dir) {
            self.maze[to].set_link(dir.reverse(), None);
        }
        self.maze[from].set_link(dir, None);
        Ok(())
    }

    /// Close every wall of `id`, detaching it from the graph.
    pub fn isolate(&mut self, id: CellId) -> Result<()> {
        for dir in Direction::ALL {
            self.unlink(id, dir)?;
        }
        Ok(())
    }

    /// Designate the start cell.
    pub fn set_root(&mut self, id: CellId) -> Result<()> {
        self.maze.check(id)?;
        if self.maze.root.is_some_and(|r| r != id) {
            return Err(MazeError::MultipleRoots);
        }
        self.maze.root = Some(id);
        Ok(())
    }

    /// Flag the goal cell. A maze has at most one.
    pub fn set_exit(&mut self, id: CellId) -> Result<()> {
        self.maze.check(id)?;
        match self.maze.exit() {
            Some(e) if e != id => Err(MazeError::MultipleExits),
            _ => {
                self.maze[id].set_exit();
                Ok(())
            }
        }
    }

    /// Set root and exit by position.
    pub fn endpoints(&mut self, root: Point, exit: Point) -> Result<()> {
        let r = self.id_at(root).ok_or(MazeError::NoCellAt(root))?;
        let e = self.id_at(exit).ok_or(MazeError::NoCellAt(exit))?;
        self.set_root(r)?;
        self.set_exit(e)
    }

    pub fn build(self) -> Maze {
        self.maze
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn empty_maze_has_no_endpoints() {
        let m = MazeBuilder::new().build();
        assert!(m.is_empty());
        assert_eq!(m.root(), None);
        assert_eq!(m.exit(), None);
        assert_eq!(m.solution_route(), None);
    }

    #[test]
    fn duplicate_position_rejected() {
        let mut b = MazeBuilder::new();
        b.add_cell(p(0, 0)).unwrap();
        assert_eq!(b.add_cell(p(0, 0)), Err(MazeError::DuplicatePosition(p(0, 0))));
    }

    #[test]
    fn link_is_symmetric() {
        let mut b = MazeBuilder::grid(2, 1);
        let a = b.id_at(p(0, 0)).unwrap();
        let c = b.link(a, Direction::Right).unwrap();
        let m = b.build();
        assert_eq!(m[a].neighbor(Direction::Right), Some(c));
        assert_eq!(m[c].neighbor(Direction::Left), Some(a));
        assert_eq!(m[a].neighbor(Direction::Left), None);
    }

    #[test]
    fn link_one_way_is_not() {
        let mut b = MazeBuilder::grid(2, 1);
        let a = b.id_at(p(0, 0)).unwrap();
        let c = b.link_one_way(a, Direction::Right).unwrap();
        let m = b.build();
        assert_eq!(m[a].neighbor(Direction::Right), Some(c));
        assert_eq!(m[c].neighbor(Direction::Left), None);
    }

    #[test]
    fn link_off_the_edge_fails() {
        let mut b = MazeBuilder::grid(1, 1);
        let a = b.id_at(p(0, 0)).unwrap();
        assert_eq!(
            b.link(a, Direction::Top),
            Err(MazeError::NoNeighbor {
                from: p(0, 0),
                dir: Direction::Top
            })
        );
        assert_eq!(
            b.link(CellId(7), Direction::Top),
            Err(MazeError::UnknownCell(CellId(7)))
        );
    }

    #[test]
    fn link_past_the_coordinate_range_fails() {
        let mut b = MazeBuilder::new();
        let far = b.add_cell(p(i32::MAX, 0)).unwrap();
        b.add_cell(p(i32::MIN, 0)).unwrap();
        assert_eq!(
            b.link(far, Direction::Right),
            Err(MazeError::NoNeighbor {
                from: p(i32::MAX, 0),
                dir: Direction::Right
            })
        );
        let m = b.build();
        assert_eq!(m[far].neighbor(Direction::Right), None);
    }

    #[test]
    fn open_grid_links_every_neighbour() {
        let m = MazeBuilder::open_grid(3, 3).build();
        assert_eq!(m.len(), 9);
        let centre = m.cell_at(p(1, 1)).unwrap();
        assert_eq!(centre.neighbors(&Direction::ALL).count(), 4);
        let corner = m.cell_at(p(0, 0)).unwrap();
        assert_eq!(corner.neighbor(Direction::Right), m.id_at(p(1, 0)));
        assert_eq!(corner.neighbor(Direction::Bottom), m.id_at(p(0, 1)));
        assert_eq!(corner.neighbor(Direction::Left), None);
        assert_eq!(corner.neighbor(Direction::Top), None);
    }

    #[test]
    fn isolate_cuts_both_sides() {
        let mut b = MazeBuilder::open_grid(3, 3);
        let centre = b.id_at(p(1, 1)).unwrap();
        b.isolate(centre).unwrap();
        let m = b.build();
        assert_eq!(m[centre].neighbors(&Direction::ALL).count(), 0);
        let above = m.cell_at(p(1, 0)).unwrap();
        assert_eq!(above.neighbor(Direction::Bottom), None);
    }

    #[test]
    fn single_exit_enforced() {
        let mut b = MazeBuilder::grid(2, 1);
        let a = b.id_at(p(0, 0)).unwrap();
        let c = b.id_at(p(1, 0)).unwrap();
        b.set_exit(c).unwrap();
        b.set_exit(c).unwrap();
        assert_eq!(b.set_exit(a), Err(MazeError::MultipleExits));
        b.set_root(a).unwrap();
        assert_eq!(b.set_root(c), Err(MazeError::MultipleRoots));
        let m = b.build();
        assert_eq!(m.exit(), Some(c));
        assert_eq!(m.root(), Some(a));
    }

    #[test]
    fn reset_clears_every_cell() {
        let mut m = MazeBuilder::open_grid(2, 2).build();
        let ids: Vec<_> = m.cells().map(|(id, _)| id).collect();
        for id in ids {
            m[id].mark_visited();
            m[id].set_on_solution_path(true);
        }
        assert_eq!(m.visited_count(), 4);
        assert_eq!(m.solution_len(), 4);
        m.reset();
        assert_eq!(m.visited_count(), 0);
        assert!(m.solution_cells().is_empty());
    }

    #[test]
    fn solution_route_follows_flags() {
        let mut b = MazeBuilder::open_grid(3, 2);
        b.endpoints(p(0, 0), p(2, 0)).unwrap();
        let mut m = b.build();
        for pos in [p(0, 0), p(0, 1), p(1, 1), p(2, 1), p(2, 0)] {
            let id = m.id_at(pos).unwrap();
            m[id].set_on_solution_path(true);
        }
        let route: Vec<_> = m
            .solution_route()
            .unwrap()
            .into_iter()
            .map(|id| m[id].pos())
            .collect();
        assert_eq!(route, vec![p(0, 0), p(0, 1), p(1, 1), p(2, 1), p(2, 0)]);

        let gap = m.id_at(p(1, 1)).unwrap();
        m[gap].set_on_solution_path(false);
        assert_eq!(m.solution_route(), None);
    }
}
