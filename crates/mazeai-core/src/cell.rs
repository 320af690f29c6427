//! The [`Cell`] type: one maze location with its links and search flags.

use std::fmt;

use crate::geom::{Direction, Point};

/// Index of a cell inside its [`Maze`](crate::Maze) arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// Position of the cell in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the maze graph.
///
/// Links are arena indices, so a cell never owns its neighbours. An absent
/// link is a wall (or the maze boundary).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    links: [Option<CellId>; 4],
    visited: bool,
    on_solution_path: bool,
    is_exit: bool,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            links: [None; 4],
            visited: false,
            on_solution_path: false,
            is_exit: false,
        }
    }

    /// Grid coordinates of the cell.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// The cell linked on side `dir`, if the side is open.
    #[inline]
    pub fn neighbor(&self, dir: Direction) -> Option<CellId> {
        self.links[dir.index()]
    }

    /// Linked neighbours, visited in the given side order.
    pub fn neighbors<'a>(
        &'a self,
        order: &'a [Direction],
    ) -> impl Iterator<Item = CellId> + 'a {
        order.iter().filter_map(|&dir| self.neighbor(dir))
    }

    /// Whether the last search run explored this cell.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Whether the last search run put this cell on the discovered path.
    #[inline]
    pub fn is_on_solution_path(&self) -> bool {
        self.on_solution_path
    }

    /// Whether this is the goal cell.
    #[inline]
    pub fn is_exit(&self) -> bool {
        self.is_exit
    }

    /// Mark the cell as explored.
    #[inline]
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    /// Set or clear the solution-path flag.
    #[inline]
    pub fn set_on_solution_path(&mut self, on: bool) {
        self.on_solution_path = on;
    }

    /// Clear the per-run search state. The exit flag and links are kept.
    pub fn reset(&mut self) {
        self.visited = false;
        self.on_solution_path = false;
    }

    pub(crate) fn set_link(&mut self, dir: Direction, to: Option<CellId>) {
        self.links[dir.index()] = to;
    }

    pub(crate) fn set_exit(&mut self) {
        self.is_exit = true;
    }
}
