//! Error types for maze construction.

use thiserror::Error;

use crate::cell::CellId;
use crate::geom::{Direction, Point};

/// Errors raised while building or parsing a [`Maze`](crate::Maze).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("a cell already exists at {0}")]
    DuplicatePosition(Point),

    #[error("no cell {dir} of {from} to link to")]
    NoNeighbor { from: Point, dir: Direction },

    #[error("no cell at {0}")]
    NoCellAt(Point),

    #[error("unknown cell id {0}")]
    UnknownCell(CellId),

    #[error("maze already has an exit cell")]
    MultipleExits,

    #[error("maze already has a root cell")]
    MultipleRoots,

    #[error("unknown tile {ch:?} at line {line}, column {column}")]
    UnknownTile { ch: char, line: usize, column: usize },
}

pub type Result<T> = std::result::Result<T, MazeError>;
