//! **mazeai-core**: maze graph types.
//!
//! This crate provides the data a maze solver works on: grid geometry, the
//! [`Cell`] node with its search flags, the arena-backed [`Maze`] that owns
//! every cell, a [`MazeBuilder`] for assembling mazes, and a small text layout
//! format ([`Maze::parse`]).

pub mod cell;
pub mod error;
pub mod geom;
pub mod layout;
pub mod maze;

pub use cell::{Cell, CellId};
pub use error::{MazeError, Result};
pub use geom::{Direction, Point};
pub use maze::{Maze, MazeBuilder};
