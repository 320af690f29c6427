//! Text layouts: build a [`Maze`] from a character map.
//!
//! One character per grid position, row-major, top row first:
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | no cell (solid wall) |
//! | `.` or space | open cell |
//! | `S` | open cell, start |
//! | `E` | open cell, exit |
//!
//! Horizontally or vertically adjacent open cells are linked. A layout
//! without `S` or `E` is accepted; solving it is simply a no-op.

use std::str::FromStr;

use crate::error::{MazeError, Result};
use crate::geom::{Direction, Point};
use crate::maze::{Maze, MazeBuilder};

impl Maze {
    /// Parse a text layout (see the [`layout`](crate::layout) module docs).
    pub fn parse(text: &str) -> Result<Maze> {
        let mut b = MazeBuilder::new();
        let mut root = None;
        let mut exit = None;

        for (y, line) in text.lines().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    '#' => continue,
                    '.' | ' ' => {}
                    'S' if root.is_some() => return Err(MazeError::MultipleRoots),
                    'S' => root = Some(pos),
                    'E' if exit.is_some() => return Err(MazeError::MultipleExits),
                    'E' => exit = Some(pos),
                    _ => {
                        return Err(MazeError::UnknownTile {
                            ch,
                            line: y + 1,
                            column: x + 1,
                        });
                    }
                }
                let id = b.add_cell(pos)?;
                // Link back to already-placed neighbours.
                for dir in [Direction::Left, Direction::Top] {
                    if pos.checked_step(dir).and_then(|n| b.id_at(n)).is_some() {
                        b.link(id, dir)?;
                    }
                }
            }
        }

        if let Some(pos) = root {
            let id = b.id_at(pos).ok_or(MazeError::NoCellAt(pos))?;
            b.set_root(id)?;
        }
        if let Some(pos) = exit {
            let id = b.id_at(pos).ok_or(MazeError::NoCellAt(pos))?;
            b.set_exit(id)?;
        }
        Ok(b.build())
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        Maze::parse(s)
    }
}
