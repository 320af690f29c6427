//! Error types for solving.

use mazeai_core::CellId;
use thiserror::Error;

/// An internal invariant was violated while rebuilding the path.
///
/// These never describe the maze: an unreachable exit is reported as
/// [`Outcome::NoPath`](crate::Outcome::NoPath), not as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("predecessor chain broken at cell {at} before reaching the start")]
    BrokenChain { at: CellId },

    #[error("predecessor chain longer than the {limit} cells of the maze")]
    PredecessorCycle { limit: usize },
}

/// A name that does not denote any known algorithm or heuristic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} {name:?}")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub name: String,
}

pub type Result<T> = std::result::Result<T, SolveError>;
