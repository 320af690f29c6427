use std::fmt;
use std::str::FromStr;

use crate::error::ParseNameError;

/// The search strategy a [`Solver`](crate::Solver) runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// All strategies, in selector order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Map an integer selector onto a strategy: `selector mod 4`, with
    /// 0 → DFS, 1 → BFS, 2 → Dijkstra, 3 → A*. Negative selectors wrap.
    #[inline]
    pub const fn from_selector(selector: i32) -> Self {
        match selector.rem_euclid(4) {
            0 => Self::Dfs,
            1 => Self::Bfs,
            2 => Self::Dijkstra,
            _ => Self::AStar,
        }
    }

    /// The canonical selector, in `0..4`.
    #[inline]
    pub const fn selector(self) -> i32 {
        match self {
            Self::Dfs => 0,
            Self::Bfs => 1,
            Self::Dijkstra => 2,
            Self::AStar => 3,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dfs => "DFS",
            Self::Bfs => "BFS",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "aStar",
        }
    }

    /// Whether the strategy always returns a minimum-length path.
    ///
    /// A* only does with an admissible heuristic, so it reports `false`.
    pub const fn is_shortest_path(self) -> bool {
        matches!(self, Self::Bfs | Self::Dijkstra)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseNameError;

    /// Accepts the display names (any case), `a*`, or a numeric selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<i32>() {
            return Ok(Self::from_selector(n));
        }
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Self::Dfs),
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseNameError {
                kind: "algorithm",
                name: s.to_string(),
            }),
        }
    }
}
