use std::fmt;
use std::str::FromStr;

use mazeai_core::Point;

use crate::error::ParseNameError;

/// Remaining-distance estimate used to order the A* frontier.
///
/// The default, [`SquaredEuclidean`](Heuristic::SquaredEuclidean), is not
/// admissible on a unit-cost grid: past a couple of cells it overestimates
/// the true distance, so A* behaves as a greedy best-first search. It expands
/// few cells but may return a path longer than the shortest one.
/// [`Manhattan`](Heuristic::Manhattan) never overestimates on a 4-connected
/// grid and restores shortest-path results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    #[default]
    SquaredEuclidean,
    Manhattan,
    Chebyshev,
    /// No estimate; A* degenerates to Dijkstra.
    Zero,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::SquaredEuclidean,
        Heuristic::Manhattan,
        Heuristic::Chebyshev,
        Heuristic::Zero,
    ];

    /// Estimated cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Point, to: Point) -> i64 {
        match self {
            Self::SquaredEuclidean => from.squared_distance(to),
            Self::Manhattan => from.manhattan(to),
            Self::Chebyshev => from.chebyshev(to),
            Self::Zero => 0,
        }
    }

    /// Whether the estimate never exceeds the true unit-grid distance.
    pub const fn is_admissible(self) -> bool {
        !matches!(self, Self::SquaredEuclidean)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::SquaredEuclidean => "squared-euclidean",
            Self::Manhattan => "manhattan",
            Self::Chebyshev => "chebyshev",
            Self::Zero => "zero",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|h| h.name() == lower)
            .ok_or_else(|| ParseNameError {
                kind: "heuristic",
                name: s.trim().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimates() {
        let a = Point::new(0, 0);
        let b = Point::new(2, 3);
        assert_eq!(Heuristic::SquaredEuclidean.estimate(a, b), 13);
        assert_eq!(Heuristic::Manhattan.estimate(a, b), 5);
        assert_eq!(Heuristic::Chebyshev.estimate(a, b), 3);
        assert_eq!(Heuristic::Zero.estimate(a, b), 0);
    }

    #[test]
    fn squared_euclidean_overestimates() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);
        // True grid distance on an open row is 4.
        assert!(Heuristic::SquaredEuclidean.estimate(a, b) > a.manhattan(b));
        assert!(!Heuristic::SquaredEuclidean.is_admissible());
        assert!(Heuristic::Manhattan.is_admissible());
    }

    #[test]
    fn default_is_squared_euclidean() {
        assert_eq!(Heuristic::default(), Heuristic::SquaredEuclidean);
    }

    #[test]
    fn parse() {
        for h in Heuristic::ALL {
            assert_eq!(h.name().parse::<Heuristic>(), Ok(h));
        }
        assert_eq!("Manhattan".parse::<Heuristic>(), Ok(Heuristic::Manhattan));
        assert!("euclid".parse::<Heuristic>().is_err());
    }
}
