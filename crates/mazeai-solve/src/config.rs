use crate::algorithm::Algorithm;
use crate::heuristic::Heuristic;

/// Solver configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Algorithm selector, interpreted `mod 4` (see [`Algorithm::from_selector`]).
    pub option: i32,
    /// A* frontier estimate. Ignored by the other strategies.
    pub heuristic: Heuristic,
}

impl SolverConfig {
    /// Set the raw selector (builder).
    pub const fn with_option(mut self, option: i32) -> Self {
        self.option = option;
        self
    }

    /// Select a strategy directly (builder).
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.option = algorithm.selector();
        self
    }

    /// Set the A* heuristic (builder).
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// The strategy the selector maps to.
    #[inline]
    pub const fn algorithm(&self) -> Algorithm {
        Algorithm::from_selector(self.option)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let c: SolverConfig = serde_json::from_str(r#"{"option": 3}"#).unwrap();
        assert_eq!(c.algorithm(), Algorithm::AStar);
        assert_eq!(c.heuristic, Heuristic::SquaredEuclidean);

        let json = serde_json::to_string(&c.with_heuristic(Heuristic::Zero)).unwrap();
        let back: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.heuristic, Heuristic::Zero);
    }
}
