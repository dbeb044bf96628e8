//! Strategy selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The four supported search strategies.
///
/// All share one step contract; selection is a plain enum match, so swapping
/// strategies at runtime is a reassignment rather than a dispatch chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Uniform-cost expansion; optimal.
    Dijkstra,
    /// Heuristic-only ordering; fast, not optimal.
    Greedy,
    /// Cost plus admissible straight-line heuristic; optimal.
    #[default]
    AStar,
    /// Forward and backward frontiers meeting in the middle.
    Bidirectional,
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Strategy::Dijkstra),
            "greedy" => Ok(Strategy::Greedy),
            "astar" => Ok(Strategy::AStar),
            "bidirectional" => Ok(Strategy::Bidirectional),
            other => Err(Error::InvalidData(format!("unknown strategy key `{other}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        assert_eq!("dijkstra".parse::<Strategy>().unwrap(), Strategy::Dijkstra);
        assert_eq!("astar".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!(
            "bidirectional".parse::<Strategy>().unwrap(),
            Strategy::Bidirectional
        );
        assert!("bfs".parse::<Strategy>().is_err());
    }
}
