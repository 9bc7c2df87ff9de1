use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The interchangeable search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    GreedyBestFirst,
    Bidirectional,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::GreedyBestFirst,
        Algorithm::Bidirectional,
    ];

    /// Short machine name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::GreedyBestFirst => "greedy",
            Algorithm::Bidirectional => "bidirectional",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-first search",
            Algorithm::Dfs => "Depth-first search",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A*",
            Algorithm::GreedyBestFirst => "Greedy best-first search",
            Algorithm::Bidirectional => "Bidirectional search",
        }
    }

    /// Whether node weights affect the route this algorithm finds.
    pub fn is_weighted(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }

    /// Whether the route found is guaranteed minimal for the costs this
    /// algorithm considers.
    ///
    /// A* only qualifies on grids where no queued node is ever reached more
    /// cheaply later, so it is not listed.
    pub fn guarantees_shortest(self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::Dijkstra)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {0:?} (expected one of: bfs, dfs, dijkstra, astar, greedy, bidirectional)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' ' | '*'))
            .flat_map(char::to_lowercase)
            .collect();
        let alg = match key.as_str() {
            "bfs" | "breadthfirst" | "breadthfirstsearch" => Algorithm::Bfs,
            "dfs" | "depthfirst" | "depthfirstsearch" => Algorithm::Dfs,
            "dijkstra" => Algorithm::Dijkstra,
            "astar" | "a" => Algorithm::AStar,
            "greedy" | "greedybestfirst" | "bestfirst" | "gbfs" => Algorithm::GreedyBestFirst,
            "bidirectional" | "bidi" | "bidirectionalsearch" => Algorithm::Bidirectional,
            _ => return Err(ParseAlgorithmError(s.to_owned())),
        };
        Ok(alg)
    }
}
