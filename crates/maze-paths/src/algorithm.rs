use std::fmt;
use std::str::FromStr;

/// The four search algorithms the engine can run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    #[cfg_attr(feature = "serde", serde(alias = "a*"))]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }

    /// Whether the algorithm minimises the summed cell costs rather than
    /// ignoring them.
    pub const fn is_weighted(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }

    /// Whether the caller must supply the start and end cells.
    pub const fn requires_endpoints(self) -> bool {
        matches!(self, Algorithm::AStar)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d}: choose bfs, dfs, dijkstra or a*",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "a*" | "astar" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
