//! Step-wise graph search over maze grids.
//!
//! This crate runs the four maze searches one dequeue at a time so that a
//! caller can snapshot every step:
//!
//! - **BFS** fewest cells ([`Bfs`])
//! - **DFS** any path, deep first ([`Dfs`])
//! - **Dijkstra** cheapest path by entered-cell cost ([`Dijkstra`])
//! - **A\*** cheapest path, guided by the Manhattan distance ([`AStar`])
//!
//! All four share one engine, [`Search`], and differ only in their
//! [`Strategy`]: the [`Frontier`] they use and how they relax an edge.
//! [`record`] drives a search to completion and renders a frame per step.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | entry costs |
//! | [`AstarPather`] : [`WeightedPather`] | the heuristic, required by [`Search`] |

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;
mod path;
mod record;
mod search;
mod traits;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::AStar;
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use path::{NO_PATH, is_valid_path, path_cost, reconstruct, summarize};
pub use record::{SearchResult, record};
pub use search::{Edge, Search, SearchOutcome, SearchState, Step, Strategy};
pub use traits::{AstarPather, Pather, WeightedPather};
