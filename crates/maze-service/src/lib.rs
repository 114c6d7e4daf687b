//! **maze-service**: the request boundary of the maze search engine.
//!
//! A request names an algorithm, a size class and optionally a layout and
//! A* endpoints. [`SolveQuery::parse`] validates it, [`Solver`] generates a
//! maze and records the search, regenerating under a [`RetryPolicy`] while
//! the end is unreachable, and [`SolveResponse`] is the JSON sent back.
//! [`http::routes`] exposes all of it over warp.

pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod retry;
pub mod solver;

pub use config::{ConfigArgs, ServiceConfig};
pub use error::{Result, ServiceError};
pub use request::{SolveQuery, SolveRequest, SolveResponse};
pub use retry::RetryPolicy;
pub use solver::{MazeSource, Solution, Solver};
