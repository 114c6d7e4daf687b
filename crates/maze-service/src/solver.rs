//! Generate, search, retry: the whole solve pipeline for one request.

use maze_core::Grid;
use maze_gen::MazeGen;
use maze_paths::{SearchResult, record};
use rand::Rng;

use crate::config::ServiceConfig;
use crate::error::{Result, ServiceError};
use crate::request::{SolveRequest, SolveResponse};
use crate::retry::RetryPolicy;

/// Where the solver gets its mazes from.
pub trait MazeSource {
    /// Build a fresh maze for `request`.
    fn next_maze(&mut self, request: &SolveRequest) -> Result<Grid>;
}

impl<R: Rng> MazeSource for MazeGen<R> {
    fn next_maze(&mut self, request: &SolveRequest) -> Result<Grid> {
        match request.endpoints {
            Some((start, end)) => self
                .generate_with_endpoints(request.size, request.layout, start, end)
                .map_err(|e| ServiceError::InvalidCoordinates(e.to_string())),
            None => Ok(self.generate(request.size, request.layout)),
        }
    }
}

/// A solved request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub result: SearchResult,
    /// Mazes generated, the solvable one included.
    pub attempts: u32,
}

impl From<Solution> for SolveResponse {
    fn from(s: Solution) -> Self {
        s.result.into()
    }
}

/// Runs solve requests against a fixed configuration.
#[derive(Debug, Clone)]
pub struct Solver {
    config: ServiceConfig,
}

impl Solver {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Solve `request` with mazes drawn from `rng`.
    pub fn solve<R: Rng>(&self, request: &SolveRequest, rng: R) -> Result<Solution> {
        let mut mg = MazeGen::with_config(self.config.generator, rng)
            .map_err(|e| ServiceError::InvalidConfig(e.to_string()))?;
        self.solve_with(request, &mut mg)
    }

    /// Solve `request`, drawing a new maze from `source` whenever the
    /// previous one has no path.
    pub fn solve_with(&self, request: &SolveRequest, source: &mut impl MazeSource) -> Result<Solution> {
        let policy = RetryPolicy::new(self.config.max_attempts);
        let (result, attempts) = policy.run(|n| {
            let grid = source.next_maze(request)?;
            let result = record(&grid, request.algorithm);
            log::debug!(
                "attempt {n}: {} on {} maze, {} dequeued, {}",
                request.algorithm,
                request.size,
                result.dequeued,
                result.message
            );
            Ok(result.found().then_some(result))
        })?;
        Ok(Solution { result, attempts })
    }
}
