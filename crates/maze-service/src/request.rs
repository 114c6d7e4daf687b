//! The request and response shapes of a solve.

use maze_core::{Point, SizeClass};
use maze_gen::Layout;
use maze_paths::{Algorithm, SearchResult};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ServiceError};

/// Raw query parameters, as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveQuery {
    pub algorithm: Option<String>,
    pub size: Option<String>,
    pub layout: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// A validated solve request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveRequest {
    pub algorithm: Algorithm,
    pub size: SizeClass,
    pub layout: Layout,
    /// Caller-chosen start and end. Only A* takes them.
    pub endpoints: Option<(Point, Point)>,
}

impl SolveQuery {
    /// Replace the algorithm, for routes that name it in the path.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm.name().to_string());
        self
    }

    /// Validate every parameter. Nothing is generated or searched here, so
    /// bad input never reaches the engine.
    pub fn parse(&self) -> Result<SolveRequest> {
        let algorithm: Algorithm = match self.algorithm.as_deref() {
            Some(name) => name.parse()?,
            None => return Err(ServiceError::MissingAlgorithm),
        };
        let size = match self.size.as_deref() {
            Some(s) => s.parse()?,
            None => SizeClass::default(),
        };
        let layout = match self.layout.as_deref() {
            Some(s) => s.parse()?,
            None => Layout::default(),
        };
        let endpoints = if algorithm.requires_endpoints() {
            Some(self.endpoints(size)?)
        } else {
            None
        };
        Ok(SolveRequest {
            algorithm,
            size,
            layout,
            endpoints,
        })
    }

    fn endpoints(&self, size: SizeClass) -> Result<(Point, Point)> {
        let start = coordinate("start", self.start.as_deref(), size)?;
        let end = coordinate("end", self.end.as_deref(), size)?;
        if start == end {
            return Err(ServiceError::InvalidCoordinates(format!(
                "start and end are both {}",
                start.coord_text()
            )));
        }
        Ok((start, end))
    }
}

fn coordinate(name: &str, text: Option<&str>, size: SizeClass) -> Result<Point> {
    let text =
        text.ok_or_else(|| ServiceError::InvalidCoordinates(format!("{name} is required for a*")))?;
    let p: Point = text
        .parse()
        .map_err(|e| ServiceError::InvalidCoordinates(format!("{name}: {e}")))?;
    let dims = size.dims();
    if p.x < 0 || p.y < 0 || p.x >= dims.x || p.y >= dims.y {
        return Err(ServiceError::InvalidCoordinates(format!(
            "{name} {} is outside the {}x{} {size} maze",
            p.coord_text(),
            dims.x,
            dims.y
        )));
    }
    Ok(p)
}

/// The JSON body returned for a solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub maze_output: Vec<String>,
    pub path_cells: Vec<[i32; 2]>,
    pub start: String,
    pub end: String,
    pub message: String,
}

impl From<SearchResult> for SolveResponse {
    fn from(r: SearchResult) -> Self {
        Self {
            path_cells: r.path_cells.iter().map(|p| [p.x, p.y]).collect(),
            start: r.start.coord_text(),
            end: r.end.coord_text(),
            maze_output: r.maze_output,
            message: r.message,
        }
    }
}
