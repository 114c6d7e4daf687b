use std::time::Duration;

use maze_core::ParseSizeError;
use maze_gen::ParseLayoutError;
use maze_paths::ParseAlgorithmError;
use thiserror::Error;
use warp::http::StatusCode;

/// Everything that can stop a solve request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    InvalidSize(#[from] ParseSizeError),

    #[error("algorithm is required: choose bfs, dfs, dijkstra or a*")]
    MissingAlgorithm,

    #[error(transparent)]
    InvalidAlgorithm(#[from] ParseAlgorithmError),

    #[error(transparent)]
    InvalidLayout(#[from] ParseLayoutError),

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no solvable maze after {attempts} attempts")]
    MazeUnsolvable { attempts: u32 },

    #[error("solve timed out after {0:?}")]
    Timeout(Duration),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// HTTP status reported for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidSize(_)
            | ServiceError::MissingAlgorithm
            | ServiceError::InvalidAlgorithm(_)
            | ServiceError::InvalidLayout(_)
            | ServiceError::InvalidCoordinates(_) => StatusCode::BAD_REQUEST,
            ServiceError::MazeUnsolvable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ServiceError::InvalidConfig(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl warp::reject::Reject for ServiceError {}

pub type Result<T> = std::result::Result<T, ServiceError>;
