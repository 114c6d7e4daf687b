//! HTTP front end.
//!
//! | Route | Algorithm |
//! |---|---|
//! | `GET /api/solve?algorithm=..` | from the query |
//! | `GET /api/{bfs,dfs,dijkstra,astar}` | from the path |
//! | `GET /health` | liveness probe |
//!
//! All solve routes take `size`, `layout`, `start` and `end` query
//! parameters. Errors are JSON bodies `{"error": .., "status_code": ..}`.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use maze_paths::Algorithm;
use tokio::time::timeout;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::error::{Result, ServiceError};
use crate::request::{SolveQuery, SolveRequest, SolveResponse};
use crate::solver::{Solution, Solver};

// ============= Error Handling =============

async fn handle_rejection(err: Rejection) -> std::result::Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(service_err) = err.find::<ServiceError>() {
        code = service_err.status_code();
        message = service_err.to_string();
    } else if let Some(query_err) = err.find::<warp::reject::InvalidQuery>() {
        code = StatusCode::BAD_REQUEST;
        message = query_err.to_string();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed".to_string();
    } else {
        log::error!("unhandled rejection: {:?}", err);
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    let json = warp::reply::json(&serde_json::json!({
        "error": message,
        "status_code": code.as_u16(),
    }));

    Ok(warp::reply::with_status(json, code))
}

// ============= CORS Configuration =============

fn with_cors() -> warp::cors::Builder {
    warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["Accept", "Content-Type"])
        .allow_methods(vec!["GET", "OPTIONS"])
        .max_age(3600)
}

// ============= Middleware & Filters =============

fn with_solver(
    solver: Arc<Solver>,
) -> impl Filter<Extract = (Arc<Solver>,), Error = Infallible> + Clone {
    warp::any().map(move || solver.clone())
}

// ============= Request Handlers =============

async fn handle_health() -> std::result::Result<impl Reply, Rejection> {
    Ok(warp::reply::json(&serde_json::json!({
        "status": "healthy",
        "service": "maze-service",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

async fn handle_solve(
    algorithm: Option<Algorithm>,
    query: SolveQuery,
    solver: Arc<Solver>,
) -> std::result::Result<impl Reply, Rejection> {
    let query = match algorithm {
        Some(a) => query.with_algorithm(a),
        None => query,
    };
    let request = query.parse().map_err(|e| {
        log::info!("rejected request {query:?}: {e}");
        warp::reject::custom(e)
    })?;
    let solution = solve_blocking(solver, request)
        .await
        .map_err(warp::reject::custom)?;
    log::info!(
        "solved {} {} in {} attempt(s), {} frames",
        request.algorithm,
        request.size,
        solution.attempts,
        solution.result.maze_output.len()
    );
    Ok(warp::reply::json(&SolveResponse::from(solution)))
}

/// Run one solve on the blocking pool, with its own random source, under
/// the configured timeout.
pub async fn solve_blocking(solver: Arc<Solver>, request: SolveRequest) -> Result<Solution> {
    let limit = solver.config().request_timeout;
    let task = tokio::task::spawn_blocking(move || solver.solve(&request, rand::rng()));
    match timeout(limit, task).await {
        Ok(Ok(solved)) => solved,
        Ok(Err(join_err)) => Err(ServiceError::Internal(join_err.to_string())),
        Err(_) => {
            log::warn!("solve of {} {} timed out", request.algorithm, request.size);
            Err(ServiceError::Timeout(limit))
        }
    }
}

// ============= Routes =============

/// Every route of the service, with error recovery, CORS and access logs.
pub fn routes(
    solver: Arc<Solver>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handle_health);

    let solve = warp::path!("api" / "solve")
        .and(warp::get())
        .and(warp::query::<SolveQuery>())
        .and(with_solver(solver.clone()))
        .and_then(|query: SolveQuery, solver: Arc<Solver>| {
            handle_solve(None, query, solver)
        });

    let by_algorithm = warp::path!("api" / Algorithm)
        .and(warp::get())
        .and(warp::query::<SolveQuery>())
        .and(with_solver(solver))
        .and_then(|algorithm: Algorithm, query: SolveQuery, solver: Arc<Solver>| {
            handle_solve(Some(algorithm), query, solver)
        });

    health
        .or(solve)
        .or(by_algorithm)
        .recover(handle_rejection)
        .with(with_cors())
        .with(warp::log("maze_service"))
}

/// Serve until the process is stopped.
pub async fn serve(solver: Solver, addr: SocketAddr) {
    log::info!(
        "Starting maze service on {addr} (max {} attempts, {:?} timeout)",
        solver.config().max_attempts,
        solver.config().request_timeout
    );
    warp::serve(routes(Arc::new(solver))).run(addr).await;
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::ServiceConfig;
    use warp::test::request;

    fn app() -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
        routes(Arc::new(Solver::new(ServiceConfig::default()).unwrap()))
    }

    fn json(body: &[u8]) -> serde_json::Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let res = request().path("/health").reply(&app()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json(res.body())["status"], "healthy");
    }

    #[tokio::test]
    async fn bfs_route_returns_frames_and_path() {
        let res = request()
            .path("/api/bfs?size=small&layout=open")
            .reply(&app())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: SolveResponse = serde_json::from_slice(res.body()).unwrap();
        assert!(!body.path_cells.is_empty());
        assert_eq!(body.maze_output.last().map(|f| f.lines().count()), Some(7));
        let first = body.path_cells[0];
        assert_eq!(format!("{},{}", first[0], first[1]), body.start);
        assert!(body.message.starts_with("We've reached the end"));
    }

    #[tokio::test]
    async fn solve_route_reads_algorithm_from_query() {
        let res = request()
            .path("/api/solve?algorithm=dijkstra&size=medium&layout=carved")
            .reply(&app())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: SolveResponse = serde_json::from_slice(res.body()).unwrap();
        assert!(body.message.contains("Total cost"));
        assert_eq!(body.maze_output[0].lines().count(), 15);
    }

    #[tokio::test]
    async fn astar_route_uses_caller_endpoints() {
        let res = request()
            .path("/api/astar?start=0,0&end=6,6&layout=open")
            .reply(&app())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: SolveResponse = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body.start, "0,0");
        assert_eq!(body.end, "6,6");
        assert_eq!(body.path_cells.first(), Some(&[0, 0]));
        assert_eq!(body.path_cells.last(), Some(&[6, 6]));
    }

    #[tokio::test]
    async fn astar_same_endpoints_is_bad_request() {
        let res = request()
            .path("/api/astar?start=0,0&end=0,0")
            .reply(&app())
            .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = json(res.body());
        assert_eq!(body["status_code"], 400);
        assert!(body["error"].as_str().unwrap().contains("invalid coordinates"));
    }

    #[tokio::test]
    async fn bad_parameters_are_bad_requests() {
        for path in [
            "/api/bfs?size=huge",
            "/api/solve?algorithm=greedy",
            "/api/solve?size=small",
            "/api/dfs?layout=spiral",
        ] {
            let res = request().path(path).reply(&app()).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{path}");
        }
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let res = request().path("/api/greedy").reply(&app()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(json(res.body())["status_code"], 404);
    }

    #[tokio::test]
    async fn slow_solve_times_out() {
        let config = ServiceConfig {
            request_timeout: Duration::from_nanos(1),
            ..ServiceConfig::default()
        };
        let solver = Arc::new(Solver::new(config).unwrap());
        let res = request()
            .path("/api/dfs?size=large&layout=open")
            .reply(&routes(solver))
            .await;
        assert_eq!(res.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(json(res.body())["status_code"], 504);
    }
}
