//! Running a search to completion while recording one text frame per
//! dequeue.

use std::collections::HashSet;

use maze_core::{Grid, Point, render};

use crate::algorithm::Algorithm;
use crate::path::summarize;
use crate::search::Search;

/// Everything a client needs to replay a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// One frame per dequeued cell, then a final frame with the path overlay.
    pub maze_output: Vec<String>,
    /// Start-to-end path, empty when the end is unreachable.
    pub path_cells: Vec<Point>,
    pub start: Point,
    pub end: Point,
    pub message: String,
    /// Number of frontier pops, stale entries included.
    pub dequeued: usize,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path_cells.is_empty()
    }
}

/// Search `grid` from its start cell to its end cell with `algorithm`.
pub fn record(grid: &Grid, algorithm: Algorithm) -> SearchResult {
    let (start, end) = (grid.start(), grid.end());
    let mut search = Search::new(grid, algorithm, start, end);
    let mut frames = Vec::new();
    while search.step().is_some() {
        frames.push(render(grid, &search.state().visited, None));
    }

    let outcome = search.finish();
    let path = outcome.path();
    let overlay: HashSet<Point> = path.iter().copied().collect();
    frames.push(render(
        grid,
        &outcome.state.visited,
        (!overlay.is_empty()).then_some(&overlay),
    ));

    SearchResult {
        algorithm,
        message: summarize(algorithm, grid, end, &path),
        maze_output: frames,
        path_cells: path,
        start,
        end,
        dequeued: outcome.state.dequeued,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::NO_PATH;

    fn visited_count(frame: &str) -> usize {
        frame.chars().filter(|&c| c == 'X').count()
    }

    #[test]
    fn one_frame_per_dequeue_plus_final() {
        let g: Grid = "S.#1\n.3..\n#1.E".parse().unwrap();
        for a in Algorithm::ALL {
            let res = record(&g, a);
            assert_eq!(res.maze_output.len(), res.dequeued + 1, "{a}");
        }
    }

    #[test]
    fn open_seven_by_seven_bfs() {
        let g = Grid::new(7, 7);
        let res = record(&g, Algorithm::Bfs);
        assert_eq!(res.start, Point::new(0, 0));
        assert_eq!(res.end, Point::new(6, 6));
        assert_eq!(res.path_cells.len(), 13);
        assert!(res.found());

        let frames = &res.maze_output[..res.maze_output.len() - 1];
        let counts: Vec<_> = frames.iter().map(|f| visited_count(f)).collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));

        let last = res.maze_output.last().unwrap();
        assert_eq!(last.chars().filter(|&c| c == '*').count(), 11);
        assert_eq!(last.lines().count(), 7);
        assert!(last.starts_with('S'));
        assert!(last.ends_with('E'));
    }

    #[test]
    fn unreachable_end_has_no_overlay() {
        let g: Grid = "S1#1\n11#E".parse().unwrap();
        let res = record(&g, Algorithm::Dijkstra);
        assert!(!res.found());
        assert_eq!(res.message, NO_PATH);
        let last = res.maze_output.last().unwrap();
        assert_eq!(last, "SX#1\nXX#E");
        assert_eq!(res.maze_output.len(), res.dequeued + 1);
    }

    #[test]
    fn weighted_message_reports_cost() {
        let g: Grid = "S5\n2E".parse().unwrap();
        let res = record(&g, Algorithm::Dijkstra);
        assert_eq!(res.path_cells, vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]);
        assert!(res.message.ends_with("Total cost: 3."));
    }
}
