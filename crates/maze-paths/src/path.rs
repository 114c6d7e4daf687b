//! Path reconstruction and the human-readable summary of a search.

use std::collections::HashMap;

use maze_core::{Grid, Point, Role};

use crate::algorithm::Algorithm;
use crate::search::SearchOutcome;

/// Message reported when the end cannot be reached.
pub const NO_PATH: &str = "There is no path to the end of this maze";

/// Walk predecessor links from `end` back to `start` and return the cells in
/// start-to-end order. Returns an empty path when `end` is not linked back
/// to `start`.
pub fn reconstruct(predecessor: &HashMap<Point, Point>, start: Point, end: Point) -> Vec<Point> {
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        // A chain longer than the map has a cycle.
        if path.len() > predecessor.len() + 1 {
            return Vec::new();
        }
        match predecessor.get(&cur) {
            Some(&prev) => {
                path.push(prev);
                cur = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Whether `path` goes from the grid's start to its end through
/// 4-adjacent, passable cells.
pub fn is_valid_path(grid: &Grid, path: &[Point]) -> bool {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return false;
    };
    let role = |p| grid.at(p).map(|c| c.role).ok();
    role(first) == Some(Role::Start)
        && role(last) == Some(Role::End)
        && path.iter().all(|&p| grid.is_passable(p))
        && path.windows(2).all(|w| w[0].is_adjacent_4(w[1]))
}

/// Total cost of walking `path`: the sum of the costs of every entered
/// cell, so the first cell is not counted.
pub fn path_cost(grid: &Grid, path: &[Point]) -> i32 {
    path.iter()
        .skip(1)
        .filter_map(|&p| grid.cost(p).ok())
        .sum()
}

/// Summary line for a search result.
pub fn summarize(algorithm: Algorithm, grid: &Grid, end: Point, path: &[Point]) -> String {
    if path.is_empty() {
        return NO_PATH.to_string();
    }
    let mut msg = format!(
        "We've reached the end at {end}! Path length: {} cells.",
        path.len()
    );
    if algorithm.is_weighted() {
        msg.push_str(&format!(" Total cost: {}.", path_cost(grid, path)));
    }
    msg
}

impl SearchOutcome {
    /// The reconstructed path, empty if the goal was not reached.
    pub fn path(&self) -> Vec<Point> {
        if !self.found {
            return Vec::new();
        }
        reconstruct(&self.state.predecessor, self.start, self.goal)
    }
}
