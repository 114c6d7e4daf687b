use maze_core::{Grid, Point};

use crate::distance::manhattan;

/// Minimal pathfinding interface: neighbour enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

// A maze moves in four directions and every entered cell costs at least 1,
// so the Manhattan distance never overestimates.

impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(Grid::neighbors(self, p));
    }
}

impl WeightedPather for Grid {
    fn cost(&self, _from: Point, to: Point) -> i32 {
        match Grid::cost(self, to) {
            Ok(cost) => cost,
            Err(err) => unreachable!("neighbor {to} is not a passable cell: {err}"),
        }
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
