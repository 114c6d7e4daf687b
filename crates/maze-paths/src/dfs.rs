use crate::frontier::{Frontier, LifoFrontier};
use crate::search::{Edge, SearchState, Strategy};

/// Depth-first search.
///
/// A cell may be pushed several times before it is expanded; the most
/// recent push wins, which is what makes the search go deep. Its
/// predecessor is overwritten on each push until the cell is expanded.
/// Entries popped after their cell was expanded are stale and skipped by
/// the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

impl Strategy for Dfs {
    fn frontier(&self) -> Box<dyn Frontier> {
        Box::new(LifoFrontier::default())
    }

    fn relax(&self, state: &mut SearchState, frontier: &mut dyn Frontier, edge: Edge) {
        let depth = state.g(edge.from) + 1;
        state.discover(edge.to, edge.from, depth);
        frontier.push(edge.to, depth);
    }
}

#[cfg(test)]
mod tests {
    use maze_core::{Grid, Point};

    use crate::{Algorithm, Search};

    #[test]
    fn follows_last_pushed_neighbor() {
        // Neighbors are pushed up, right, down, left, so `down` is popped
        // first and the search runs down the left column.
        let g = Grid::new(3, 3);
        let mut s = Search::new(&g, Algorithm::Dfs, g.start(), g.end());
        let mut order = Vec::new();
        while let Some(step) = s.step() {
            if step.expanded {
                order.push(step.cell);
            }
        }
        assert_eq!(&order[..3], &[Point::new(0, 0), Point::new(0, 1), Point::new(0, 2)]);
    }

    #[test]
    fn predecessor_is_overwritten_before_expansion() {
        let g = Grid::new(3, 3);
        let mut s = Search::new(&g, Algorithm::Dfs, g.start(), g.end());
        // Expand (0,0): pushes (1,0) then (0,1).
        s.step();
        assert_eq!(s.state().predecessor[&Point::new(1, 0)], Point::new(0, 0));
        // Expand (0,1): pushes (1,1) and (0,2), not (1,0).
        s.step();
        assert_eq!(s.state().predecessor[&Point::new(1, 1)], Point::new(0, 1));
        // Expand (0,2): pushes (1,2). Expand (1,2): pushes (1,1) again.
        s.step();
        s.step();
        assert_eq!(s.state().predecessor[&Point::new(1, 1)], Point::new(1, 2));
    }
}
