use crate::frontier::{FifoFrontier, Frontier};
use crate::search::{Edge, SearchState, Strategy};

/// Breadth-first search.
///
/// Cells are marked as discovered when they are enqueued, so each cell
/// enters the queue at most once and every dequeue expands a new cell.
/// Cell costs are ignored: the returned path has the fewest cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl Strategy for Bfs {
    fn frontier(&self) -> Box<dyn Frontier> {
        Box::new(FifoFrontier::default())
    }

    fn relax(&self, state: &mut SearchState, frontier: &mut dyn Frontier, edge: Edge) {
        if state.cost_so_far.contains_key(&edge.to) {
            return;
        }
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
    fn depth_is_step_count() {
        let g = Grid::new(4, 3);
        let mut s = Search::new(&g, Algorithm::Bfs, g.start(), g.end());
        s.run();
        let out = s.finish();
        assert!(out.found);
        assert_eq!(out.state.cost_so_far[&Point::new(3, 2)], 5);
        assert_eq!(out.state.cost_so_far[&Point::new(1, 1)], 2);
    }

    #[test]
    fn ignores_cell_costs() {
        // Through the 9 is two steps; around it is four.
        let g: Grid = "S9E\n111".parse().unwrap();
        let mut s = Search::new(&g, Algorithm::Bfs, g.start(), g.end());
        s.run();
        let out = s.finish();
        assert_eq!(out.state.predecessor[&g.end()], Point::new(1, 0));
    }
}
