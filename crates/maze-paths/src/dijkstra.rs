use crate::frontier::{Frontier, PriorityFrontier};
use crate::search::{Edge, SearchState, Strategy};

/// Uniform-cost search.
///
/// The cost of a path is the sum of the costs of the cells it enters. A
/// neighbor is recorded and pushed only on a strict improvement, so among
/// equal-cost routes the first one found is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl Strategy for Dijkstra {
    fn frontier(&self) -> Box<dyn Frontier> {
        Box::new(PriorityFrontier::default())
    }

    fn relax(&self, state: &mut SearchState, frontier: &mut dyn Frontier, edge: Edge) {
        let g = state.g(edge.from) + edge.cost;
        if improves(state, edge, g) {
            state.discover(edge.to, edge.from, g);
            frontier.push(edge.to, g);
        }
    }
}

/// Whether reaching `edge.to` with cost `g` beats what is known.
pub(crate) fn improves(state: &SearchState, edge: Edge, g: i32) -> bool {
    state.cost_so_far.get(&edge.to).is_none_or(|&known| g < known)
}

#[cfg(test)]
mod tests {
    use maze_core::{Grid, Point};

    use crate::{Algorithm, Search};

    #[test]
    fn cost_counts_entered_cells() {
        let g: Grid = "S23\n45E".parse().unwrap();
        let mut s = Search::new(&g, Algorithm::Dijkstra, g.start(), g.end());
        s.run();
        let out = s.finish();
        // S -> 2 -> 3 -> E costs 2 + 3 + 1; S -> 2 -> 5 -> E costs 2 + 5 + 1.
        assert_eq!(out.state.cost_so_far[&g.end()], 6);
        assert_eq!(out.state.predecessor[&g.end()], Point::new(2, 0));
    }

    #[test]
    fn keeps_first_route_on_ties() {
        let g = Grid::new(2, 2);
        let mut s = Search::new(&g, Algorithm::Dijkstra, g.start(), g.end());
        s.run();
        let out = s.finish();
        // (1,0) is pushed before (0,1) and reaches the end first.
        assert_eq!(out.state.predecessor[&g.end()], Point::new(1, 0));
    }
}
