use crate::dijkstra::improves;
use crate::frontier::{Frontier, PriorityFrontier};
use crate::search::{Edge, SearchState, Strategy};

/// A* search with the Manhattan heuristic supplied by the pather.
///
/// Relaxation is the same as [`Dijkstra`](crate::Dijkstra); only the frontier
/// priority adds the estimate to the goal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl Strategy for AStar {
    fn frontier(&self) -> Box<dyn Frontier> {
        Box::new(PriorityFrontier::default())
    }

    fn relax(&self, state: &mut SearchState, frontier: &mut dyn Frontier, edge: Edge) {
        let g = state.g(edge.from) + edge.cost;
        if improves(state, edge, g) {
            state.discover(edge.to, edge.from, g);
            frontier.push(edge.to, g + edge.estimate);
        }
    }
}
