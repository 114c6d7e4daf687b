//! The step-wise search engine.
//!
//! [`Search`] owns the frontier and the [`SearchState`] of one run. Each call
//! to [`Search::step`] dequeues exactly one cell, so a caller that takes a
//! snapshot after every step gets one frame per dequeue. The four algorithms
//! differ only in their [`Strategy`]: which frontier they use and how they
//! relax an edge.

use std::collections::{HashMap, HashSet};

use maze_core::Point;

use crate::algorithm::Algorithm;
use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::frontier::Frontier;
use crate::traits::AstarPather;

/// Transient bookkeeping of one search run.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Cells that have been dequeued and expanded.
    pub visited: HashSet<Point>,
    /// Expansion order (each visited cell once).
    pub expanded: Vec<Point>,
    /// For each discovered cell, the cell it was reached from.
    pub predecessor: HashMap<Point, Point>,
    /// Best known cost from the start. Unweighted strategies store the
    /// number of steps instead.
    pub cost_so_far: HashMap<Point, i32>,
    /// Number of frontier pops, stale entries included.
    pub dequeued: usize,
}

impl SearchState {
    /// Known cost of `p`, or 0 for an undiscovered cell.
    #[inline]
    pub fn g(&self, p: Point) -> i32 {
        self.cost_so_far.get(&p).copied().unwrap_or(0)
    }

    /// Record that `to` is reached from `from` with cost `g`.
    #[inline]
    pub fn discover(&mut self, to: Point, from: Point, g: i32) {
        self.predecessor.insert(to, from);
        self.cost_so_far.insert(to, g);
    }
}

/// An edge offered to a [`Strategy`] while expanding `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
    /// Cost of entering `to`.
    pub cost: i32,
    /// Heuristic distance from `to` to the goal.
    pub estimate: i32,
}

/// Frontier discipline and relaxation rule of one algorithm.
pub trait Strategy {
    /// A fresh, empty frontier.
    fn frontier(&self) -> Box<dyn Frontier>;

    /// Offer an edge towards a cell that has not been expanded yet. The
    /// strategy decides whether to record it and push it.
    fn relax(&self, state: &mut SearchState, frontier: &mut dyn Frontier, edge: Edge);
}

impl Algorithm {
    /// The strategy implementing this algorithm.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Algorithm::Bfs => &Bfs,
            Algorithm::Dfs => &Dfs,
            Algorithm::Dijkstra => &Dijkstra,
            Algorithm::AStar => &AStar,
        }
    }
}

/// Outcome of a single [`Search::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The dequeued cell.
    pub cell: Point,
    /// False when the cell had already been expanded (a stale entry).
    pub expanded: bool,
    /// True when the dequeued cell is the goal; the search is over.
    pub reached_goal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Running,
    Found,
    Exhausted,
}

/// Final result of a search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub start: Point,
    pub goal: Point,
    pub found: bool,
    pub state: SearchState,
}

/// One search run over a pather, advanced one dequeue at a time.
pub struct Search<'a, P: AstarPather> {
    pather: &'a P,
    algorithm: Algorithm,
    strategy: &'static dyn Strategy,
    start: Point,
    goal: Point,
    frontier: Box<dyn Frontier>,
    state: SearchState,
    status: Status,
    nbuf: Vec<Point>,
}

impl<'a, P: AstarPather> Search<'a, P> {
    /// Start a search from `start` towards `goal`.
    pub fn new(pather: &'a P, algorithm: Algorithm, start: Point, goal: Point) -> Self {
        let strategy = algorithm.strategy();
        let mut frontier = strategy.frontier();
        let mut state = SearchState::default();
        state.cost_so_far.insert(start, 0);
        frontier.push(start, pather.estimate(start, goal));
        Self {
            pather,
            algorithm,
            strategy,
            start,
            goal,
            frontier,
            state,
            status: Status::Running,
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Dequeue one cell and expand it. Returns `None` once the search is
    /// over, either because the goal was reached by a previous step or
    /// because the frontier is empty.
    pub fn step(&mut self) -> Option<Step> {
        if self.status != Status::Running {
            return None;
        }
        let Some(cell) = self.frontier.pop() else {
            self.status = Status::Exhausted;
            return None;
        };
        self.state.dequeued += 1;

        // Skip stale entries.
        if !self.state.visited.insert(cell) {
            return Some(Step {
                cell,
                expanded: false,
                reached_goal: false,
            });
        }
        self.state.expanded.push(cell);

        if cell == self.goal {
            self.status = Status::Found;
            return Some(Step {
                cell,
                expanded: true,
                reached_goal: true,
            });
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(cell, &mut nbuf);

        for &next in nbuf.iter() {
            if self.state.visited.contains(&next) {
                continue;
            }
            let edge = Edge {
                from: cell,
                to: next,
                cost: self.pather.cost(cell, next),
                estimate: self.pather.estimate(next, self.goal),
            };
            self.strategy
                .relax(&mut self.state, self.frontier.as_mut(), edge);
        }

        self.nbuf = nbuf;
        Some(Step {
            cell,
            expanded: true,
            reached_goal: false,
        })
    }

    /// Step until the search is over.
    pub fn run(&mut self) {
        while self.step().is_some() {}
    }

    /// Whether the search has ended.
    pub fn is_done(&self) -> bool {
        self.status != Status::Running
    }

    /// Whether the goal has been reached.
    pub fn found(&self) -> bool {
        self.status == Status::Found
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current bookkeeping, as of the last step.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Consume the search and return its outcome. Unfinished searches report
    /// `found == false`.
    pub fn finish(self) -> SearchOutcome {
        SearchOutcome {
            algorithm: self.algorithm,
            start: self.start,
            goal: self.goal,
            found: self.status == Status::Found,
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_core::Grid;

    fn run(grid: &Grid, algorithm: Algorithm) -> SearchOutcome {
        let mut s = Search::new(grid, algorithm, grid.start(), grid.end());
        s.run();
        s.finish()
    }

    #[test]
    fn every_algorithm_reaches_goal_on_open_grid() {
        let g = Grid::new(7, 7);
        for a in Algorithm::ALL {
            let out = run(&g, a);
            assert!(out.found, "{a} failed");
            assert!(out.state.visited.contains(&g.end()));
            assert_eq!(out.state.expanded.len(), out.state.visited.len());
            assert!(out.state.dequeued >= out.state.visited.len());
        }
    }

    fn stale(out: &SearchOutcome) -> usize {
        out.state.dequeued - out.state.visited.len()
    }

    #[test]
    fn exhausted_frontier_reports_failure() {
        let g: Grid = "S.#.\n..#E".parse().unwrap();
        for a in Algorithm::ALL {
            let out = run(&g, a);
            assert!(!out.found);
            assert_eq!(out.state.visited.len(), 4);
            assert!(!out.state.predecessor.contains_key(&g.end()));
        }
    }

    #[test]
    fn step_returns_none_after_goal() {
        let g: Grid = "SE".parse().unwrap();
        let mut s = Search::new(&g, Algorithm::Bfs, g.start(), g.end());
        let first = s.step().unwrap();
        assert_eq!(first.cell, Point::new(0, 0));
        assert!(!first.reached_goal);
        let second = s.step().unwrap();
        assert!(second.reached_goal);
        assert!(s.is_done());
        assert!(s.found());
        assert_eq!(s.step(), None);
        assert_eq!(s.state().dequeued, 2);
    }

    #[test]
    fn bfs_dequeues_each_cell_once() {
        let g = Grid::new(7, 7);
        let out = run(&g, Algorithm::Bfs);
        assert_eq!(stale(&out), 0);
    }

    #[test]
    fn dfs_can_dequeue_stale_entries() {
        // Stale pops count as dequeues but never as expansions.
        let g = Grid::new(5, 5);
        let mut s = Search::new(&g, Algorithm::Dfs, g.start(), g.end());
        let mut stale_steps = 0;
        while let Some(step) = s.step() {
            if !step.expanded {
                stale_steps += 1;
            }
        }
        let out = s.finish();
        assert!(out.found);
        assert_eq!(stale(&out), stale_steps);
    }

    #[test]
    fn dijkstra_prefers_cheap_detour() {
        // Straight through costs 9 + 1; the detour costs 4.
        let g: Grid = "S9E\n111".parse().unwrap();
        let out = run(&g, Algorithm::Dijkstra);
        assert!(out.found);
        assert_eq!(out.state.cost_so_far[&g.end()], 4);
        assert_eq!(out.state.predecessor[&g.end()], Point::new(2, 1));
    }

    #[test]
    fn astar_expands_no_more_than_dijkstra() {
        let g = Grid::new(15, 15);
        let d = run(&g, Algorithm::Dijkstra);
        let a = run(&g, Algorithm::AStar);
        assert_eq!(d.state.cost_so_far[&g.end()], a.state.cost_so_far[&g.end()]);
        assert!(a.state.visited.len() <= d.state.visited.len());
    }
}
