//! Randomized maze generators.
//!
//! Provides four layouts (see [`Layout`]):
//! - **Scatter**: random costs with obstructions dropped at a fixed density.
//! - **Carved**: corridors carved out of solid wall by an iterative
//!   randomized backtracker over the odd lattice.
//! - **Weighted**: the carved maze with weighted corridor segments and a
//!   cost-1 spine.
//! - **Open**: no obstructions at all, random costs.
//!
//! Every generator leaves exactly one start and one end, distinct and open.
//! Reachability is not guaranteed for `Scatter`; callers retry.

use std::collections::HashSet;

use maze_core::{Grid, GridError, Point, SizeClass};
use rand::seq::SliceRandom;
use rand::{Rng, RngExt};

use crate::config::{GenConfig, GenConfigError, Layout};

/// Lattice steps used by the backtracker: two cells at a time, so that
/// the cell in between becomes the corridor joining them.
const LATTICE_STEPS: [(i32, i32); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

/// Maze generator owning its random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    config: GenConfig,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default [`GenConfig`].
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: GenConfig::default(),
        }
    }

    /// Create a generator with a custom configuration.
    pub fn with_config(config: GenConfig, rng: R) -> Result<Self, GenConfigError> {
        config.validate()?;
        Ok(Self { rng, config })
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Generate a maze of the given size and layout, with endpoints chosen
    /// by the layout.
    pub fn generate(&mut self, size: SizeClass, layout: Layout) -> Grid {
        let grid = match layout {
            Layout::Scatter => self.scatter(size),
            Layout::Carved => self.carved(size),
            Layout::Weighted => self.weighted(size),
            Layout::Open => self.open(size),
        };
        log::debug!(
            "generated {size} {layout} maze: start {}, end {}, {} obstructions",
            grid.start(),
            grid.end(),
            grid.count_fn(|_, c| c.obstruction)
        );
        grid
    }

    /// Generate a maze whose start and end are the given cells.
    ///
    /// `Scatter` keeps obstructions off the two cells. The other layouts are
    /// generated as usual and the roles are then moved onto the given cells,
    /// opening them if needed. `Carved` and `Weighted` also get a corridor
    /// from each endpoint to the lattice, so the end stays reachable.
    pub fn generate_with_endpoints(
        &mut self,
        size: SizeClass,
        layout: Layout,
        start: Point,
        end: Point,
    ) -> Result<Grid, GridError> {
        if layout == Layout::Scatter {
            return self.scatter_with_endpoints(size, start, end);
        }
        let mut grid = self.generate(size, layout);
        grid.set_endpoints(start, end)?;
        if matches!(layout, Layout::Carved | Layout::Weighted) {
            let dims = grid.size();
            connect(&mut grid, start, dims);
            connect(&mut grid, end, dims);
        }
        Ok(grid)
    }

    /// Scattered obstructions with random start and end cells.
    pub fn scatter(&mut self, size: SizeClass) -> Grid {
        let dims = size.dims();
        let (start, end) = self.random_endpoints(dims);
        let mut grid = Grid::new(dims.x, dims.y);
        place_endpoints(&mut grid, start, end);
        self.scatter_obstructions(&mut grid);
        grid
    }

    /// Scattered obstructions around caller-supplied endpoints.
    pub fn scatter_with_endpoints(
        &mut self,
        size: SizeClass,
        start: Point,
        end: Point,
    ) -> Result<Grid, GridError> {
        let dims = size.dims();
        let mut grid = Grid::new(dims.x, dims.y);
        grid.set_endpoints(start, end)?;
        self.scatter_obstructions(&mut grid);
        Ok(grid)
    }

    /// No obstructions; every cell but the endpoints gets a random cost.
    pub fn open(&mut self, size: SizeClass) -> Grid {
        let dims = size.dims();
        let (start, end) = self.random_endpoints(dims);
        let mut grid = Grid::new(dims.x, dims.y);
        place_endpoints(&mut grid, start, end);
        self.randomize_costs(&mut grid);
        grid
    }

    /// Cost-1 corridors carved out of solid wall.
    pub fn carved(&mut self, size: SizeClass) -> Grid {
        let dims = size.dims();
        let start = Point::new(self.rng.random_range(0..dims.x), 0);
        let end = Point::new(self.rng.random_range(0..dims.x), dims.y - 1);
        let mut grid = walled_with_endpoints(dims, start, end);

        let origin = lattice_cell(Point::new(start.x, 1), dims);
        open_cell(&mut grid, origin, 1);
        self.carve(&mut grid, origin, |_| 1);
        connect(&mut grid, start, dims);
        connect(&mut grid, end, dims);
        grid
    }

    /// Carved corridors where every segment has a random weight in `1..=5`,
    /// plus a meandering cost-1 spine from the start down to the last
    /// interior row. Start and end sit on odd columns.
    pub fn weighted(&mut self, size: SizeClass) -> Grid {
        let dims = size.dims();
        let start = Point::new(self.random_odd(dims.x), 0);
        let end = Point::new(self.random_odd(dims.x), dims.y - 1);
        let mut grid = walled_with_endpoints(dims, start, end);

        // Spine: down, right or left, never leaving the interior.
        let mut p = Point::new(start.x, 1);
        open_cell(&mut grid, p, 1);
        while p.y < dims.y - 2 {
            let next = match self.rng.random_range(0..3u32) {
                0 => p.shift(0, 1),
                1 => p.shift(1, 0),
                _ => p.shift(-1, 0),
            };
            if is_interior(next, dims) {
                open_cell(&mut grid, next, 1);
                p = next;
            }
        }

        let origin = lattice_cell(Point::new(start.x, 1), dims);
        self.carve(&mut grid, origin, |rng| rng.random_range(1..=5u8));
        connect(&mut grid, start, dims);
        connect(&mut grid, end, dims);
        grid
    }

    /// Iterative randomized backtracker over the odd lattice. Each carved
    /// segment (the corridor cell and the lattice cell it leads to) gets the
    /// cost returned by `weight`. Every lattice cell is reached; cells that
    /// are already open keep their cost.
    fn carve(&mut self, grid: &mut Grid, origin: Point, mut weight: impl FnMut(&mut R) -> u8) {
        let dims = grid.size();
        let mut steps = LATTICE_STEPS;
        let mut seen = HashSet::from([origin]);
        let mut stack = vec![origin];
        while let Some(&cur) = stack.last() {
            steps.shuffle(&mut self.rng);
            let next = steps.iter().find_map(|&(dx, dy)| {
                let n = cur.shift(dx, dy);
                (is_interior(n, dims) && !seen.contains(&n))
                    .then_some((cur.shift(dx / 2, dy / 2), n))
            });
            match next {
                Some((between, n)) => {
                    seen.insert(n);
                    let w = weight(&mut self.rng);
                    open_cell(grid, between, w);
                    open_cell(grid, n, w);
                    stack.push(n);
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    /// Drop obstructions on a random subset of the normal cells, then give
    /// the remaining normal cells random costs.
    fn scatter_obstructions(&mut self, grid: &mut Grid) {
        let (start, end) = (grid.start(), grid.end());
        let mut candidates: Vec<Point> = grid
            .bounds()
            .iter()
            .filter(|&p| p != start && p != end)
            .collect();
        let target = (grid.len() as f64 * self.config.obstruction_density).round() as usize;
        let target = target.min(candidates.len());
        candidates.shuffle(&mut self.rng);
        for &p in &candidates[..target] {
            grid.set_obstruction(p, true);
        }
        self.randomize_costs(grid);
    }

    fn randomize_costs(&mut self, grid: &mut Grid) {
        let (start, end) = (grid.start(), grid.end());
        for p in grid.bounds() {
            if p != start && p != end {
                let cost = self.random_cost();
                grid.set_cost(p, cost);
            }
        }
    }

    fn random_cost(&mut self) -> u8 {
        self.rng
            .random_range(self.config.cost_min..=self.config.cost_max)
    }

    /// Two distinct random cells.
    fn random_endpoints(&mut self, dims: Point) -> (Point, Point) {
        let n = dims.x * dims.y;
        let s = self.rng.random_range(0..n);
        let mut e = self.rng.random_range(0..n - 1);
        if e >= s {
            e += 1;
        }
        let at = |i: i32| Point::new(i % dims.x, i / dims.x);
        (at(s), at(e))
    }

    /// A random odd column strictly inside a row of width `w`.
    fn random_odd(&mut self, w: i32) -> i32 {
        let count = ((w - 1) / 2).max(1);
        1 + 2 * self.rng.random_range(0..count)
    }
}

/// Move the endpoint roles of a freshly built grid. The endpoints are
/// always distinct in-bounds cells here.
fn place_endpoints(grid: &mut Grid, start: Point, end: Point) {
    if let Err(err) = grid.set_endpoints(start, end) {
        unreachable!("generated endpoints rejected: {err}");
    }
}

/// A grid of walls with open endpoints at `start` and `end`.
fn walled_with_endpoints(dims: Point, start: Point, end: Point) -> Grid {
    let mut grid = Grid::new(dims.x, dims.y);
    place_endpoints(&mut grid, start, end);
    for p in grid.bounds() {
        grid.set_obstruction(p, true);
    }
    grid
}

fn is_interior(p: Point, dims: Point) -> bool {
    p.x > 0 && p.y > 0 && p.x < dims.x - 1 && p.y < dims.y - 1
}

/// The odd-lattice cell nearest to `p`.
fn lattice_cell(p: Point, dims: Point) -> Point {
    let snap = |v: i32, len: i32| {
        let v = v.clamp(1, (len - 2).max(1));
        if v % 2 == 0 { v - 1 } else { v }
    };
    Point::new(snap(p.x, dims.x), snap(p.y, dims.y))
}

/// Open the cell at `p` with the given cost if it is an obstruction.
fn open_cell(grid: &mut Grid, p: Point, cost: u8) {
    if grid.at(p).is_ok_and(|c| c.obstruction) {
        grid.set_obstruction(p, false);
        grid.set_cost(p, cost);
    }
}

/// Open an L-shaped cost-1 corridor from `from` to its nearest lattice
/// cell: vertically first, then horizontally.
fn connect(grid: &mut Grid, from: Point, dims: Point) {
    let target = lattice_cell(from, dims);
    let mut p = from;
    while p.y != target.y {
        p = p.shift(0, (target.y - p.y).signum());
        open_cell(grid, p, 1);
    }
    while p.x != target.x {
        p = p.shift((target.x - p.x).signum(), 0);
        open_cell(grid, p, 1);
    }
}
