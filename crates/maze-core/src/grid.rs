//! The [`Grid`] type: a 2D maze of [`Cell`]s with one start and one end.
//!
//! A grid owns its cells in a flat row-major buffer. The generator fills it
//! through the mutators below; once handed to a search it is only read.
//! Every grid keeps the role invariant: exactly one [`Role::Start`] cell and
//! exactly one [`Role::End`] cell, at different positions, both passable.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::cell::{Cell, MAX_COST, MIN_COST, Role};
use crate::geom::{Point, Range};
use crate::render::render;

/// Errors from grid lookups and endpoint placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside the grid.
    OutOfBounds(Point),
    /// The cell is an obstruction and has no movement cost.
    Obstructed(Point),
    /// Start and end were asked to share a cell.
    SameEndpoints(Point),
    /// The grid does not hold exactly one start and one end.
    Roles { starts: usize, ends: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "coordinate {p} is outside the grid"),
            Self::Obstructed(p) => write!(f, "cell {p} is an obstruction"),
            Self::SameEndpoints(p) => write!(f, "start and end are both {p}"),
            Self::Roles { starts, ends } => write!(
                f,
                "grid must have exactly one start and one end (found {starts} starts, {ends} ends)"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A 2D grid of maze [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl Grid {
    /// Create an open grid with every cell at cost 1, the start in the
    /// top-left corner and the end in the bottom-right corner.
    ///
    /// # Panics
    ///
    /// Panics if the grid has fewer than two cells.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        assert!(bounds.len() >= 2, "a maze needs at least two cells");
        let mut grid = Self {
            cells: vec![Cell::default(); bounds.len()],
            bounds,
            start: Point::ZERO,
            end: Point::new(bounds.width() - 1, bounds.height() - 1),
        };
        grid.mark_roles();
        grid
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds.contains(p) {
            Some((p.y * self.bounds.width() + p.x) as usize)
        } else {
            None
        }
    }

    fn mark_roles(&mut self) {
        for (p, role) in [(self.start, Role::Start), (self.end, Role::End)] {
            if let Some(i) = self.index(p) {
                self.cells[i] = Cell::open(MIN_COST).with_role(role);
            }
        }
    }

    /// Returns the bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least two cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The end cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Get the cell at a point.
    pub fn at(&self, p: Point) -> Result<Cell, GridError> {
        self.index(p)
            .map(|i| self.cells[i])
            .ok_or(GridError::OutOfBounds(p))
    }

    /// Cost of entering the cell at `p`.
    pub fn cost(&self, p: Point) -> Result<i32, GridError> {
        let c = self.at(p)?;
        if c.obstruction {
            return Err(GridError::Obstructed(p));
        }
        Ok(i32::from(c.cost))
    }

    /// Whether `p` is inside the grid and not an obstruction.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.cells[i].is_passable())
    }

    /// Passable cardinal neighbours of `p`, in up, right, down, left order.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.is_passable(n))
    }

    /// Turn the cell at `p` into an obstruction or back into an open cell
    /// of cost 1. No-op outside the grid and on the two endpoints.
    pub fn set_obstruction(&mut self, p: Point, obstruction: bool) {
        let Some(i) = self.index(p) else {
            return;
        };
        let c = &mut self.cells[i];
        if c.role != Role::Normal {
            return;
        }
        *c = if obstruction {
            Cell::wall()
        } else {
            Cell::open(MIN_COST)
        };
    }

    /// Set the entry cost of the cell at `p`. No-op outside the grid and on
    /// obstructions.
    ///
    /// # Panics
    ///
    /// Panics if `cost` is outside `1..=9`.
    pub fn set_cost(&mut self, p: Point, cost: u8) {
        assert!(
            (MIN_COST..=MAX_COST).contains(&cost),
            "cell cost {cost} outside {MIN_COST}..={MAX_COST}"
        );
        if let Some(i) = self.index(p) {
            let c = &mut self.cells[i];
            if !c.obstruction {
                c.cost = cost;
            }
        }
    }

    /// Move the start and end roles onto `start` and `end`.
    ///
    /// The previous holders become normal open cells. The new endpoint cells
    /// are opened if they were obstructions and get cost 1.
    pub fn set_endpoints(&mut self, start: Point, end: Point) -> Result<(), GridError> {
        for p in [start, end] {
            if !self.contains(p) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        if start == end {
            return Err(GridError::SameEndpoints(start));
        }
        for p in [self.start, self.end] {
            if let Some(i) = self.index(p) {
                self.cells[i].role = Role::Normal;
            }
        }
        self.start = start;
        self.end = end;
        self.mark_roles();
        Ok(())
    }

    /// Check the role invariant by scanning every cell.
    pub fn validate(&self) -> Result<(), GridError> {
        let starts = self.count_fn(|_, c| c.role == Role::Start);
        let ends = self.count_fn(|_, c| c.role == Role::End);
        if starts != 1 || ends != 1 {
            return Err(GridError::Roles { starts, ends });
        }
        if self.start == self.end {
            return Err(GridError::SameEndpoints(self.start));
        }
        for p in [self.start, self.end] {
            if !self.is_passable(p) {
                return Err(GridError::Obstructed(p));
            }
        }
        Ok(())
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, Cell) -> bool) -> usize {
        self.iter().filter(|&(p, c)| f(p, c)).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &HashSet::new(), None))
    }
}

// ---------------------------------------------------------------------------
// Text layouts
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing a grid from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// No rows, or a single cell.
    Empty,
    /// Rows have inconsistent widths.
    InconsistentSize(String),
    /// A character not in the allowed set was found.
    InvalidRune {
        ch: char,
        pos: Point,
        content: String,
    },
    /// The layout has no cell with this role.
    MissingRole(Role),
    /// A second cell claims a role that is already taken.
    DuplicateRole(Role, Point),
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: layout needs at least two cells"),
            Self::InconsistentSize(s) => write!(f, "grid: inconsistent size:\n{s}"),
            Self::InvalidRune { ch, pos, content } => write!(
                f,
                "grid contains invalid rune \u{201c}{ch}\u{201d} at ({}, {}):\n{content}",
                pos.x, pos.y
            ),
            Self::MissingRole(role) => write!(f, "grid: no {role:?} cell"),
            Self::DuplicateRole(role, p) => write!(f, "grid: second {role:?} cell at {p}"),
        }
    }
}

impl std::error::Error for ParseGridError {}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parse a layout: `#` obstruction, `S` start, `E` end, `1`-`9` cost,
    /// `.` cost 1. Whitespace inside a row is ignored; blank lines are
    /// skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|r| !r.is_empty())
            .collect();
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        if width * height < 2 {
            return Err(ParseGridError::Empty);
        }
        if rows.iter().any(|r| r.len() as i32 != width) {
            return Err(ParseGridError::InconsistentSize(s.to_string()));
        }

        let mut grid = Grid::new(width, height);
        let mut start = None;
        let mut end = None;
        for (y, row) in rows.iter().enumerate() {
            for (x, &ch) in row.iter().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '#' => grid.set_obstruction(p, true),
                    '.' => grid.set_obstruction(p, false),
                    '1'..='9' => {
                        grid.set_obstruction(p, false);
                        grid.set_cost(p, ch as u8 - b'0');
                    }
                    'S' | 'E' => {
                        let (slot, role) = if ch == 'S' {
                            (&mut start, Role::Start)
                        } else {
                            (&mut end, Role::End)
                        };
                        if slot.is_some() {
                            return Err(ParseGridError::DuplicateRole(role, p));
                        }
                        *slot = Some(p);
                    }
                    _ => {
                        return Err(ParseGridError::InvalidRune {
                            ch,
                            pos: p,
                            content: s.to_string(),
                        });
                    }
                }
            }
        }

        let start = start.ok_or(ParseGridError::MissingRole(Role::Start))?;
        let end = end.ok_or(ParseGridError::MissingRole(Role::End))?;
        // The default corner endpoints may have been overwritten by the
        // layout above; moving the roles re-establishes them.
        let (old_start, old_end) = (grid.start, grid.end);
        grid.start = start;
        grid.end = end;
        for p in [old_start, old_end] {
            if p != start && p != end {
                let Some(i) = grid.index(p) else {
                    continue;
                };
                grid.cells[i] = match rows[p.y as usize][p.x as usize] {
                    '#' => Cell::wall(),
                    ch @ '1'..='9' => Cell::open(ch as u8 - b'0'),
                    _ => Cell::open(MIN_COST),
                };
            }
        }
        grid.mark_roles();
        Ok(grid)
    }
}
