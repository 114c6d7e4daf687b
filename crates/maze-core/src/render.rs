//! Text snapshots of a maze.
//!
//! A snapshot is one character per cell, rows joined by `\n`:
//!
//! | char | meaning |
//! |---|---|
//! | `#` | obstruction |
//! | `S` / `E` | start / end (never overwritten) |
//! | `*` | cell on the final path |
//! | `X` | visited cell |
//! | `1`-`9` | untouched cell, showing its entry cost |

use std::collections::HashSet;

use crate::cell::Role;
use crate::geom::Point;
use crate::grid::Grid;

pub const OBSTRUCTION: char = '#';
pub const START: char = 'S';
pub const END: char = 'E';
pub const PATH: char = '*';
pub const VISITED: char = 'X';

/// Render `grid` with the given visited cells and optional final path.
///
/// The output depends only on the arguments.
pub fn render(grid: &Grid, visited: &HashSet<Point>, path: Option<&HashSet<Point>>) -> String {
    let w = grid.width() as usize;
    let mut out = String::with_capacity((w + 1) * grid.height() as usize);
    for (p, c) in grid.iter() {
        if p.x == 0 && p.y > 0 {
            out.push('\n');
        }
        let ch = match c.role {
            Role::Start => START,
            Role::End => END,
            Role::Normal if c.obstruction => OBSTRUCTION,
            Role::Normal if path.is_some_and(|s| s.contains(&p)) => PATH,
            Role::Normal if visited.contains(&p) => VISITED,
            Role::Normal => char::from(b'0' + c.cost),
        };
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        "S12\n#93\n..E".parse().unwrap()
    }

    #[test]
    fn renders_costs_and_markers() {
        let g = grid();
        assert_eq!(render(&g, &HashSet::new(), None), "S12\n#93\n11E");
    }

    #[test]
    fn visited_and_path_overlay() {
        let g = grid();
        let visited: HashSet<_> = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(1, 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(render(&g, &visited, None), "SXX\n#X3\n11E");

        let path: HashSet<_> = [
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
            Point::new(1, 2),
            Point::new(2, 2),
        ]
        .into_iter()
        .collect();
        assert_eq!(render(&g, &visited, Some(&path)), "S*X\n#*3\n1*E");
    }

    #[test]
    fn rendering_is_idempotent() {
        let g = grid();
        let visited: HashSet<_> = [Point::new(1, 0)].into_iter().collect();
        let a = render(&g, &visited, None);
        let b = render(&g, &visited, None);
        assert_eq!(a, b);
    }

    #[test]
    fn frame_has_grid_shape() {
        let g = Grid::new(5, 3);
        let frame = render(&g, &HashSet::new(), None);
        let rows: Vec<_> = frame.split('\n').collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.chars().count() == 5));
    }
}
