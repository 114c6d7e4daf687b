//! **maze-core**: the maze grid model.
//!
//! This crate provides the foundational types shared by the generator, the
//! search engine and the service: geometry primitives, maze cells, the
//! [`Grid`] itself, the fixed size classes and the text snapshot renderer.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod render;
pub mod size;

pub use cell::{Cell, Role};
pub use geom::{ParsePointError, Point, Range};
pub use grid::{Grid, GridError, ParseGridError};
pub use render::render;
pub use size::{ParseSizeError, SizeClass};
