//! Randomized maze generation.
//!
//! [`MazeGen`] builds a [`maze_core::Grid`] for a size class in one of the
//! [`Layout`] families. The random source is owned by the generator, so
//! tests can seed it and the service can hand it a thread-local one.

pub mod config;
pub mod mapgen;

pub use config::{GenConfig, GenConfigError, Layout, ParseLayoutError};
pub use mapgen::MazeGen;
