//! **pathviz-core**: the grid model shared by the pathviz search and maze
//! crates.
//!
//! A [`Grid`] is a rectangular, row-major array of [`Node`]s with exactly one
//! start and exactly one finish. Nodes hold their role flags and the cost of
//! entering them; search bookkeeping lives in the search crate, never here.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod node;

pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Coord, Range};
pub use grid::Grid;
pub use node::{DEFAULT_WEIGHT, HEAVY_WEIGHT, Node};
