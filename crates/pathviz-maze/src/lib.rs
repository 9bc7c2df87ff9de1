//! Board generators for pathviz grids.
//!
//! All generators hang off [`MazeGen`], which owns the random source:
//!
//! - **Recursive division** ([`MazeGen::recursive_division`]): a framed maze
//!   in which the finish is always reachable from the start.
//! - **Random walls** ([`MazeGen::random_walls`]): independent coin flips per
//!   node.
//! - **Weighted terrain** ([`MazeGen::random_weights`]): scattered costly
//!   nodes for the weighted searches.
//!
//! ```
//! use pathviz_core::Grid;
//! use pathviz_maze::MazeGen;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut grid = Grid::new(30, 60).unwrap();
//! let mut mg = MazeGen::new(StdRng::seed_from_u64(1));
//! mg.recursive_division(&mut grid).unwrap();
//! assert!(!grid.is_wall(grid.start()));
//! ```

mod config;
mod division;
mod error;
mod mazegen;
mod scatter;

pub use config::{DEFAULT_WALL_DENSITY, DEFAULT_WEIGHT_PROBABILITY, DEFAULT_WEIGHTS, MazeConfig};
pub use error::MazeError;
pub use mazegen::MazeGen;
