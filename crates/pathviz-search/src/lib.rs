//! Search algorithms over a weighted 4-connected grid.
//!
//! Six interchangeable strategies share one calling convention: each takes a
//! [`Grid`](pathviz_core::Grid) plus start and finish coordinates and returns
//! the order in which it finalized nodes.
//!
//! - **Breadth-first** ([`PathSearch::bfs`]): unweighted, shortest hop count
//! - **Depth-first** ([`PathSearch::dfs`]): traversal order only
//! - **Dijkstra** ([`PathSearch::dijkstra`]): minimal weighted cost
//! - **A\*** ([`PathSearch::astar`]): Manhattan-guided weighted search
//! - **Greedy best-first** ([`PathSearch::greedy_best_first`]): heuristic only
//! - **Bidirectional** ([`PathSearch::bidirectional`]): two meeting BFS frontiers
//!
//! Per-node bookkeeping lives in a [`PathSearch`] arena, never in the grid,
//! so one grid can be searched repeatedly by any algorithm. The route is
//! recovered with [`PathSearch::extract_path`]; [`run_search`] and
//! [`run_all`] bundle both steps with timing.
//!
//! ```
//! use pathviz_core::Grid;
//! use pathviz_search::{Algorithm, run_search};
//!
//! let grid = Grid::new(30, 60).unwrap();
//! let res = run_search(Algorithm::AStar, &grid);
//! assert_eq!(res.path.first(), Some(&grid.start()));
//! assert_eq!(res.path.last(), Some(&grid.finish()));
//! ```

mod algorithm;
mod astar;
mod bfs;
mod bidirectional;
mod dijkstra;
mod executor;
mod greedy;
mod neighbors;
mod path;
mod pathsearch;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use executor::{Outcome, SearchResult, run_all, run_search, run_search_between};
pub use neighbors::{CARDINAL, Neighbors};
pub use path::path_cost;
pub use pathsearch::{PathSearch, UNREACHABLE};
