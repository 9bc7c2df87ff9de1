use std::time::{Duration, Instant};

use pathviz_core::{Coord, Grid};

use crate::path::path_cost;
use crate::{Algorithm, PathSearch};

/// Visited order and route of one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Nodes in the order they were finalized.
    pub visited: Vec<Coord>,
    /// Start to finish, or empty when the finish is unreachable.
    pub path: Vec<Coord>,
}

impl Outcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// An [`Outcome`] with the statistics of the run that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub visited: Vec<Coord>,
    pub path: Vec<Coord>,
    /// Sum of the weights entered along `path`.
    pub cost: u64,
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Route length in steps, not counting the start node.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl PathSearch {
    /// Run `algorithm` and return its visited order only.
    pub fn visit_order(
        &mut self,
        algorithm: Algorithm,
        grid: &Grid,
        start: Coord,
        finish: Coord,
    ) -> Vec<Coord> {
        match algorithm {
            Algorithm::Bfs => self.bfs(grid, start, finish),
            Algorithm::Dfs => self.dfs(grid, start, finish),
            Algorithm::Dijkstra => self.dijkstra(grid, start, finish),
            Algorithm::AStar => self.astar(grid, start, finish),
            Algorithm::GreedyBestFirst => self.greedy_best_first(grid, start, finish),
            Algorithm::Bidirectional => self.bidirectional(grid, start, finish),
        }
    }

    /// Run `algorithm` and extract the route it found.
    pub fn run(&mut self, algorithm: Algorithm, grid: &Grid, start: Coord, finish: Coord) -> Outcome {
        let visited = self.visit_order(algorithm, grid, start, finish);
        let path = self.extract_path(grid, start, finish, &visited);
        Outcome { visited, path }
    }

    /// Timed run between arbitrary endpoints.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `finish` lies outside `grid`.
    pub fn search_between(
        &mut self,
        algorithm: Algorithm,
        grid: &Grid,
        start: Coord,
        finish: Coord,
    ) -> SearchResult {
        let t0 = Instant::now();
        let Outcome { visited, path } = self.run(algorithm, grid, start, finish);
        let elapsed = t0.elapsed();
        let cost = path_cost(grid, &path);
        log::debug!(
            "{algorithm} {start} -> {finish}: visited {} nodes, path {} nodes, cost {cost} in {elapsed:?}",
            visited.len(),
            path.len(),
        );
        SearchResult {
            algorithm,
            visited,
            path,
            cost,
            elapsed,
        }
    }

    /// Timed run from the grid's start to its finish.
    pub fn search(&mut self, algorithm: Algorithm, grid: &Grid) -> SearchResult {
        self.search_between(algorithm, grid, grid.start(), grid.finish())
    }
}

/// Run `algorithm` from the grid's start to its finish with a fresh arena.
pub fn run_search(algorithm: Algorithm, grid: &Grid) -> SearchResult {
    PathSearch::new().search(algorithm, grid)
}

/// Run `algorithm` between arbitrary endpoints with a fresh arena.
///
/// # Panics
///
/// Panics if `start` or `finish` lies outside `grid`.
pub fn run_search_between(
    algorithm: Algorithm,
    grid: &Grid,
    start: Coord,
    finish: Coord,
) -> SearchResult {
    PathSearch::new().search_between(algorithm, grid, start, finish)
}

/// Run every algorithm on the same grid, reusing one arena.
pub fn run_all(grid: &Grid) -> Vec<SearchResult> {
    let mut search = PathSearch::new();
    Algorithm::ALL
        .into_iter()
        .map(|alg| search.search(alg, grid))
        .collect()
}
