use pathviz_core::{Coord, Grid};

use crate::PathSearch;

impl PathSearch {
    /// Route from `start` to `finish` encoded by the last run's
    /// back-references.
    ///
    /// `visited` is the visited order that run returned. The route is empty
    /// when the finish was never visited, or when the back-references do not
    /// lead from the finish back to the start.
    pub fn extract_path(
        &self,
        grid: &Grid,
        start: Coord,
        finish: Coord,
        visited: &[Coord],
    ) -> Vec<Coord> {
        if !visited.contains(&finish) {
            return Vec::new();
        }
        let (Some(si), Some(fi)) = (grid.index(start), grid.index(finish)) else {
            return Vec::new();
        };

        let mut path = vec![finish];
        let mut cur = fi;
        while cur != si {
            match self.nodes.get(cur).and_then(|s| s.previous) {
                // A chain longer than the grid has looped.
                Some(prev) if path.len() < grid.len() => {
                    path.push(grid.coord(prev));
                    cur = prev;
                }
                _ => {
                    log::warn!("back-references from {finish} do not reach {start}");
                    return Vec::new();
                }
            }
        }
        path.reverse();
        path
    }
}

/// Total weight of the nodes entered along `path`.
///
/// The first node is where the route starts and is not entered, so it does
/// not count. An empty or single-node route costs nothing.
pub fn path_cost(grid: &Grid, path: &[Coord]) -> u64 {
    path.iter()
        .skip(1)
        .filter_map(|&c| grid.weight(c))
        .map(u64::from)
        .fold(0, u64::saturating_add)
}
