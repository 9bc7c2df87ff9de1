use pathviz_core::{Coord, Grid};

use crate::PathSearch;
use crate::pathsearch::Frontier;

impl PathSearch {
    /// Greedy best-first search from `start` to `finish`.
    ///
    /// The queue is ordered by the Manhattan distance to the finish alone.
    /// A node is claimed by the first node that reaches it and is never
    /// relaxed afterwards, so routes are found quickly but are not
    /// necessarily the shortest ones.
    ///
    /// Returns the visited order.
    pub fn greedy_best_first(&mut self, grid: &Grid, start: Coord, finish: Coord) -> Vec<Coord> {
        let (si, fi) = self.begin(grid, start, finish);
        let nodes = grid.nodes();
        let bounds = grid.bounds();

        let mut visited = Vec::new();
        let mut open = Frontier::default();
        {
            let s = &mut self.nodes[si];
            s.distance = 0;
            s.heuristic = u64::from(start.manhattan(finish));
            s.priority = s.heuristic;
            s.discovered = true;
            s.opened = true;
            open.push(si, s.priority);
        }

        let mut nbuf = std::mem::take(&mut self.neighbors);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            if self.nodes[ci].visited {
                continue;
            }
            self.nodes[ci].opened = false;
            self.nodes[ci].visited = true;
            let cp = grid.coord(ci);
            visited.push(cp);
            if ci == fi {
                break;
            }

            let hops = self.nodes[ci].distance.saturating_add(1);
            for &np in nbuf.cardinal(bounds, cp) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if nodes[ni].is_wall() || self.nodes[ni].discovered {
                    continue;
                }
                let n = &mut self.nodes[ni];
                n.heuristic = u64::from(np.manhattan(finish));
                n.priority = n.heuristic;
                n.distance = hops;
                n.previous = Some(ci);
                n.discovered = true;
                if !n.opened {
                    n.opened = true;
                    open.push(ni, n.priority);
                }
            }
        }

        self.neighbors = nbuf;
        visited
    }
}
