use pathviz_core::{Coord, Grid};

use crate::PathSearch;
use crate::pathsearch::Frontier;

impl PathSearch {
    /// Dijkstra's algorithm from `start` to `finish`.
    ///
    /// Entering a node costs its weight. Nodes are finalized in order of
    /// ascending cost, ties in insertion order; a finalized cost never
    /// improves. Returns the visited order.
    pub fn dijkstra(&mut self, grid: &Grid, start: Coord, finish: Coord) -> Vec<Coord> {
        let (si, fi) = self.begin(grid, start, finish);
        let nodes = grid.nodes();
        let bounds = grid.bounds();

        let mut visited = Vec::new();
        let mut open = Frontier::default();
        self.nodes[si].distance = 0;
        open.push(si, 0);

        let mut nbuf = std::mem::take(&mut self.neighbors);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            // Skip stale entries left behind by later improvements.
            if self.nodes[ci].visited || current.priority > self.nodes[ci].distance {
                continue;
            }
            self.nodes[ci].visited = true;
            let cp = grid.coord(ci);
            visited.push(cp);
            if ci == fi {
                break;
            }

            let current_g = self.nodes[ci].distance;
            for &np in nbuf.cardinal(bounds, cp) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if nodes[ni].is_wall() || self.nodes[ni].visited {
                    continue;
                }
                let tentative = current_g.saturating_add(u64::from(nodes[ni].weight()));
                let n = &mut self.nodes[ni];
                if tentative < n.distance {
                    n.distance = tentative;
                    n.previous = Some(ci);
                    open.push(ni, tentative);
                }
            }
        }

        self.neighbors = nbuf;
        visited
    }
}
