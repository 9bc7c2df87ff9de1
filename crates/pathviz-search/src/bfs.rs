use std::collections::VecDeque;

use pathviz_core::{Coord, Grid};

use crate::PathSearch;

/// Which end of the frontier the next node is taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Discipline {
    /// First in, first out: breadth-first.
    Queue,
    /// Last in, first out: depth-first.
    Stack,
}

impl PathSearch {
    /// Unweighted breadth-first search from `start` to `finish`.
    ///
    /// Returns the visited order. The finish, when reached, carries the
    /// shortest hop count from the start; weights are ignored.
    pub fn bfs(&mut self, grid: &Grid, start: Coord, finish: Coord) -> Vec<Coord> {
        self.traverse(grid, start, finish, Discipline::Queue)
    }

    /// Depth-first search from `start` to `finish`.
    ///
    /// Returns the visited order. The resulting route is whatever the
    /// back-references encode and is generally not the shortest one.
    pub fn dfs(&mut self, grid: &Grid, start: Coord, finish: Coord) -> Vec<Coord> {
        self.traverse(grid, start, finish, Discipline::Stack)
    }

    fn traverse(
        &mut self,
        grid: &Grid,
        start: Coord,
        finish: Coord,
        discipline: Discipline,
    ) -> Vec<Coord> {
        let (si, fi) = self.begin(grid, start, finish);
        let nodes = grid.nodes();
        let bounds = grid.bounds();

        let mut visited = Vec::new();
        let mut frontier: VecDeque<usize> = VecDeque::new();
        self.nodes[si].distance = 0;
        frontier.push_back(si);

        let mut nb = std::mem::take(&mut self.neighbors);

        loop {
            let next = match discipline {
                Discipline::Queue => frontier.pop_front(),
                Discipline::Stack => frontier.pop_back(),
            };
            let Some(ci) = next else {
                break;
            };
            // Walls and duplicates are enqueued freely and dropped here.
            if nodes[ci].is_wall() || self.nodes[ci].visited {
                continue;
            }
            self.nodes[ci].visited = true;
            let cp = grid.coord(ci);
            visited.push(cp);
            if ci == fi {
                break;
            }

            let next_dist = self.nodes[ci].distance.saturating_add(1);
            for &np in nb.cardinal(bounds, cp) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.visited {
                    continue;
                }
                n.distance = next_dist;
                n.previous = Some(ci);
                frontier.push_back(ni);
            }
        }

        self.neighbors = nb;
        visited
    }
}
