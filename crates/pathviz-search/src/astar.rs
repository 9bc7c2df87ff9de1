use pathviz_core::{Coord, Grid};

use crate::PathSearch;
use crate::pathsearch::Frontier;

impl PathSearch {
    /// A* search from `start` to `finish` with the Manhattan heuristic.
    ///
    /// The queue is ordered by `f = g + h`, ties in insertion order. A node
    /// is enqueued only while it is not already in the queue: a cheaper `g`
    /// found for a queued node is ignored rather than requeued. On a
    /// uniform-weight grid without walls this still yields shortest routes;
    /// in general the route can cost slightly more than Dijkstra's.
    ///
    /// Returns the visited order.
    pub fn astar(&mut self, grid: &Grid, start: Coord, finish: Coord) -> Vec<Coord> {
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

            let current_g = self.nodes[ci].distance;
            for &np in nbuf.cardinal(bounds, cp) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if nodes[ni].is_wall() || self.nodes[ni].opened {
                    continue;
                }
                let tentative_g = current_g.saturating_add(u64::from(nodes[ni].weight()));
                let n = &mut self.nodes[ni];
                if tentative_g < n.distance {
                    n.heuristic = u64::from(np.manhattan(finish));
                    n.previous = Some(ci);
                    n.distance = tentative_g;
                    n.priority = tentative_g.saturating_add(n.heuristic);
                    n.opened = true;
                    open.push(ni, n.priority);
                }
            }
        }

        self.neighbors = nbuf;
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heads_straight_for_the_finish() {
        let grid = Grid::with_terminals(7, 7, Coord::new(3, 0), Coord::new(3, 6)).unwrap();
        let mut search = PathSearch::new();
        let visited = search.astar(&grid, grid.start(), grid.finish());
        assert_eq!(visited.len(), 7);
        assert!(visited.iter().all(|c| c.row == 3));
        assert_eq!(search.distance_at(&grid, grid.finish()), 6);
    }

    #[test]
    fn explores_less_than_dijkstra() {
        let grid = Grid::with_terminals(15, 15, Coord::new(7, 1), Coord::new(7, 13)).unwrap();
        let mut search = PathSearch::new();
        let astar = search.astar(&grid, grid.start(), grid.finish()).len();
        let dijkstra = search.dijkstra(&grid, grid.start(), grid.finish()).len();
        assert!(astar < dijkstra);
    }

    #[test]
    fn detours_around_heavy_node() {
        let mut grid: Grid = "\
            S.F
            ..."
            .parse()
            .unwrap();
        grid.set_weight(Coord::new(0, 1), 20).unwrap();
        let mut search = PathSearch::new();
        let visited = search.astar(&grid, grid.start(), grid.finish());
        assert_eq!(search.distance_at(&grid, grid.finish()), 4);
        assert!(!visited.contains(&Coord::new(0, 1)));
        assert_eq!(search.previous_of(&grid, grid.finish()), Some(Coord::new(1, 2)));
    }

    #[test]
    fn queued_nodes_are_not_improved() {
        // The finish is queued from (0,2) at cost 7; the later route through
        // (1,3) would reach it at 6 but the queued entry stands.
        let mut grid: Grid = "\
            S..F
            ...."
            .parse()
            .unwrap();
        grid.set_weight(Coord::new(0, 1), 2).unwrap();
        grid.set_weight(Coord::new(0, 2), 4).unwrap();
        grid.set_weight(Coord::new(1, 1), 2).unwrap();
        let mut search = PathSearch::new();
        search.astar(&grid, grid.start(), grid.finish());
        assert_eq!(search.distance_at(&grid, Coord::new(1, 3)), 6);
        assert_eq!(search.distance_at(&grid, grid.finish()), 7);
        assert_eq!(search.previous_of(&grid, grid.finish()), Some(Coord::new(0, 2)));

        search.dijkstra(&grid, grid.start(), grid.finish());
        assert_eq!(search.distance_at(&grid, grid.finish()), 6);
    }

    #[test]
    fn walled_off_finish() {
        let grid: Grid = "\
            S.#.
            ..#F"
            .parse()
            .unwrap();
        let mut search = PathSearch::new();
        let visited = search.astar(&grid, grid.start(), grid.finish());
        assert_eq!(visited.len(), 4);
        assert!(!visited.contains(&grid.finish()));
    }
}
