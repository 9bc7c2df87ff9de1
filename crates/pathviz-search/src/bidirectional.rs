use std::collections::VecDeque;

use pathviz_core::{Coord, Grid};

use crate::PathSearch;
use crate::neighbors::Neighbors;

/// Which of the two frontiers a step expands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    /// Seeded at the start; writes `previous`.
    Forward,
    /// Seeded at the finish; writes `previous_from_finish`.
    Backward,
}

impl PathSearch {
    /// Bidirectional breadth-first search between `start` and `finish`.
    ///
    /// Two unweighted frontiers grow in alternation, forward first. The run
    /// stops as soon as one of them dequeues a node the other has already
    /// discovered, or when either frontier runs dry. On a meeting the
    /// backward chain is spliced onto the forward one, so following the
    /// back-references from the finish leads to the start.
    ///
    /// Returns every node dequeued by either frontier, in dequeue order. The
    /// meeting node may appear twice.
    pub fn bidirectional(&mut self, grid: &Grid, start: Coord, finish: Coord) -> Vec<Coord> {
        let (si, fi) = self.begin(grid, start, finish);

        let mut visited = Vec::new();
        let mut forward = VecDeque::from([si]);
        let mut backward = VecDeque::from([fi]);
        self.nodes[si].distance = 0;
        self.nodes[si].discovered = true;
        self.nodes[fi].discovered_from_finish = true;

        let mut nbuf = std::mem::take(&mut self.neighbors);

        let mut meeting = None;
        while !forward.is_empty() && !backward.is_empty() {
            meeting = self
                .expand(grid, &mut forward, Side::Forward, &mut nbuf, &mut visited)
                .or_else(|| {
                    self.expand(grid, &mut backward, Side::Backward, &mut nbuf, &mut visited)
                });
            if meeting.is_some() {
                break;
            }
        }

        self.neighbors = nbuf;
        if let Some(m) = meeting {
            log::trace!("frontiers met at {}", grid.coord(m));
            self.stitch(m);
        }
        visited
    }

    /// Dequeue one node from `queue` and grow that side's frontier.
    ///
    /// Returns the node if the opposite side has already discovered it.
    fn expand(
        &mut self,
        grid: &Grid,
        queue: &mut VecDeque<usize>,
        side: Side,
        nbuf: &mut Neighbors,
        visited: &mut Vec<Coord>,
    ) -> Option<usize> {
        let ci = queue.pop_front()?;
        let cp = grid.coord(ci);
        self.nodes[ci].visited = true;
        visited.push(cp);

        let met = match side {
            Side::Forward => self.nodes[ci].discovered_from_finish,
            Side::Backward => self.nodes[ci].discovered,
        };
        if met {
            return Some(ci);
        }

        let nodes = grid.nodes();
        let hops = self.nodes[ci].distance.saturating_add(1);
        for &np in nbuf.cardinal(grid.bounds(), cp) {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if nodes[ni].is_wall() {
                continue;
            }
            let n = &mut self.nodes[ni];
            match side {
                Side::Forward if !n.discovered => {
                    n.discovered = true;
                    n.distance = hops;
                    n.previous = Some(ci);
                }
                Side::Backward if !n.discovered_from_finish => {
                    n.discovered_from_finish = true;
                    n.previous_from_finish = Some(ci);
                }
                _ => continue,
            }
            queue.push_back(ni);
        }
        None
    }

    /// Reverse the backward chain from `meeting` into forward links.
    fn stitch(&mut self, meeting: usize) {
        let mut cur = meeting;
        while let Some(next) = self.nodes[cur].previous_from_finish {
            self.nodes[next].previous = Some(cur);
            cur = next;
        }
    }
}
