use std::cmp::Ordering;
use std::collections::BinaryHeap;

use pathviz_core::{Coord, Grid};

use crate::neighbors::Neighbors;

/// Sentinel distance of a node no run has reached.
///
/// Costs are summed in `u64` so that no route over `u32` weights can reach
/// it on a grid that fits in memory.
pub const UNREACHABLE: u64 = u64::MAX;

// ---------------------------------------------------------------------------
// Per-node scratch record
// ---------------------------------------------------------------------------

/// Bookkeeping one run keeps for one grid node.
///
/// Back-references are flat node indices, never pointers into the grid.
#[derive(Clone, Debug)]
pub(crate) struct Scratch {
    /// Cost so far (`g`). Hop count for the unweighted searches.
    pub(crate) distance: u64,
    pub(crate) heuristic: u64,
    /// Queue key: `g + h` for A*, `h` for greedy best-first.
    pub(crate) priority: u64,
    pub(crate) previous: Option<usize>,
    pub(crate) previous_from_finish: Option<usize>,
    /// Finalized: popped from the frontier and appended to the visited order.
    pub(crate) visited: bool,
    /// Currently sitting in the priority queue.
    pub(crate) opened: bool,
    pub(crate) discovered: bool,
    pub(crate) discovered_from_finish: bool,
}

impl Default for Scratch {
    fn default() -> Self {
        Self {
            distance: UNREACHABLE,
            heuristic: 0,
            priority: UNREACHABLE,
            previous: None,
            previous_from_finish: None,
            visited: false,
            opened: false,
            discovered: false,
            discovered_from_finish: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Priority frontier
// ---------------------------------------------------------------------------

/// Queue entry ordered by ascending priority, then by insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct QueueEntry {
    pub(crate) idx: usize,
    pub(crate) priority: u64,
    seq: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest insertion.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority frontier with first-in-first-out tie-breaking, so that runs
/// are fully deterministic.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<QueueEntry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, idx: usize, priority: u64) {
        self.heap.push(QueueEntry {
            idx,
            priority,
            seq: self.seq,
        });
        self.seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<QueueEntry> {
        self.heap.pop()
    }
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Scratch arena and entry point for every search algorithm.
///
/// A `PathSearch` owns the per-node bookkeeping of the run in progress. The
/// grid itself is only read, so one grid can be searched repeatedly, by any
/// algorithm, without being reset. Each run starts by wiping the arena; the
/// buffers are kept so repeated runs do not reallocate.
#[derive(Default)]
pub struct PathSearch {
    pub(crate) nodes: Vec<Scratch>,
    pub(crate) neighbors: Neighbors,
}

impl PathSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the arena for `grid` and resolve the endpoints to indices.
    ///
    /// Endpoints outside the grid are a caller bug, not a search outcome.
    pub(crate) fn begin(&mut self, grid: &Grid, start: Coord, finish: Coord) -> (usize, usize) {
        let (Some(si), Some(fi)) = (grid.index(start), grid.index(finish)) else {
            panic!(
                "search endpoints {start} -> {finish} lie outside the {}x{} grid",
                grid.rows(),
                grid.cols()
            );
        };
        self.nodes.clear();
        self.nodes.resize(grid.len(), Scratch::default());
        (si, fi)
    }

    /// Cost-so-far recorded for `c` by the last run, or [`UNREACHABLE`].
    ///
    /// Unweighted searches record hop counts; the bidirectional search only
    /// records them for the forward frontier.
    pub fn distance_at(&self, grid: &Grid, c: Coord) -> u64 {
        grid.index(c)
            .and_then(|i| self.nodes.get(i))
            .map_or(UNREACHABLE, |s| s.distance)
    }

    /// Back-reference recorded for `c` by the last run.
    pub fn previous_of(&self, grid: &Grid, c: Coord) -> Option<Coord> {
        grid.index(c)
            .and_then(|i| self.nodes.get(i))
            .and_then(|s| s.previous)
            .map(|p| grid.coord(p))
    }
}
