//! The [`Grid`] type: a rectangular, row-major array of [`Node`]s with
//! exactly one start and exactly one finish.
//!
//! Every constructor and edit upholds the grid invariants, so a `Grid` that
//! exists is always safe to hand to a search.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Coord, Range};
use crate::node::{DEFAULT_WEIGHT, HEAVY_WEIGHT, Node};

/// Default start position for freshly built grids (clamped into bounds).
pub const DEFAULT_START: Coord = Coord::new(3, 5);

/// Default finish offset from the bottom-right corner.
pub const DEFAULT_FINISH_INSET: Coord = Coord::new(4, 8);

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An M×N grid of nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    nodes: Vec<Node>,
    bounds: Range,
    start: Coord,
    finish: Coord,
}

impl Grid {
    /// Build an open grid with the default start and finish positions.
    ///
    /// The start sits at [`DEFAULT_START`] and the finish at
    /// [`DEFAULT_FINISH_INSET`] from the bottom-right corner, both clamped
    /// into the grid. When the two collide on a small grid the finish moves
    /// to the opposite corner.
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        let start = Coord::new(DEFAULT_START.row.min(rows - 1), DEFAULT_START.col.min(cols - 1));
        let mut finish = Coord::new(
            (rows - DEFAULT_FINISH_INSET.row).max(0),
            (cols - DEFAULT_FINISH_INSET.col).max(0),
        );
        if finish == start {
            finish = Coord::new(rows - 1, cols - 1);
            if finish == start {
                finish = Coord::ZERO;
            }
        }
        Self::with_terminals(rows, cols, start, finish)
    }

    /// Build an open grid with explicit start and finish positions.
    pub fn with_terminals(
        rows: i32,
        cols: i32,
        start: Coord,
        finish: Coord,
    ) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        let bounds = Range::with_size(rows, cols);
        for c in [start, finish] {
            if !bounds.contains(c) {
                return Err(GridError::OutOfBounds(c));
            }
        }
        if start == finish {
            return Err(GridError::TerminalOverlap(start));
        }
        let mut nodes: Vec<Node> = bounds.iter().map(Node::new).collect();
        let width = cols as usize;
        nodes[start.row as usize * width + start.col as usize].is_start = true;
        nodes[finish.row as usize * width + finish.col as usize].is_finish = true;
        Ok(Self {
            nodes,
            bounds,
            start,
            finish,
        })
    }

    /// The bounding range of the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a grid holds at least a start and a finish.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols() as usize + c.col as usize)
    }

    /// Inverse of [`index`](Grid::index). `idx` must be below [`len`](Grid::len).
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        let width = self.cols() as usize;
        Coord::new((idx / width) as i32, (idx % width) as i32)
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Coord {
        self.finish
    }

    /// The node at `c`, if in bounds.
    #[inline]
    pub fn node(&self, c: Coord) -> Option<&Node> {
        self.index(c).map(|i| &self.nodes[i])
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Row-major iterator over the nodes.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Whether `c` is a wall. Out-of-bounds coordinates count as walls.
    #[inline]
    pub fn is_wall(&self, c: Coord) -> bool {
        self.node(c).is_none_or(Node::is_wall)
    }

    /// Whether `c` is the start or the finish.
    #[inline]
    pub fn is_terminal(&self, c: Coord) -> bool {
        c == self.start || c == self.finish
    }

    /// Weight of the node at `c`, or `None` if out of bounds.
    #[inline]
    pub fn weight(&self, c: Coord) -> Option<u32> {
        self.node(c).map(Node::weight)
    }

    /// Number of wall nodes.
    pub fn count_walls(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_wall).count()
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    fn node_mut(&mut self, c: Coord) -> Result<&mut Node, GridError> {
        let i = self.index(c).ok_or(GridError::OutOfBounds(c))?;
        Ok(&mut self.nodes[i])
    }

    /// Make `c` a wall or open it. The start and finish cannot be walled.
    pub fn set_wall(&mut self, c: Coord, wall: bool) -> Result<(), GridError> {
        let node = self.node_mut(c)?;
        if wall && node.is_terminal() {
            return Err(GridError::TerminalWall(c));
        }
        node.is_wall = wall;
        Ok(())
    }

    /// Flip the wall state of `c` and return the new state.
    pub fn toggle_wall(&mut self, c: Coord) -> Result<bool, GridError> {
        let wall = !self.node_mut(c)?.is_wall;
        self.set_wall(c, wall)?;
        Ok(wall)
    }

    /// Set the cost of entering `c`. Weights below 1 are rejected.
    pub fn set_weight(&mut self, c: Coord, weight: u32) -> Result<(), GridError> {
        if weight < DEFAULT_WEIGHT {
            return Err(GridError::InvalidWeight { at: c, weight });
        }
        self.node_mut(c)?.weight = weight;
        Ok(())
    }

    /// Switch `c` between the default weight and [`HEAVY_WEIGHT`], returning
    /// the new weight.
    pub fn toggle_weight(&mut self, c: Coord) -> Result<u32, GridError> {
        let node = self.node_mut(c)?;
        node.weight = if node.weight == HEAVY_WEIGHT {
            DEFAULT_WEIGHT
        } else {
            HEAVY_WEIGHT
        };
        Ok(node.weight)
    }

    /// Move the start to `c`, clearing the previous start in the same step.
    /// A wall at `c` is removed.
    pub fn move_start(&mut self, c: Coord) -> Result<(), GridError> {
        let to = self.index(c).ok_or(GridError::OutOfBounds(c))?;
        if c == self.finish {
            return Err(GridError::TerminalOverlap(c));
        }
        let from = self.index(self.start).ok_or(GridError::MissingStart)?;
        self.nodes[from].is_start = false;
        self.nodes[to].is_start = true;
        self.nodes[to].is_wall = false;
        self.start = c;
        Ok(())
    }

    /// Move the finish to `c`, clearing the previous finish in the same step.
    /// A wall at `c` is removed.
    pub fn move_finish(&mut self, c: Coord) -> Result<(), GridError> {
        let to = self.index(c).ok_or(GridError::OutOfBounds(c))?;
        if c == self.start {
            return Err(GridError::TerminalOverlap(c));
        }
        let from = self.index(self.finish).ok_or(GridError::MissingFinish)?;
        self.nodes[from].is_finish = false;
        self.nodes[to].is_finish = true;
        self.nodes[to].is_wall = false;
        self.finish = c;
        Ok(())
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for n in self.nodes.iter_mut() {
            n.is_wall = false;
        }
    }

    /// Reset every weight to the default.
    pub fn clear_weights(&mut self) {
        for n in self.nodes.iter_mut() {
            n.weight = DEFAULT_WEIGHT;
        }
    }
}

fn check_dimensions(rows: i32, cols: i32) -> Result<(), GridError> {
    if rows <= 0 || cols <= 0 {
        return Err(GridError::InvalidDimensions { rows, cols });
    }
    if rows == 1 && cols == 1 {
        return Err(GridError::TooSmall { rows, cols });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Text form
// ---------------------------------------------------------------------------

const OPEN: char = '.';
const WALL: char = '#';
const START: char = 'S';
const FINISH: char = 'F';
const HEAVY: char = '~';

impl FromStr for Grid {
    type Err = GridError;

    /// Parse a grid drawn with `.` (open), `#` (wall), `S` (start),
    /// `F` (finish) and `~` (heavy). Blank lines and surrounding whitespace
    /// on each line are ignored.
    fn from_str(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;
        check_dimensions(rows, cols)?;

        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();
        let mut heavy = Vec::new();
        for (r, line) in lines.iter().enumerate() {
            let found = line.chars().count() as i32;
            if found != cols {
                return Err(GridError::InconsistentWidth {
                    row: r as i32,
                    expected: cols,
                    found,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let at = Coord::new(r as i32, c as i32);
                match ch {
                    OPEN => {}
                    WALL => walls.push(at),
                    HEAVY => heavy.push(at),
                    START => {
                        if start.replace(at).is_some() {
                            return Err(GridError::DuplicateStart(at));
                        }
                    }
                    FINISH => {
                        if finish.replace(at).is_some() {
                            return Err(GridError::DuplicateFinish(at));
                        }
                    }
                    _ => return Err(GridError::InvalidChar { ch, at }),
                }
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let finish = finish.ok_or(GridError::MissingFinish)?;
        let mut grid = Grid::with_terminals(rows, cols, start, finish)?;
        for c in walls {
            grid.set_wall(c, true)?;
        }
        for c in heavy {
            grid.set_weight(c, HEAVY_WEIGHT)?;
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    /// Render the grid in the same notation [`FromStr`] accepts. Any weight
    /// above the default is drawn as `~`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.nodes.chunks(self.cols() as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for n in row {
                let ch = if n.is_start {
                    START
                } else if n.is_finish {
                    FINISH
                } else if n.is_wall {
                    WALL
                } else if n.is_weighted() {
                    HEAVY
                } else {
                    OPEN
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_terminals_on_standard_board() {
        let g = Grid::new(30, 60).unwrap();
        assert_eq!(g.start(), Coord::new(3, 5));
        assert_eq!(g.finish(), Coord::new(26, 52));
        assert_eq!(g.len(), 1800);
        assert!(g.node(Coord::new(3, 5)).unwrap().is_start());
        assert!(g.node(Coord::new(26, 52)).unwrap().is_finish());
        assert_eq!(g.iter().filter(|n| n.is_start()).count(), 1);
        assert_eq!(g.iter().filter(|n| n.is_finish()).count(), 1);
    }

    #[test]
    fn default_terminals_on_small_boards() {
        let g = Grid::new(2, 2).unwrap();
        assert_ne!(g.start(), g.finish());
        assert!(g.contains(g.start()) && g.contains(g.finish()));

        let g = Grid::new(1, 2).unwrap();
        assert_eq!(g.start(), Coord::new(0, 1));
        assert_eq!(g.finish(), Coord::new(0, 0));
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(3, -1),
            Err(GridError::InvalidDimensions { rows: 3, cols: -1 })
        );
        assert_eq!(Grid::new(1, 1), Err(GridError::TooSmall { rows: 1, cols: 1 }));
    }

    #[test]
    fn rejects_bad_terminals() {
        let c = Coord::new(1, 1);
        assert_eq!(
            Grid::with_terminals(3, 3, c, c),
            Err(GridError::TerminalOverlap(c))
        );
        assert_eq!(
            Grid::with_terminals(3, 3, c, Coord::new(3, 0)),
            Err(GridError::OutOfBounds(Coord::new(3, 0)))
        );
    }

    #[test]
    fn index_round_trips_through_coord() {
        let g = Grid::new(4, 7).unwrap();
        for c in g.bounds() {
            assert_eq!(g.coord(g.index(c).unwrap()), c);
        }
        assert_eq!(g.index(Coord::new(4, 0)), None);
        assert_eq!(g.index(Coord::new(0, -1)), None);
    }

    #[test]
    fn walls_cannot_cover_terminals() {
        let mut g = Grid::with_terminals(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap();
        assert_eq!(
            g.set_wall(Coord::new(0, 0), true),
            Err(GridError::TerminalWall(Coord::new(0, 0)))
        );
        assert!(g.toggle_wall(Coord::new(2, 2)).is_err());
        assert_eq!(g.toggle_wall(Coord::new(1, 1)), Ok(true));
        assert!(g.is_wall(Coord::new(1, 1)));
        assert_eq!(g.toggle_wall(Coord::new(1, 1)), Ok(false));
        assert!(!g.is_wall(Coord::new(1, 1)));
        assert!(g.is_wall(Coord::new(5, 5)));
    }

    #[test]
    fn weights_must_be_positive() {
        let mut g = Grid::new(3, 3).unwrap();
        let c = Coord::new(1, 1);
        assert_eq!(
            g.set_weight(c, 0),
            Err(GridError::InvalidWeight { at: c, weight: 0 })
        );
        g.set_weight(c, 20).unwrap();
        assert_eq!(g.weight(c), Some(20));
        assert_eq!(g.toggle_weight(c), Ok(HEAVY_WEIGHT));
        assert_eq!(g.toggle_weight(c), Ok(DEFAULT_WEIGHT));
        g.set_weight(c, 7).unwrap();
        g.clear_weights();
        assert!(g.iter().all(|n| n.weight() == DEFAULT_WEIGHT));
    }

    #[test]
    fn moving_terminals_keeps_exactly_one_each() {
        let mut g = Grid::with_terminals(4, 4, Coord::new(0, 0), Coord::new(3, 3)).unwrap();
        g.set_wall(Coord::new(2, 1), true).unwrap();
        g.move_start(Coord::new(2, 1)).unwrap();
        assert_eq!(g.start(), Coord::new(2, 1));
        assert!(!g.is_wall(Coord::new(2, 1)));
        assert!(!g.node(Coord::new(0, 0)).unwrap().is_start());
        assert_eq!(g.iter().filter(|n| n.is_start()).count(), 1);

        g.move_finish(Coord::new(0, 0)).unwrap();
        assert_eq!(g.finish(), Coord::new(0, 0));
        assert_eq!(g.iter().filter(|n| n.is_finish()).count(), 1);

        assert_eq!(
            g.move_start(Coord::new(0, 0)),
            Err(GridError::TerminalOverlap(Coord::new(0, 0)))
        );
        assert_eq!(
            g.move_finish(Coord::new(9, 9)),
            Err(GridError::OutOfBounds(Coord::new(9, 9)))
        );
        assert_eq!(g.start(), Coord::new(2, 1));
        assert_eq!(g.finish(), Coord::new(0, 0));
    }

    #[test]
    fn clear_walls_opens_everything() {
        let mut g = Grid::new(5, 5).unwrap();
        g.set_wall(Coord::new(1, 1), true).unwrap();
        g.set_wall(Coord::new(2, 2), true).unwrap();
        assert_eq!(g.count_walls(), 2);
        g.clear_walls();
        assert_eq!(g.count_walls(), 0);
    }

    #[test]
    fn parse_and_display() {
        let text = "\
            S.#.
            .~#.
            ...F";
        let g: Grid = text.parse().unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.start(), Coord::new(0, 0));
        assert_eq!(g.finish(), Coord::new(2, 3));
        assert!(g.is_wall(Coord::new(0, 2)));
        assert_eq!(g.weight(Coord::new(1, 1)), Some(HEAVY_WEIGHT));
        assert_eq!(g.to_string(), "S.#.\n.~#.\n...F");
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "S.\n.F.".parse::<Grid>(),
            Err(GridError::InconsistentWidth {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            "S?\n.F".parse::<Grid>(),
            Err(GridError::InvalidChar {
                ch: '?',
                at: Coord::new(0, 1)
            })
        );
        assert_eq!("..\n.F".parse::<Grid>(), Err(GridError::MissingStart));
        assert_eq!("S.\n..".parse::<Grid>(), Err(GridError::MissingFinish));
        assert_eq!(
            "SS\n.F".parse::<Grid>(),
            Err(GridError::DuplicateStart(Coord::new(0, 1)))
        );
        assert_eq!(
            "SF\nF.".parse::<Grid>(),
            Err(GridError::DuplicateFinish(Coord::new(1, 0)))
        );
    }
}
