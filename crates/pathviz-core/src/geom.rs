//! Geometry primitives: [`Coord`] and [`Range`].

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid position. Rows grow downwards, columns grow to the right.
///
/// Ordering is row-major: first by row, then by column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether `other` is one of the four cardinal neighbours of `self`.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Coord,
    pub max: Coord,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Coord::new(row0.min(row1), col0.min(col1)),
            max: Coord::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// A range anchored at the origin with the given size.
    #[inline]
    pub fn with_size(rows: i32, cols: i32) -> Self {
        Self::new(0, 0, rows.max(0), cols.max(0))
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.height() as usize) * (self.width() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `c` is inside the half-open range.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= self.min.row && c.row < self.max.row && c.col >= self.min.col && c.col < self.max.col
    }

    /// Whether `c` lies on the outermost ring of the range.
    #[inline]
    pub fn on_border(self, c: Coord) -> bool {
        self.contains(c)
            && (c.row == self.min.row
                || c.row == self.max.row - 1
                || c.col == self.min.col
                || c.col == self.max.col - 1)
    }

    /// Row-major iterator over every coordinate in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Coord;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Coord,
}

impl Iterator for RangeIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let width = self.range.width() as usize;
        let full_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let rest = (self.range.max.col - self.cur.col) as usize;
        let n = full_rows * width + rest;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_and_adjacency() {
        let a = Coord::new(1, 1);
        assert_eq!(a.manhattan(Coord::new(4, 5)), 7);
        assert!(a.is_adjacent(Coord::new(0, 1)));
        assert!(a.is_adjacent(Coord::new(1, 2)));
        assert!(!a.is_adjacent(Coord::new(2, 2)));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn coord_ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn range_canonicalizes_and_measures() {
        let r = Range::new(3, 4, 0, 0);
        assert_eq!(r.min, Coord::ZERO);
        assert_eq!(r.height(), 3);
        assert_eq!(r.width(), 4);
        assert_eq!(r.len(), 12);
        assert!(Range::new(2, 0, 2, 5).is_empty());
        assert_eq!(Range::new(2, 0, 2, 5).len(), 0);
    }

    #[test]
    fn range_iter_row_major() {
        let r = Range::new(1, 1, 3, 3);
        let it = r.iter();
        assert_eq!(it.len(), 4);
        let pts: Vec<_> = it.collect();
        assert_eq!(
            pts,
            vec![
                Coord::new(1, 1),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(2, 2)
            ]
        );
    }

    #[test]
    fn border_detection() {
        let r = Range::with_size(4, 5);
        assert!(r.on_border(Coord::new(0, 2)));
        assert!(r.on_border(Coord::new(3, 2)));
        assert!(r.on_border(Coord::new(2, 0)));
        assert!(r.on_border(Coord::new(2, 4)));
        assert!(!r.on_border(Coord::new(1, 1)));
        assert!(!r.on_border(Coord::new(4, 4)));
    }
}
