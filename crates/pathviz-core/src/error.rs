use thiserror::Error;

use crate::geom::Coord;

/// Errors raised when building or editing a [`Grid`](crate::Grid).
///
/// Every variant is a configuration problem caught before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("a {rows}x{cols} grid cannot hold distinct start and finish nodes")]
    TooSmall { rows: i32, cols: i32 },

    #[error("{0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("weight {weight} at {at} must be at least 1")]
    InvalidWeight { at: Coord, weight: u32 },

    #[error("{0} holds the start or finish and cannot become a wall")]
    TerminalWall(Coord),

    #[error("start and finish cannot share {0}")]
    TerminalOverlap(Coord),

    #[error("grid has no start node")]
    MissingStart,

    #[error("grid has no finish node")]
    MissingFinish,

    #[error("grid has more than one start node (second at {0})")]
    DuplicateStart(Coord),

    #[error("grid has more than one finish node (second at {0})")]
    DuplicateFinish(Coord),

    #[error("row {row} has {found} columns, expected {expected}")]
    InconsistentWidth {
        row: i32,
        expected: i32,
        found: i32,
    },

    #[error("invalid character {ch:?} at {at}")]
    InvalidChar { ch: char, at: Coord },
}
