use pathviz_core::GridError;
use thiserror::Error;

/// Errors raised by the generators in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    #[error("recursive division needs at least a 3x3 grid, got {rows}x{cols}")]
    TooSmall { rows: i32, cols: i32 },

    #[error("probability {0} is outside [0, 1]")]
    InvalidProbability(f64),

    #[error("weight range {start}..{end} is empty or contains weights below 1")]
    InvalidWeightRange { start: u32, end: u32 },

    #[error(transparent)]
    Grid(#[from] GridError),
}
