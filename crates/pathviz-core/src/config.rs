//! Grid sizing configuration.

use crate::error::GridError;
use crate::grid::Grid;

/// Smallest row count offered by the interactive board.
pub const MIN_ROWS: i32 = 30;
/// Largest row count offered by the interactive board.
pub const MAX_ROWS: i32 = 70;
/// Smallest column count offered by the interactive board.
pub const MIN_COLS: i32 = 50;
/// Largest column count offered by the interactive board.
pub const MAX_COLS: i32 = 120;

/// Requested board size.
///
/// [`Grid::new`] accepts any positive size; callers driving an interactive
/// board clamp user input with [`clamped`](GridConfig::clamped) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { rows: 30, cols: 60 }
    }
}

impl GridConfig {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Clamp rows into `[MIN_ROWS, MAX_ROWS]` and cols into
    /// `[MIN_COLS, MAX_COLS]`.
    pub fn clamped(self) -> Self {
        Self {
            rows: self.rows.clamp(MIN_ROWS, MAX_ROWS),
            cols: self.cols.clamp(MIN_COLS, MAX_COLS),
        }
    }

    /// Build an open grid of this size with default terminals.
    pub fn build(&self) -> Result<Grid, GridError> {
        Grid::new(self.rows, self.cols)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn reads_partial_json_config() {
        let cfg: GridConfig = serde_json::from_str(r#"{"rows":45,"cols":90}"#).unwrap();
        assert_eq!(cfg, GridConfig::new(45, 90));
    }
}
