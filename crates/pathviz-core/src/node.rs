//! The [`Node`] type: one cell of a [`Grid`](crate::Grid).

use crate::geom::Coord;

/// Weight of a plain, unweighted node.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Weight given to "heavy" terrain by [`Grid::toggle_weight`](crate::Grid::toggle_weight).
pub const HEAVY_WEIGHT: u32 = 30;

/// A single grid cell.
///
/// Nodes carry only their identity, role flags and weight. Search state is
/// kept outside the grid, so a grid can be searched any number of times
/// without being reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pos: Coord,
    pub(crate) is_start: bool,
    pub(crate) is_finish: bool,
    pub(crate) is_wall: bool,
    pub(crate) weight: u32,
}

impl Node {
    pub(crate) const fn new(pos: Coord) -> Self {
        Self {
            pos,
            is_start: false,
            is_finish: false,
            is_wall: false,
            weight: DEFAULT_WEIGHT,
        }
    }

    #[inline]
    pub fn pos(&self) -> Coord {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub fn is_finish(&self) -> bool {
        self.is_finish
    }

    /// Start or finish.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.is_start || self.is_finish
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    /// Cost of entering this node. Always ≥ 1.
    #[inline]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Whether the node costs more than a plain step.
    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.weight > DEFAULT_WEIGHT
    }
}
