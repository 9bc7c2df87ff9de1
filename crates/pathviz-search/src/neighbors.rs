use pathviz_core::{Coord, Range};

/// Cardinal offsets in resolution order: up, down, left, right.
pub const CARDINAL: [Coord; 4] = [
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
];

/// Cached neighbor resolution helper.
///
/// Returns the four grid-adjacent positions of a node that fall inside the
/// grid bounds. Walls and search state are not looked at; every algorithm
/// applies its own filter on top.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// In-bounds cardinal neighbors of `c`, in the order up, down, left,
    /// right.
    pub fn cardinal(&mut self, bounds: Range, c: Coord) -> &[Coord] {
        self.cardinal_where(bounds, c, |_| true)
    }

    /// In-bounds cardinal neighbors of `c` for which `keep` returns `true`.
    pub fn cardinal_where(
        &mut self,
        bounds: Range,
        c: Coord,
        keep: impl Fn(Coord) -> bool,
    ) -> &[Coord] {
        self.buf.clear();
        for d in CARDINAL {
            let n = c + d;
            if bounds.contains(n) && keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
