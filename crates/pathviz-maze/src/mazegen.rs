use rand::Rng;

/// Board generator driven by a caller-supplied random source.
///
/// Every generator edits a [`Grid`](pathviz_core::Grid) in place and leaves
/// the start and finish where they are. Seed the RNG to get repeatable
/// boards.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}
