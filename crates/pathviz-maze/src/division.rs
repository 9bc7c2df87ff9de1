use pathviz_core::{Coord, Grid};
use rand::{Rng, RngExt};

use crate::{MazeError, MazeGen};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Orientation {
    /// The dividing wall runs along a row.
    Horizontal,
    /// The dividing wall runs along a column.
    Vertical,
}

/// Inclusive rectangle still waiting to be divided.
#[derive(Clone, Copy, Debug)]
struct Chamber {
    row_start: i32,
    row_end: i32,
    col_start: i32,
    col_end: i32,
    orientation: Orientation,
}

impl Chamber {
    fn height(&self) -> i32 {
        self.row_end - self.row_start + 1
    }

    fn width(&self) -> i32 {
        self.col_end - self.col_start + 1
    }

    fn is_divisible(&self) -> bool {
        self.row_end - self.row_start >= 2 && self.col_end - self.col_start >= 2
    }
}

impl<R: Rng> MazeGen<R> {
    /// Turn `grid` into a recursive-division maze.
    ///
    /// The border becomes solid wall and the interior is cleared, then
    /// chambers are split by walls on even lines, each with a single gap on
    /// an odd cell, until they are too thin to split. Weights are kept. The
    /// start and finish are never walled; when one does not sit on an odd
    /// interior cell a short corridor is opened from it to the nearest one,
    /// so the finish is always reachable from the start.
    ///
    /// Returns the number of walls on the finished board.
    pub fn recursive_division(&mut self, grid: &mut Grid) -> Result<usize, MazeError> {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows < 3 || cols < 3 {
            return Err(MazeError::TooSmall { rows, cols });
        }

        let bounds = grid.bounds();
        for c in bounds.iter() {
            if !grid.is_terminal(c) {
                grid.set_wall(c, bounds.on_border(c))?;
            }
        }

        let mut chambers = vec![Chamber {
            row_start: 1,
            row_end: rows - 2,
            col_start: 1,
            col_end: cols - 2,
            orientation: self.orientation(rows - 2, cols - 2),
        }];
        let mut divisions = 0usize;

        while let Some(ch) = chambers.pop() {
            if !ch.is_divisible() {
                continue;
            }
            divisions += 1;
            let (first, second) = match ch.orientation {
                Orientation::Horizontal => {
                    let wall = ch.row_start + 1 + 2 * self.rng.random_range(0..(ch.height() / 2));
                    let gap = ch.col_start + 2 * self.rng.random_range(0..(ch.width() + 1) / 2);
                    log::trace!(
                        "horizontal wall at row {wall}, cols {}..={}, gap at col {gap}",
                        ch.col_start,
                        ch.col_end
                    );
                    for col in ch.col_start..=ch.col_end {
                        let c = Coord::new(wall, col);
                        if col != gap && !grid.is_terminal(c) {
                            grid.set_wall(c, true)?;
                        }
                    }
                    let above = Chamber {
                        row_end: wall - 1,
                        orientation: self.orientation(wall - ch.row_start, ch.width()),
                        ..ch
                    };
                    let below = Chamber {
                        row_start: wall + 1,
                        orientation: self.orientation(ch.row_end - wall, ch.width()),
                        ..ch
                    };
                    (above, below)
                }
                Orientation::Vertical => {
                    let wall = ch.col_start + 1 + 2 * self.rng.random_range(0..(ch.width() / 2));
                    let gap = ch.row_start + 2 * self.rng.random_range(0..(ch.height() + 1) / 2);
                    log::trace!(
                        "vertical wall at col {wall}, rows {}..={}, gap at row {gap}",
                        ch.row_start,
                        ch.row_end
                    );
                    for row in ch.row_start..=ch.row_end {
                        let c = Coord::new(row, wall);
                        if row != gap && !grid.is_terminal(c) {
                            grid.set_wall(c, true)?;
                        }
                    }
                    let left = Chamber {
                        col_end: wall - 1,
                        orientation: self.orientation(ch.height(), wall - ch.col_start),
                        ..ch
                    };
                    let right = Chamber {
                        col_start: wall + 1,
                        orientation: self.orientation(ch.height(), ch.col_end - wall),
                        ..ch
                    };
                    (left, right)
                }
            };
            // Pushed in reverse so the first half is divided first.
            chambers.push(second);
            chambers.push(first);
        }

        let (start, finish) = (grid.start(), grid.finish());
        let opened = anchor(grid, start)? + anchor(grid, finish)?;
        let walls = grid.count_walls();
        log::debug!(
            "recursive division of {rows}x{cols}: {divisions} divisions, {walls} walls, {opened} cells opened around terminals"
        );
        Ok(walls)
    }

    /// Split across the longer side; a square chamber is a coin toss.
    fn orientation(&mut self, height: i32, width: i32) -> Orientation {
        if width < height {
            Orientation::Horizontal
        } else if height < width {
            Orientation::Vertical
        } else if self.rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Nearest odd coordinate in the interior span `1..=dim - 2`.
fn odd_within(v: i32, dim: i32) -> i32 {
    let hi = dim - 2;
    let hi = if hi % 2 == 0 { hi - 1 } else { hi };
    if v < 1 {
        1
    } else if v > hi {
        hi
    } else if v % 2 == 0 {
        v - 1
    } else {
        v
    }
}

/// Open an L-shaped corridor from `from` to the nearest odd interior cell,
/// rows first. Returns how many walls were removed.
fn anchor(grid: &mut Grid, from: Coord) -> Result<usize, MazeError> {
    let to = Coord::new(odd_within(from.row, grid.rows()), odd_within(from.col, grid.cols()));
    let mut opened = 0;
    let mut cur = from;
    while cur != to {
        if cur.row != to.row {
            cur.row += (to.row - cur.row).signum();
        } else {
            cur.col += (to.col - cur.col).signum();
        }
        if grid.is_wall(cur) {
            grid.set_wall(cur, false)?;
            opened += 1;
        }
    }
    Ok(opened)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Range;
    use pathviz_search::{Algorithm, run_search};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn rejects_tiny_grids() {
        let mut grid = Grid::new(2, 9).unwrap();
        assert_eq!(
            generator(0).recursive_division(&mut grid),
            Err(MazeError::TooSmall { rows: 2, cols: 9 })
        );
    }

    #[test]
    fn three_by_three_with_corner_terminals() {
        // Start lands on (2,2) and finish on (0,0); both are joined to (1,1).
        let mut grid = Grid::new(3, 3).unwrap();
        let walls = generator(1).recursive_division(&mut grid).unwrap();
        assert_eq!(walls, 4);
        assert_eq!(grid.to_string(), "F##\n...\n##S");
    }

    #[test]
    fn frames_default_board() {
        let mut grid = Grid::new(30, 60).unwrap();
        generator(7).recursive_division(&mut grid).unwrap();
        let bounds = grid.bounds();
        for c in bounds.iter().filter(|&c| bounds.on_border(c)) {
            assert!(grid.is_wall(c), "{c} should be wall");
        }
    }

    #[test]
    fn odd_interior_cells_stay_open() {
        let mut grid = Grid::with_terminals(21, 31, Coord::new(1, 1), Coord::new(19, 29)).unwrap();
        grid.set_wall(Coord::new(5, 5), true).unwrap();
        generator(3).recursive_division(&mut grid).unwrap();
        let inner = Range::new(1, 1, 20, 30);
        for c in inner.iter().filter(|c| c.row % 2 == 1 && c.col % 2 == 1) {
            assert!(!grid.is_wall(c), "{c}");
        }
        assert!(grid.count_walls() > 0);
    }

    #[test]
    fn keeps_weights() {
        let mut grid = Grid::new(15, 15).unwrap();
        grid.set_weight(Coord::new(7, 7), 25).unwrap();
        generator(11).recursive_division(&mut grid).unwrap();
        assert_eq!(grid.weight(Coord::new(7, 7)), Some(25));
    }

    #[test]
    fn same_seed_same_maze() {
        let mut a = Grid::new(30, 60).unwrap();
        let mut b = a.clone();
        generator(42).recursive_division(&mut a).unwrap();
        generator(42).recursive_division(&mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn finish_always_reachable() {
        let mut rng = StdRng::seed_from_u64(2024);
        for seed in 0..300 {
            let rows = rng.random_range(3..32);
            let cols = rng.random_range(3..32);
            let start = Coord::new(rng.random_range(0..rows), rng.random_range(0..cols));
            let mut finish = start;
            while finish == start {
                finish = Coord::new(rng.random_range(0..rows), rng.random_range(0..cols));
            }
            let mut grid = Grid::with_terminals(rows, cols, start, finish).unwrap();
            generator(seed).recursive_division(&mut grid).unwrap();

            assert!(!grid.is_wall(start) && !grid.is_wall(finish), "seed {seed}");
            let res = run_search(Algorithm::Bfs, &grid);
            assert!(res.found(), "seed {seed}: {rows}x{cols} {start} -> {finish}\n{grid}");
        }
    }

    #[test]
    fn odd_within_clamps_to_interior() {
        assert_eq!(odd_within(0, 10), 1);
        assert_eq!(odd_within(4, 10), 3);
        assert_eq!(odd_within(9, 10), 7);
        assert_eq!(odd_within(8, 11), 7);
        assert_eq!(odd_within(9, 11), 9);
        assert_eq!(odd_within(2, 3), 1);
    }
}
