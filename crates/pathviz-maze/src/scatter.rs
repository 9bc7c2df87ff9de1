use std::ops::Range;

use pathviz_core::{DEFAULT_WEIGHT, Grid};
use rand::{Rng, RngExt};

use crate::{MazeConfig, MazeError, MazeGen};

fn check_probability(p: f64) -> Result<(), MazeError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(MazeError::InvalidProbability(p))
    }
}

impl<R: Rng> MazeGen<R> {
    /// Redraw every wall: each node other than the start and finish becomes
    /// a wall with probability `density` and is opened otherwise.
    ///
    /// Returns the number of walls placed.
    pub fn random_walls(&mut self, grid: &mut Grid, density: f64) -> Result<usize, MazeError> {
        check_probability(density)?;
        let mut walls = 0;
        for c in grid.bounds().iter() {
            if grid.is_terminal(c) {
                continue;
            }
            let wall = self.rng.random_bool(density);
            grid.set_wall(c, wall)?;
            walls += usize::from(wall);
        }
        log::debug!("random walls at density {density}: {walls} placed");
        Ok(walls)
    }

    /// Scatter weighted terrain: each open node other than the start and
    /// finish is, with probability `probability`, given a weight drawn
    /// uniformly from `weights`. Nodes that are not picked keep their weight.
    ///
    /// Returns the number of nodes reweighted.
    pub fn random_weights(
        &mut self,
        grid: &mut Grid,
        probability: f64,
        weights: Range<u32>,
    ) -> Result<usize, MazeError> {
        check_probability(probability)?;
        if weights.is_empty() || weights.start < DEFAULT_WEIGHT {
            return Err(MazeError::InvalidWeightRange {
                start: weights.start,
                end: weights.end,
            });
        }
        let mut count = 0;
        for c in grid.bounds().iter() {
            if grid.is_terminal(c) || grid.is_wall(c) {
                continue;
            }
            if self.rng.random_bool(probability) {
                grid.set_weight(c, self.rng.random_range(weights.clone()))?;
                count += 1;
            }
        }
        log::debug!("random weights {weights:?} at probability {probability}: {count} nodes");
        Ok(count)
    }

    /// [`random_walls`](Self::random_walls) with the density from `config`.
    pub fn random_board(&mut self, grid: &mut Grid, config: &MazeConfig) -> Result<usize, MazeError> {
        self.random_walls(grid, config.wall_density)
    }

    /// [`random_weights`](Self::random_weights) with the settings from
    /// `config`.
    pub fn weighted_terrain(
        &mut self,
        grid: &mut Grid,
        config: &MazeConfig,
    ) -> Result<usize, MazeError> {
        self.random_weights(grid, config.weight_probability, config.weights.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::Coord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn density_extremes() {
        let mut grid = Grid::new(10, 12).unwrap();
        assert_eq!(generator(0).random_walls(&mut grid, 1.0).unwrap(), 118);
        assert_eq!(grid.count_walls(), 118);
        assert!(!grid.is_wall(grid.start()) && !grid.is_wall(grid.finish()));

        assert_eq!(generator(0).random_walls(&mut grid, 0.0).unwrap(), 0);
        assert_eq!(grid.count_walls(), 0);
    }

    #[test]
    fn default_density_is_roughly_a_third() {
        let mut grid = Grid::new(30, 60).unwrap();
        let walls = generator(5)
            .random_board(&mut grid, &MazeConfig::default())
            .unwrap();
        let share = walls as f64 / (grid.len() - 2) as f64;
        assert!((0.25..0.35).contains(&share), "{share}");
    }

    #[test]
    fn rejects_bad_probability() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut mg = generator(0);
        assert_eq!(
            mg.random_walls(&mut grid, 1.5),
            Err(MazeError::InvalidProbability(1.5))
        );
        assert!(mg.random_weights(&mut grid, -0.1, 2..5).is_err());
        assert!(mg.random_walls(&mut grid, f64::NAN).is_err());
    }

    #[test]
    fn weights_land_on_open_nodes_only() {
        let mut grid: Grid = "\
            S.#..
            ..#..
            ....F"
            .parse()
            .unwrap();
        let n = generator(9).random_weights(&mut grid, 1.0, 20..40).unwrap();
        assert_eq!(n, 11);
        for node in grid.iter() {
            if node.is_terminal() || node.is_wall() {
                assert_eq!(node.weight(), DEFAULT_WEIGHT, "{}", node.pos());
            } else {
                assert!((20..40).contains(&node.weight()), "{}", node.pos());
            }
        }
    }

    #[test]
    fn unpicked_nodes_keep_their_weight() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_weight(Coord::new(1, 1), 7).unwrap();
        generator(3).random_weights(&mut grid, 0.0, 20..40).unwrap();
        assert_eq!(grid.weight(Coord::new(1, 1)), Some(7));
    }

    #[test]
    fn rejects_bad_weight_range() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut mg = generator(0);
        assert_eq!(
            mg.random_weights(&mut grid, 0.5, 5..5),
            Err(MazeError::InvalidWeightRange { start: 5, end: 5 })
        );
        assert!(mg.random_weights(&mut grid, 0.5, 0..3).is_err());
    }

    #[test]
    fn seeded_boards_repeat() {
        let cfg = MazeConfig::default();
        let mut a = Grid::new(30, 60).unwrap();
        let mut b = a.clone();
        let mut ga = generator(77);
        let mut gb = generator(77);
        ga.random_board(&mut a, &cfg).unwrap();
        ga.weighted_terrain(&mut a, &cfg).unwrap();
        gb.random_board(&mut b, &cfg).unwrap();
        gb.weighted_terrain(&mut b, &cfg).unwrap();
        assert_eq!(a, b);
    }
}
