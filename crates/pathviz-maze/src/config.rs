use std::ops::Range;

/// Chance of a non-terminal node becoming a wall on a randomized board.
pub const DEFAULT_WALL_DENSITY: f64 = 0.3;
/// Chance of an open non-terminal node being given a random weight.
pub const DEFAULT_WEIGHT_PROBABILITY: f64 = 0.2;
/// Weights handed out by the weighted-terrain generator.
pub const DEFAULT_WEIGHTS: Range<u32> = 20..40;

/// Tunables for the board randomizers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub wall_density: f64,
    pub weight_probability: f64,
    pub weights: Range<u32>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            wall_density: DEFAULT_WALL_DENSITY,
            weight_probability: DEFAULT_WEIGHT_PROBABILITY,
            weights: DEFAULT_WEIGHTS,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: MazeConfig = serde_json::from_str(r#"{"wall_density":0.5}"#).unwrap();
        assert_eq!(cfg.wall_density, 0.5);
        assert_eq!(cfg.weights, DEFAULT_WEIGHTS);
    }
}
