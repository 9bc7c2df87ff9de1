//! Shared board setup and text rendering for the `pathviz` binary.

use clap::ValueEnum;
use pathviz_core::{Coord, Grid, GridConfig};
use pathviz_maze::{MazeConfig, MazeError, MazeGen};
use pathviz_search::SearchResult;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// How the board is prepared before searching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MazeKind {
    /// Open board.
    None,
    /// Recursive-division maze.
    Division,
    /// Independent random walls.
    Random,
    /// Open board with scattered heavy terrain.
    Weighted,
}

/// Build a board of the configured size and shape it with `kind`.
pub fn build_board(
    grid: &GridConfig,
    kind: MazeKind,
    seed: u64,
    maze: &MazeConfig,
) -> Result<Grid, MazeError> {
    let mut board = grid.build()?;
    let mut mg = MazeGen::new(StdRng::seed_from_u64(seed));
    match kind {
        MazeKind::None => {}
        MazeKind::Division => {
            mg.recursive_division(&mut board)?;
        }
        MazeKind::Random => {
            mg.random_board(&mut board, maze)?;
        }
        MazeKind::Weighted => {
            mg.weighted_terrain(&mut board, maze)?;
        }
    }
    Ok(board)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

const VISITED: char = ':';
const ROUTE: char = '*';

/// Draw `grid` with the visited nodes and route of `result` on top.
///
/// Terminals and walls keep their usual glyphs; route nodes show as `*` and
/// other visited nodes as `:`.
pub fn render(grid: &Grid, result: &SearchResult) -> String {
    let base = grid.to_string();
    let mut overlay: Vec<Vec<char>> = base.lines().map(|l| l.chars().collect()).collect();
    let mut mark = |c: Coord, ch: char| {
        if grid.is_terminal(c) || grid.is_wall(c) {
            return;
        }
        if let Some(cell) = overlay
            .get_mut(c.row as usize)
            .and_then(|row| row.get_mut(c.col as usize))
        {
            *cell = ch;
        }
    };
    for &c in &result.visited {
        mark(c, VISITED);
    }
    for &c in &result.path {
        mark(c, ROUTE);
    }
    overlay
        .into_iter()
        .map(String::from_iter)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per run: algorithm, visited count, route length, cost and time.
pub fn stats_table(results: &[SearchResult]) -> String {
    let mut out = table_row("algorithm", "visited", "steps", "cost", "time");
    for r in results {
        let (steps, cost) = if r.found() {
            (r.steps().to_string(), r.cost.to_string())
        } else {
            ("-".to_owned(), "-".to_owned())
        };
        out.push_str(&table_row(
            r.algorithm.label(),
            &r.visited.len().to_string(),
            &steps,
            &cost,
            &format!("{:.1?}", r.elapsed),
        ));
    }
    out
}

fn table_row(algorithm: &str, visited: &str, steps: &str, cost: &str, time: &str) -> String {
    format!("{algorithm:<26} {visited:>8} {steps:>6} {cost:>6} {time:>10}\n")
}
