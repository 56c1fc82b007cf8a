//! The maze generators.

use std::fmt;

use gridpath_core::{Coord, Grid};
use rand::{Rng, RngExt};

/// Probability that a non-endpoint cell becomes a wall in a random maze.
const RANDOM_WALL_PROBABILITY: f64 = 0.3;

/// Selector for the maze generation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MazeKind {
    /// Recursive division starting with a vertical wall line.
    RecursiveVertical,
    /// Recursive division starting with a horizontal wall line.
    RecursiveHorizontal,
    /// Independent random walls, probability 0.3 per cell.
    Random,
    /// Walls along the main diagonal.
    Stair,
}

impl MazeKind {
    /// Every strategy, in presentation order.
    pub const ALL: [MazeKind; 4] = [
        MazeKind::RecursiveVertical,
        MazeKind::RecursiveHorizontal,
        MazeKind::Random,
        MazeKind::Stair,
    ];
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MazeKind::RecursiveVertical => "recursive-vertical",
            MazeKind::RecursiveHorizontal => "recursive-horizontal",
            MazeKind::Random => "random",
            MazeKind::Stair => "stair",
        };
        f.write_str(name)
    }
}

/// An inclusive sub-rectangle awaiting division, with the orientation of
/// the wall line to place in it.
#[derive(Clone, Copy)]
struct Region {
    row0: i32,
    row1: i32,
    col0: i32,
    col1: i32,
    horizontal: bool,
}

/// Maze generator operating on a [`Grid`], generic over its RNG.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator around the given RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Clear the grid's walls and populate them with the given strategy.
    pub fn generate(&mut self, grid: &mut Grid, kind: MazeKind) {
        match kind {
            MazeKind::RecursiveVertical => self.recursive_division(grid, false),
            MazeKind::RecursiveHorizontal => self.recursive_division(grid, true),
            MazeKind::Random => self.random(grid),
            MazeKind::Stair => self.stair(grid),
        }
        log::debug!("{kind}: placed {} walls", grid.wall_count());
    }

    /// Recursive division with an explicit region work-stack.
    ///
    /// Wall lines sit at odd offsets from the region origin and the single
    /// passage per line at an even offset, so passages are never blocked
    /// by a later perpendicular wall: on odd-bounded grids the open cells
    /// stay fully connected. Orientation flips at every split. Regions too
    /// thin to divide are left open.
    pub fn recursive_division(&mut self, grid: &mut Grid, horizontal_first: bool) {
        grid.clear_walls();
        let mut regions = vec![Region {
            row0: 0,
            row1: grid.rows() - 1,
            col0: 0,
            col1: grid.cols() - 1,
            horizontal: horizontal_first,
        }];

        while let Some(region) = regions.pop() {
            if region.horizontal {
                let Some(wall_row) = self.pick_odd_offset(region.row0, region.row1) else {
                    continue;
                };
                let passage_col = self.pick_even_offset(region.col0, region.col1);
                for col in region.col0..=region.col1 {
                    if col != passage_col {
                        grid.set_wall(Coord::new(wall_row, col), true);
                    }
                }
                regions.push(Region {
                    row1: wall_row - 1,
                    horizontal: false,
                    ..region
                });
                regions.push(Region {
                    row0: wall_row + 1,
                    horizontal: false,
                    ..region
                });
            } else {
                let Some(wall_col) = self.pick_odd_offset(region.col0, region.col1) else {
                    continue;
                };
                let passage_row = self.pick_even_offset(region.row0, region.row1);
                for row in region.row0..=region.row1 {
                    if row != passage_row {
                        grid.set_wall(Coord::new(row, wall_col), true);
                    }
                }
                regions.push(Region {
                    col1: wall_col - 1,
                    horizontal: true,
                    ..region
                });
                regions.push(Region {
                    col0: wall_col + 1,
                    horizontal: true,
                    ..region
                });
            }
        }
    }

    /// Each non-endpoint cell independently becomes a wall with
    /// probability 0.3. No solvability guarantee.
    pub fn random(&mut self, grid: &mut Grid) {
        for cell in grid.coords().collect::<Vec<_>>() {
            let wall = self.rng.random::<f64>() < RANDOM_WALL_PROBABILITY;
            grid.set_wall(cell, wall);
        }
    }

    /// Deterministic walls along the main diagonal, up to
    /// `min(rows, cols)` steps.
    pub fn stair(&mut self, grid: &mut Grid) {
        grid.clear_walls();
        for i in 0..grid.rows().min(grid.cols()) {
            grid.set_wall(Coord::new(i, i), true);
        }
    }

    /// A random wall position: odd offset from `lo`, strictly inside
    /// `(lo, hi)`. `None` when the span is too thin to divide.
    fn pick_odd_offset(&mut self, lo: i32, hi: i32) -> Option<i32> {
        let count = (hi - lo) / 2;
        if count < 1 {
            return None;
        }
        Some(lo + 1 + 2 * self.rng.random_range(0..count))
    }

    /// A random passage position: even offset from `lo` within `[lo, hi]`.
    fn pick_even_offset(&mut self, lo: i32, hi: i32) -> i32 {
        let count = (hi - lo) / 2 + 1;
        lo + 2 * self.rng.random_range(0..count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_search::{Algorithm, Pathfinder};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid(rows: i32, cols: i32, start: Coord, finish: Coord) -> Grid {
        Grid::new(rows, cols, start, finish).unwrap()
    }

    #[test]
    fn endpoints_are_never_walled() {
        for seed in 0..30u64 {
            for (rows, cols) in [(5, 5), (9, 13), (20, 50)] {
                let start = Coord::new(rows / 2, 1);
                let finish = Coord::new(rows / 2, cols - 2);
                let mut g = grid(rows, cols, start, finish);
                let mut mazer = MazeGen::new(StdRng::seed_from_u64(seed));
                for kind in MazeKind::ALL {
                    mazer.generate(&mut g, kind);
                    assert!(!g.is_wall(start), "{kind} walled start (seed {seed})");
                    assert!(!g.is_wall(finish), "{kind} walled finish (seed {seed})");
                }
            }
        }
    }

    #[test]
    fn recursive_division_is_solvable_on_odd_grids() {
        for seed in 0..40u64 {
            for (rows, cols) in [(9, 13), (15, 15), (21, 31)] {
                let mut g = grid(rows, cols, Coord::ZERO, Coord::new(rows - 1, cols - 1));
                let mut mazer = MazeGen::new(StdRng::seed_from_u64(seed));
                let mut pf = Pathfinder::new();
                for kind in [MazeKind::RecursiveVertical, MazeKind::RecursiveHorizontal] {
                    mazer.generate(&mut g, kind);
                    let result = pf.run(&g, Algorithm::BreadthFirst);
                    assert!(
                        result.found(),
                        "{kind} unsolvable, seed {seed}, {rows}x{cols}"
                    );
                }
            }
        }
    }

    #[test]
    fn recursive_division_places_walls() {
        let mut g = grid(21, 31, Coord::ZERO, Coord::new(20, 30));
        let mut mazer = MazeGen::new(StdRng::seed_from_u64(3));
        mazer.generate(&mut g, MazeKind::RecursiveVertical);
        // A maze this size always divides at least once.
        assert!(g.wall_count() >= 20);
    }

    #[test]
    fn random_maze_density_is_near_probability() {
        let mut g = grid(20, 50, Coord::new(10, 15), Coord::new(10, 35));
        let mut mazer = MazeGen::new(StdRng::seed_from_u64(11));
        mazer.generate(&mut g, MazeKind::Random);
        let fraction = g.wall_count() as f64 / g.len() as f64;
        assert!(
            (0.15..=0.45).contains(&fraction),
            "wall fraction {fraction} far from 0.3"
        );
    }

    #[test]
    fn stair_is_exactly_the_diagonal() {
        let start = Coord::new(3, 3);
        let finish = Coord::new(0, 5);
        let mut g = grid(6, 9, start, finish);
        // Pre-existing walls must be cleared by generation.
        g.toggle_wall(Coord::new(5, 8));
        let mut mazer = MazeGen::new(StdRng::seed_from_u64(0));
        mazer.generate(&mut g, MazeKind::Stair);
        for cell in g.coords() {
            let expect = cell.row == cell.col && cell != start && cell != finish;
            assert_eq!(g.is_wall(cell), expect, "at {cell}");
        }
    }

    #[test]
    fn same_seed_same_maze() {
        for kind in MazeKind::ALL {
            let mut a = grid(15, 15, Coord::ZERO, Coord::new(14, 14));
            let mut b = grid(15, 15, Coord::ZERO, Coord::new(14, 14));
            MazeGen::new(StdRng::seed_from_u64(42)).generate(&mut a, kind);
            MazeGen::new(StdRng::seed_from_u64(42)).generate(&mut b, kind);
            let walls_a: Vec<bool> = a.coords().map(|c| a.is_wall(c)).collect();
            let walls_b: Vec<bool> = b.coords().map(|c| b.is_wall(c)).collect();
            assert_eq!(walls_a, walls_b, "{kind}");
        }
    }

    #[test]
    fn search_runs_clean_after_generation() {
        // A generation between two runs must not leave any stale search
        // state behind: the second run sees only the new wall set.
        let mut g = grid(9, 13, Coord::ZERO, Coord::new(8, 12));
        let mut pf = Pathfinder::new();
        let mut mazer = MazeGen::new(StdRng::seed_from_u64(5));
        let open_run = pf.run(&g, Algorithm::Dijkstra);
        assert_eq!(open_run.path.len(), 21);
        mazer.generate(&mut g, MazeKind::RecursiveVertical);
        let maze_run = pf.run(&g, Algorithm::Dijkstra);
        assert!(maze_run.found());
        assert!(maze_run.path.len() >= open_run.path.len());
    }
}
