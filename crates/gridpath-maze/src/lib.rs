//! Maze generation strategies that populate a grid's wall set.
//!
//! Three-plus independent strategies behind one entry point,
//! [`MazeGen::generate`]:
//!
//! - **Recursive division** (vertical- or horizontal-first): repeatedly
//!   bisects open space with a wall line carrying exactly one passage.
//!   Always solvable on odd-bounded grids.
//! - **Random**: independent per-cell walls at a fixed probability. No
//!   connectivity guarantee.
//! - **Stair**: a deterministic diagonal.
//!
//! Every generator first clears the existing wall set and can never wall
//! the start or finish cell: all wall writes go through
//! [`Grid::set_wall`](gridpath_core::Grid::set_wall), which rejects
//! endpoint cells, so a degenerate maze is unrepresentable rather than
//! detected after the fact.

mod mazegen;

pub use mazegen::{MazeGen, MazeKind};
