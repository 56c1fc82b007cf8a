//! The grid topology: dimensions, wall set, start and finish endpoints.
//!
//! A [`Grid`] is pure topology. It enforces the structural invariants the
//! search layer relies on:
//!
//! - exactly one start cell and one finish cell, never the same cell;
//! - neither endpoint is ever a wall (moving an endpoint onto a wall
//!   un-walls that cell, and wall writes to an endpoint are rejected).

use std::fmt;

use crate::coord::Coord;

/// Errors raised by grid construction and endpoint moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns were zero or negative.
    InvalidDimensions { rows: i32, cols: i32 },
    /// A coordinate lies outside the grid bounds.
    InvalidCoordinate { pos: Coord, rows: i32, cols: i32 },
    /// Start and finish would occupy the same cell.
    CoincidentEndpoints(Coord),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "grid dimensions must be positive, got {rows}x{cols}")
            }
            Self::InvalidCoordinate { pos, rows, cols } => {
                write!(f, "coordinate {pos} outside {rows}x{cols} grid")
            }
            Self::CoincidentEndpoints(pos) => {
                write!(f, "start and finish both at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A fixed-size R x C grid of cells, each either open or a wall, with one
/// start cell and one finish cell.
///
/// Walls are stored as a flat row-major `Vec<bool>`. All mutation goes
/// through methods that preserve the endpoint invariants; there is no way
/// to construct a grid whose start or finish is walled.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: i32,
    cols: i32,
    walls: Vec<bool>,
    start: Coord,
    finish: Coord,
}

impl Grid {
    /// Create an open (wall-free) grid with the given endpoints.
    pub fn new(rows: i32, cols: i32, start: Coord, finish: Coord) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let in_bounds = |pos: Coord| pos.row >= 0 && pos.row < rows && pos.col >= 0 && pos.col < cols;
        if !in_bounds(start) {
            return Err(GridError::InvalidCoordinate { pos: start, rows, cols });
        }
        if !in_bounds(finish) {
            return Err(GridError::InvalidCoordinate { pos: finish, rows, cols });
        }
        if start == finish {
            return Err(GridError::CoincidentEndpoints(start));
        }
        Ok(Self {
            rows,
            cols,
            walls: vec![false; (rows as usize) * (cols as usize)],
            start,
            finish,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether the grid has no cells. Always false for a constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The finish cell.
    #[inline]
    pub fn finish(&self) -> Coord {
        self.finish
    }

    /// Whether `pos` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, pos: Coord) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    /// Whether the cell at `pos` is a wall. Out-of-bounds cells are not walls.
    #[inline]
    pub fn is_wall(&self, pos: Coord) -> bool {
        match self.index(pos) {
            Some(i) => self.walls[i],
            None => false,
        }
    }

    /// Flip the wall state at `pos`.
    ///
    /// Silently rejected when `pos` is the start, the finish, or out of
    /// bounds, mirroring how an interactive caller drags across the grid
    /// without caring which cells accept the edit.
    pub fn toggle_wall(&mut self, pos: Coord) {
        if pos == self.start || pos == self.finish {
            return;
        }
        if let Some(i) = self.index(pos) {
            self.walls[i] = !self.walls[i];
        }
    }

    /// Set the wall state at `pos` directly.
    ///
    /// Same silent endpoint and bounds protection as [`toggle_wall`]
    /// (maze generators go through here, so an endpoint can never end up
    /// walled no matter what a generator asks for).
    ///
    /// [`toggle_wall`]: Self::toggle_wall
    pub fn set_wall(&mut self, pos: Coord, wall: bool) {
        if pos == self.start || pos == self.finish {
            return;
        }
        if let Some(i) = self.index(pos) {
            self.walls[i] = wall;
        }
    }

    /// Move the start cell to `pos`, un-walling the destination.
    pub fn move_start(&mut self, pos: Coord) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(GridError::InvalidCoordinate {
                pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if pos == self.finish {
            return Err(GridError::CoincidentEndpoints(pos));
        }
        self.start = pos;
        // A walled endpoint is an invalid grid; the move carves it open.
        if let Some(i) = self.index(pos) {
            self.walls[i] = false;
        }
        Ok(())
    }

    /// Move the finish cell to `pos`, un-walling the destination.
    pub fn move_finish(&mut self, pos: Coord) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(GridError::InvalidCoordinate {
                pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if pos == self.start {
            return Err(GridError::CoincidentEndpoints(pos));
        }
        self.finish = pos;
        if let Some(i) = self.index(pos) {
            self.walls[i] = false;
        }
        Ok(())
    }

    /// Remove every wall, leaving endpoints in place.
    pub fn clear_walls(&mut self) {
        self.walls.fill(false);
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|w| **w).count()
    }

    /// Row-major iterator over every coordinate in the grid.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    #[inline]
    fn index(&self, pos: Coord) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.row as usize) * (self.cols as usize) + pos.col as usize)
    }
}
