//! The search coordinator owning reusable per-cell scratch state.

use gridpath_core::{Coord, Grid};

use crate::algorithm::Algorithm;
use crate::frontier::Node;

/// Result of one search run: pure data for the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells in finalization (expansion) order. On success the last entry
    /// is the finish cell; the run stops the instant it is dequeued.
    pub visited: Vec<Coord>,
    /// Reconstructed path from start to finish, both inclusive. Empty when
    /// the finish was never finalized — a normal outcome, not an error.
    pub path: Vec<Coord>,
}

impl SearchResult {
    /// Whether the finish was reached.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Central coordinator for search runs on a grid.
///
/// Owns the flat per-cell scratch table (distance, predecessor, visited
/// and open flags) so repeated runs reuse the allocation. Each run bumps a
/// generation counter; cells written by earlier runs are treated as
/// untouched, which is what makes the grid itself safe to reuse across
/// runs with no explicit scratch reset anywhere.
///
/// Runs are synchronous and compute their full result before returning.
/// `&mut self` makes the single-writer, non-reentrant model explicit.
pub struct Pathfinder {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) cols: usize,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Pathfinder {
    /// Create a pathfinder with no capacity; scratch grows on first run.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generation: 0,
            cols: 0,
        }
    }

    /// Create a pathfinder pre-sized for a `rows` x `cols` grid.
    pub fn with_capacity(rows: i32, cols: i32) -> Self {
        let len = (rows.max(0) as usize) * (cols.max(0) as usize);
        Self {
            nodes: vec![Node::default(); len],
            generation: 0,
            cols: cols.max(0) as usize,
        }
    }

    /// Run the selected algorithm over `grid`, from its start to its
    /// finish endpoint.
    pub fn run(&mut self, grid: &Grid, algorithm: Algorithm) -> SearchResult {
        match algorithm {
            Algorithm::BreadthFirst => self.breadth_first(grid),
            Algorithm::DepthFirst => self.depth_first(grid),
            priority => self.best_first(grid, priority),
        }
    }

    // -----------------------------------------------------------------------
    // Shared run plumbing
    // -----------------------------------------------------------------------

    /// Size the scratch table for `grid` and open a fresh generation.
    ///
    /// Capacity only grows; a smaller grid reuses the existing allocation
    /// with stale entries ignored via the generation check.
    pub(crate) fn prepare(&mut self, grid: &Grid) {
        self.cols = grid.cols() as usize;
        let len = grid.len();
        if len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(len, Node::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Flat index of an in-bounds coordinate.
    #[inline]
    pub(crate) fn idx(&self, pos: Coord) -> usize {
        (pos.row as usize) * self.cols + pos.col as usize
    }

    /// Coordinate of a flat index.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Reset a node for the current generation if a previous run wrote it.
    #[inline]
    pub(crate) fn refresh(&mut self, idx: usize) {
        let cur_gen = self.generation;
        let node = &mut self.nodes[idx];
        if node.generation != cur_gen {
            *node = Node {
                generation: cur_gen,
                ..Node::default()
            };
        }
    }

    /// Walk predecessors back from the finish and reverse.
    ///
    /// Predecessor links are only ever set toward a not-yet-finalized cell
    /// from a finalized one, so the chain is an acyclic tree rooted at the
    /// start and this loop is bounded by the grid size.
    pub(crate) fn reconstruct(&self, finish_idx: usize) -> Vec<Coord> {
        let mut path = Vec::new();
        let mut ci = finish_idx;
        while ci != usize::MAX {
            path.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }
}
