//! Internal per-cell scratch state and the priority-frontier entry type.

/// Sentinel distance for cells not yet reached this run.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Per-cell scratch state, reused across runs and lazily invalidated by
/// the generation counter.
#[derive(Clone)]
pub(crate) struct Node {
    /// Accumulated distance from the start cell.
    pub(crate) g: i32,
    /// Flat index of the predecessor cell, `usize::MAX` for none.
    pub(crate) parent: usize,
    /// Run that last wrote this node; anything else is stale.
    pub(crate) generation: u32,
    /// Finalized (expanded) this run.
    pub(crate) visited: bool,
    /// Currently has a live frontier entry.
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            visited: false,
            open: false,
        }
    }
}

/// Frontier entry for the best-first variants.
///
/// Ordered so a `BinaryHeap` (a max-heap) pops the entry with the lowest
/// key first; ties resolve by lower accumulated distance, then earlier
/// insertion sequence. This reproduces, deterministically, what a stable
/// re-sort of the whole frontier at every pop would produce.
///
/// A cell's key can improve after insertion, so stale entries stay in the
/// heap and are discarded on pop (lazy deletion via the node `open` flag).
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenRef {
    pub(crate) key: i64,
    pub(crate) g: i32,
    pub(crate) seq: u32,
    pub(crate) idx: usize,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .key
            .cmp(&self.key)
            .then(other.g.cmp(&self.g))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
