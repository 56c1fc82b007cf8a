//! Breadth-first search: the FIFO frontier, optimal on unweighted grids.

use std::collections::VecDeque;

use gridpath_core::Grid;

use crate::frontier::Node;
use crate::pathfinder::{Pathfinder, SearchResult};

impl Pathfinder {
    /// Breadth-first search in insertion order, unit cost, no heuristic.
    ///
    /// Cells are finalized when dequeued; the `open` flag keeps each cell
    /// in the queue at most once per discovery.
    pub fn breadth_first(&mut self, grid: &Grid) -> SearchResult {
        self.prepare(grid);
        let cur_gen = self.generation;
        let start_idx = self.idx(grid.start());
        let finish_idx = self.idx(grid.finish());

        self.nodes[start_idx] = Node {
            g: 0,
            parent: usize::MAX,
            generation: cur_gen,
            visited: false,
            open: true,
        };

        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(start_idx);

        let mut visited = Vec::new();
        let mut found = false;

        while let Some(ci) = queue.pop_front() {
            let cp = self.coord(ci);

            // Walls are skipped when dequeued, not expanded.
            if grid.is_wall(cp) {
                self.nodes[ci].open = false;
                continue;
            }

            self.nodes[ci].open = false;
            self.nodes[ci].visited = true;
            visited.push(cp);

            if ci == finish_idx {
                found = true;
                break;
            }

            let current_g = self.nodes[ci].g;
            for np in cp.neighbors_4() {
                if !grid.contains(np) {
                    continue;
                }
                let ni = self.idx(np);
                self.refresh(ni);
                let node = &mut self.nodes[ni];
                if node.visited || node.open {
                    continue;
                }
                node.g = current_g + 1;
                node.parent = ci;
                node.open = true;
                queue.push_back(ni);
            }
        }

        let path = if found {
            self.reconstruct(finish_idx)
        } else {
            Vec::new()
        };
        log::debug!(
            "breadth-first: visited {} cells, path length {}",
            visited.len(),
            path.len()
        );
        SearchResult { visited, path }
    }
}
