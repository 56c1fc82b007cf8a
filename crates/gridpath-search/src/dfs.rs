//! Depth-first search: the LIFO frontier, terminating but not optimal.

use gridpath_core::Grid;

use crate::frontier::Node;
use crate::pathfinder::{Pathfinder, SearchResult};

impl Pathfinder {
    /// Depth-first search in LIFO insertion order.
    ///
    /// Unlike the priority variants, a cell may sit on the stack several
    /// times; marking on pop bounds the duplicate growth, and the `open`
    /// flag is not consulted at all. Predecessors are written at push
    /// time, so the last expander before a cell is popped wins: still
    /// acyclic, because an expander is always already finalized.
    pub fn depth_first(&mut self, grid: &Grid) -> SearchResult {
        self.prepare(grid);
        let cur_gen = self.generation;
        let start_idx = self.idx(grid.start());
        let finish_idx = self.idx(grid.finish());

        self.nodes[start_idx] = Node {
            g: 0,
            parent: usize::MAX,
            generation: cur_gen,
            visited: false,
            open: false,
        };

        let mut stack: Vec<usize> = vec![start_idx];
        let mut visited = Vec::new();
        let mut found = false;

        while let Some(ci) = stack.pop() {
            let cp = self.coord(ci);
            if self.nodes[ci].visited || grid.is_wall(cp) {
                continue;
            }

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
                if node.visited {
                    continue;
                }
                node.g = current_g + 1;
                node.parent = ci;
                stack.push(ni);
            }
        }

        let path = if found {
            self.reconstruct(finish_idx)
        } else {
            Vec::new()
        };
        log::debug!(
            "depth-first: visited {} cells, path length {}",
            visited.len(),
            path.len()
        );
        SearchResult { visited, path }
    }
}
