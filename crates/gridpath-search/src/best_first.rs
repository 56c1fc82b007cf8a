//! The priority-ordered family: Dijkstra, A*, greedy best-first and the
//! two swarm variants share one engine differing only in the frontier key.

use std::collections::BinaryHeap;

use gridpath_core::Grid;

use crate::algorithm::Algorithm;
use crate::distance::manhattan;
use crate::frontier::{Node, OpenRef, UNREACHABLE};
use crate::pathfinder::{Pathfinder, SearchResult};

impl Pathfinder {
    /// Dijkstra: ascending accumulated distance, unit edge cost. Optimal.
    pub fn dijkstra(&mut self, grid: &Grid) -> SearchResult {
        self.best_first(grid, Algorithm::Dijkstra)
    }

    /// A*: ascending distance + Manhattan heuristic. Optimal.
    pub fn astar(&mut self, grid: &Grid) -> SearchResult {
        self.best_first(grid, Algorithm::AStar)
    }

    /// Greedy best-first: ascending heuristic only, accumulated cost
    /// ignored. Fast and not guaranteed optimal.
    pub fn greedy_best_first(&mut self, grid: &Grid) -> SearchResult {
        self.best_first(grid, Algorithm::GreedyBestFirst)
    }

    /// Swarm: weighted A* at weight 1, so optimal.
    pub fn swarm(&mut self, grid: &Grid) -> SearchResult {
        self.best_first(grid, Algorithm::Swarm)
    }

    /// Convergent swarm: weighted A* plus a deterministic tie-breaker
    /// biased toward cells near the start, producing straighter and less
    /// spread exploration. Near-optimal.
    pub fn convergent_swarm(&mut self, grid: &Grid) -> SearchResult {
        self.best_first(grid, Algorithm::ConvergentSwarm)
    }

    pub(crate) fn best_first(&mut self, grid: &Grid, algo: Algorithm) -> SearchResult {
        self.prepare(grid);
        let cur_gen = self.generation;
        let start = grid.start();
        let finish = grid.finish();
        let start_idx = self.idx(start);
        let finish_idx = self.idx(finish);

        self.nodes[start_idx] = Node {
            g: 0,
            parent: usize::MAX,
            generation: cur_gen,
            visited: false,
            open: true,
        };

        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
        let mut seq: u32 = 0;
        open.push(OpenRef {
            key: algo.frontier_key(0, manhattan(start, finish), 0),
            g: 0,
            seq,
            idx: start_idx,
        });

        let mut visited: Vec<_> = Vec::new();
        let mut found = false;

        while let Some(current) = open.pop() {
            let ci = current.idx;

            // Lazy deletion: drop entries whose node was re-keyed,
            // finalized, or belongs to an earlier run.
            {
                let node = &self.nodes[ci];
                if node.generation != cur_gen || !node.open {
                    continue;
                }
            }

            let cp = self.coord(ci);

            // Walls may reach the frontier; they are skipped when
            // dequeued, never expanded or finalized. The finish cannot be
            // a wall, so it is never skipped here.
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
                if node.visited {
                    continue;
                }

                let tentative = current_g + 1;
                if algo.relaxes() {
                    if tentative >= node.g {
                        continue;
                    }
                } else if node.open || node.g != UNREACHABLE {
                    // Greedy: first discovery only.
                    continue;
                }

                node.g = tentative;
                node.parent = ci;
                node.open = true;
                seq += 1;
                open.push(OpenRef {
                    key: algo.frontier_key(tentative, manhattan(np, finish), manhattan(np, start)),
                    g: tentative,
                    seq,
                    idx: ni,
                });
            }
        }

        let path = if found {
            self.reconstruct(finish_idx)
        } else {
            Vec::new()
        };
        log::debug!(
            "{algo}: visited {} cells, path length {}",
            visited.len(),
            path.len()
        );
        SearchResult { visited, path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Coord;

    fn grid(rows: i32, cols: i32, start: Coord, finish: Coord) -> Grid {
        Grid::new(rows, cols, start, finish).unwrap()
    }

    #[test]
    fn astar_expands_fewer_cells_than_dijkstra() {
        let g = grid(9, 9, Coord::new(4, 0), Coord::new(4, 8));
        let mut pf = Pathfinder::new();
        let dij = pf.dijkstra(&g);
        let ast = pf.astar(&g);
        assert_eq!(dij.path.len(), ast.path.len());
        assert!(ast.visited.len() <= dij.visited.len());
    }

    #[test]
    fn dijkstra_finds_detour_around_wall() {
        let mut g = grid(3, 4, Coord::new(1, 0), Coord::new(1, 3));
        g.set_wall(Coord::new(0, 1), true);
        g.set_wall(Coord::new(1, 1), true);
        g.set_wall(Coord::new(2, 1), false);
        let result = Pathfinder::new().dijkstra(&g);
        // Straight line blocked at (0,1)/(1,1): detour through row 2.
        assert_eq!(result.path.len(), 6);
        assert!(result.path.contains(&Coord::new(2, 1)));
    }

    #[test]
    fn greedy_walks_straight_on_open_grid() {
        // With no obstacles the heuristic leads greedy directly to the
        // finish, visiting exactly the cells on one monotone path.
        let g = grid(8, 8, Coord::new(0, 0), Coord::new(7, 7));
        let result = Pathfinder::new().greedy_best_first(&g);
        assert_eq!(result.path.len(), 15);
        assert_eq!(result.visited.len(), 15);
    }

    #[test]
    fn convergent_swarm_matches_swarm_cost_on_small_grids() {
        let mut g = grid(10, 10, Coord::new(5, 0), Coord::new(5, 9));
        for row in 2..9 {
            g.set_wall(Coord::new(row, 4), true);
        }
        let mut pf = Pathfinder::new();
        let swarm = pf.swarm(&g);
        let convergent = pf.convergent_swarm(&g);
        assert!(swarm.found() && convergent.found());
        // The tie-break adds less than one edge cost per candidate on a
        // grid this size, so it reorders equal-cost pops without ever
        // trading away path length.
        assert_eq!(convergent.path.len(), swarm.path.len());
    }

    #[test]
    fn relaxation_never_increases_distance() {
        let mut g = grid(6, 6, Coord::new(0, 0), Coord::new(5, 5));
        g.set_wall(Coord::new(1, 1), true);
        g.set_wall(Coord::new(2, 3), true);
        let mut pf = Pathfinder::new();
        let result = pf.dijkstra(&g);
        // Each finalized cell's stored distance equals its position in a
        // non-decreasing expansion front.
        let mut last = 0;
        for &c in &result.visited {
            let d = pf.nodes[pf.idx(c)].g;
            assert!(d >= last, "distance regressed at {c}");
            last = d;
        }
    }
}
