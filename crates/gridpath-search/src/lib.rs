//! Graph-search algorithms for grid pathfinding.
//!
//! Seven interchangeable strategies share one contract: consume a
//! [`Grid`](gridpath_core::Grid) with its start/finish endpoints, produce
//! the order in which cells were finalized plus the reconstructed path:
//!
//! - **Dijkstra** ([`Pathfinder::dijkstra`]) — ascending distance, optimal
//! - **A\*** ([`Pathfinder::astar`]) — distance + Manhattan heuristic, optimal
//! - **Greedy Best-First** ([`Pathfinder::greedy_best_first`]) — heuristic only
//! - **Swarm** ([`Pathfinder::swarm`]) — weighted A\* (weight 1)
//! - **Convergent Swarm** ([`Pathfinder::convergent_swarm`]) — weighted A\*
//!   with a deterministic start-biased tie-breaker
//! - **Breadth-first** ([`Pathfinder::breadth_first`]) — FIFO, optimal
//! - **Depth-first** ([`Pathfinder::depth_first`]) — LIFO, not optimal
//!
//! All algorithms run through [`Pathfinder`], which owns and reuses the
//! per-cell scratch state so that repeated runs incur no allocations for
//! it after warm-up, and no run can observe a previous run's data.

mod algorithm;
mod best_first;
mod bfs;
mod dfs;
mod distance;
mod frontier;
mod pathfinder;

pub use algorithm::Algorithm;
pub use distance::manhattan;
pub use pathfinder::{Pathfinder, SearchResult};
