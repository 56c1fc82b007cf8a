//! The algorithm selector and per-variant frontier ordering keys.

use std::fmt;

/// One milli-unit per unit of path cost.
///
/// Frontier keys are integer fixed-point in milli-units so the convergent
/// swarm tie-breaker (epsilon = 0.001 per Manhattan step from the start)
/// is exactly representable and totally ordered, with no float comparison
/// in the heap.
const MILLI: i64 = 1000;

/// Heuristic weight for the swarm variants, in milli-units (weight = 1).
const SWARM_WEIGHT_MILLI: i64 = 1000;

/// Selector for the seven search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Dijkstra,
    AStar,
    GreedyBestFirst,
    Swarm,
    ConvergentSwarm,
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    /// Every variant, in presentation order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::GreedyBestFirst,
        Algorithm::Swarm,
        Algorithm::ConvergentSwarm,
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
    ];

    /// Whether the variant guarantees a shortest path on an unweighted
    /// 4-directional grid.
    ///
    /// Convergent swarm is near-optimal only: its tie-breaker may trade a
    /// small cost margin for determinism.
    pub fn guarantees_shortest(self) -> bool {
        matches!(
            self,
            Algorithm::Dijkstra | Algorithm::AStar | Algorithm::Swarm | Algorithm::BreadthFirst
        )
    }

    /// Whether the variant re-queues a frontier node when its accumulated
    /// distance improves. Greedy best-first enqueues each node once, on
    /// first discovery, and never relaxes.
    pub(crate) fn relaxes(self) -> bool {
        !matches!(self, Algorithm::GreedyBestFirst)
    }

    /// Frontier ordering key in milli-units.
    ///
    /// `g` is the accumulated distance from the start, `h` the Manhattan
    /// distance to the finish, `tie` the Manhattan distance back to the
    /// start (consulted only by convergent swarm).
    pub(crate) fn frontier_key(self, g: i32, h: i32, tie: i32) -> i64 {
        let g = g as i64;
        let h = h as i64;
        match self {
            Algorithm::Dijkstra => g * MILLI,
            Algorithm::AStar => (g + h) * MILLI,
            Algorithm::GreedyBestFirst => h * MILLI,
            Algorithm::Swarm => g * MILLI + SWARM_WEIGHT_MILLI * h,
            Algorithm::ConvergentSwarm => g * MILLI + SWARM_WEIGHT_MILLI * h + tie as i64,
            // FIFO/LIFO variants never consult a key.
            Algorithm::BreadthFirst | Algorithm::DepthFirst => 0,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::GreedyBestFirst => "greedy-best-first",
            Algorithm::Swarm => "swarm",
            Algorithm::ConvergentSwarm => "convergent-swarm",
            Algorithm::BreadthFirst => "breadth-first",
            Algorithm::DepthFirst => "depth-first",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_shapes() {
        // Dijkstra ignores the heuristic, greedy ignores the distance.
        assert_eq!(Algorithm::Dijkstra.frontier_key(3, 99, 7), 3000);
        assert_eq!(Algorithm::GreedyBestFirst.frontier_key(99, 3, 7), 3000);
        assert_eq!(Algorithm::AStar.frontier_key(2, 3, 7), 5000);
        // Swarm at weight 1 matches A*.
        assert_eq!(
            Algorithm::Swarm.frontier_key(2, 3, 7),
            Algorithm::AStar.frontier_key(2, 3, 7)
        );
        // The convergent tie-break adds one milli-unit per step from start.
        assert_eq!(Algorithm::ConvergentSwarm.frontier_key(2, 3, 7), 5007);
    }

    #[test]
    fn convergent_tie_break_is_smaller_than_one_step() {
        // A full unit of cost always dominates any realistic tie-break.
        let near = Algorithm::ConvergentSwarm.frontier_key(2, 3, 999);
        let far = Algorithm::ConvergentSwarm.frontier_key(2, 4, 0);
        assert!(near < far);
    }

    #[test]
    fn display_names() {
        assert_eq!(Algorithm::AStar.to_string(), "astar");
        assert_eq!(Algorithm::ConvergentSwarm.to_string(), "convergent-swarm");
        assert_eq!(Algorithm::ALL.len(), 7);
    }
}
