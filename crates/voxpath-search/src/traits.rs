use std::fmt::Debug;
use std::hash::Hash;

/// Step and path costs. Costs are never negative.
pub type Cost = u32;

/// Minimal search interface: node validity and adjacency.
///
/// Node identity is the node value itself (`Eq + Hash`), so two nodes that
/// merely share a display name stay distinct as long as their values differ.
pub trait Examiner {
    type Node: Clone + Eq + Hash + Debug;
    type Error: std::error::Error;

    /// Whether a search may start at `node`.
    fn is_valid_start(&self, node: &Self::Node) -> Result<bool, Self::Error>;

    /// Whether a search may end at `node`. Defaults to
    /// [`is_valid_start`](Self::is_valid_start).
    fn is_valid_goal(&self, node: &Self::Node) -> Result<bool, Self::Error> {
        self.is_valid_start(node)
    }

    /// Append nodes adjacent to `node` into `buf`. The caller clears `buf`
    /// before calling. The order must be stable for a given world state.
    fn adjacent(&self, node: &Self::Node, buf: &mut Vec<Self::Node>) -> Result<(), Self::Error>;

    /// Vertical coordinate used for drop and climb limits.
    fn elevation(&self, _node: &Self::Node) -> i32 {
        0
    }
}

/// Examiner with weighted (non-negative) edges.
pub trait WeightedExaminer: Examiner {
    /// Cost of moving from `from` to adjacent `to`.
    fn cost(&self, from: &Self::Node, to: &Self::Node) -> Result<Cost, Self::Error>;
}

/// Full A* examiner with an admissible heuristic.
pub trait AstarExaminer: WeightedExaminer {
    /// Estimate of the remaining cost from `node` to `goal`.
    /// Must never overestimate the true cost (admissible).
    fn heuristic(&self, node: &Self::Node, goal: &Self::Node) -> Cost;
}
