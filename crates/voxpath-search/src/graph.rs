//! Explicit node graphs.
//!
//! A [`Graph`] stores named nodes and weighted links. Node identity is the
//! [`NodeId`] handed out by [`Graph::add_node`]; names are labels only and
//! may repeat.

use std::convert::Infallible;

use voxpath_core::BlockPos;

use crate::traits::{AstarExaminer, Cost, Examiner, WeightedExaminer};

/// Opaque handle of a node in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in insertion order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named point of a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub name: String,
    pub pos: BlockPos,
}

#[derive(Debug, Clone, Copy)]
struct Link {
    to: NodeId,
    cost: Cost,
}

/// A directed graph with weighted links.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    links: Vec<Vec<Link>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its handle.
    pub fn add_node(&mut self, name: impl Into<String>, pos: BlockPos) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(GraphNode {
            name: name.into(),
            pos,
        });
        self.links.push(Vec::new());
        id
    }

    /// The node behind `id`, if it belongs to this graph.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node handle, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Every node carrying `name`. Names are not unique, so this may yield
    /// several handles.
    pub fn find_by_name<'g>(&'g self, name: &'g str) -> impl Iterator<Item = NodeId> + 'g {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.name == name)
            .map(|(i, _)| NodeId(i))
    }

    /// Add a one-way link. Returns `false` (and does nothing) if either
    /// handle does not belong to this graph.
    pub fn link_one_way(&mut self, from: NodeId, to: NodeId, cost: Cost) -> bool {
        if from.0 >= self.nodes.len() || to.0 >= self.nodes.len() {
            return false;
        }
        self.links[from.0].push(Link { to, cost });
        true
    }

    /// Link `a` and `b` both ways with the given cost.
    pub fn link_weighted(&mut self, a: NodeId, b: NodeId, cost: Cost) -> bool {
        self.link_one_way(a, b, cost) && self.link_one_way(b, a, cost)
    }

    /// Link `a` and `b` both ways, costed by the Manhattan distance between
    /// their positions.
    pub fn link(&mut self, a: NodeId, b: NodeId) -> bool {
        let (Some(na), Some(nb)) = (self.node(a), self.node(b)) else {
            return false;
        };
        let cost = na.pos.manhattan(nb.pos);
        self.link_weighted(a, b, cost)
    }

    /// Outgoing links of `id` as `(target, cost)`, in insertion order.
    pub fn links(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Cost)> + '_ {
        self.links
            .get(id.0)
            .into_iter()
            .flatten()
            .map(|l| (l.to, l.cost))
    }
}

/// Examiner over a [`Graph`].
///
/// Adjacency follows the graph's links, elevation is the node's `y`. The
/// heuristic is the Manhattan distance between node positions, which is
/// admissible as long as no link is cheaper than the Manhattan distance of
/// its endpoints (always true for [`Graph::link`]). Use
/// [`without_heuristic`](Self::without_heuristic) for arbitrary weights.
#[derive(Debug, Clone, Copy)]
pub struct GraphExaminer<'g> {
    graph: &'g Graph,
    heuristic: bool,
}

impl<'g> GraphExaminer<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            heuristic: true,
        }
    }

    /// Use a zero heuristic, turning A* into uniform-cost search.
    #[must_use]
    pub fn without_heuristic(mut self) -> Self {
        self.heuristic = false;
        self
    }

    fn pos(&self, id: NodeId) -> BlockPos {
        self.graph.node(id).map(|n| n.pos).unwrap_or_default()
    }
}

impl Examiner for GraphExaminer<'_> {
    type Node = NodeId;
    type Error = Infallible;

    fn is_valid_start(&self, node: &NodeId) -> Result<bool, Infallible> {
        Ok(self.graph.node(*node).is_some())
    }

    fn adjacent(&self, node: &NodeId, buf: &mut Vec<NodeId>) -> Result<(), Infallible> {
        buf.extend(self.graph.links(*node).map(|(to, _)| to));
        Ok(())
    }

    fn elevation(&self, node: &NodeId) -> i32 {
        self.pos(*node).y
    }
}

impl WeightedExaminer for GraphExaminer<'_> {
    /// Cheapest link from `from` to `to`; [`Cost::MAX`] if there is none.
    fn cost(&self, from: &NodeId, to: &NodeId) -> Result<Cost, Infallible> {
        Ok(self
            .graph
            .links(*from)
            .filter(|(t, _)| t == to)
            .map(|(_, c)| c)
            .min()
            .unwrap_or(Cost::MAX))
    }
}

impl AstarExaminer for GraphExaminer<'_> {
    fn heuristic(&self, node: &NodeId, goal: &NodeId) -> Cost {
        if self.heuristic {
            self.pos(*node).manhattan(self.pos(*goal))
        } else {
            0
        }
    }
}
