//! Reachable-area flood search.

use std::collections::HashMap;
use std::hash::Hash;

use crate::astar::SearchStatus;
use crate::context::SearchContext;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::traits::{Cost, WeightedExaminer};

/// A node with the cheapest cost at which it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode<N> {
    pub node: N,
    pub cost: Cost,
}

/// Every node reachable from a start within the movement limits, with its
/// cost from the start.
///
/// Meant to be computed once and queried many times: [`contains`] and
/// [`cost_to`] are O(1). An area is a snapshot of the world at the time of
/// the search and is never updated.
///
/// [`contains`]: Area::contains
/// [`cost_to`]: Area::cost_to
#[derive(Debug, Clone)]
pub struct Area<N> {
    status: SearchStatus,
    nodes: Vec<PathNode<N>>,
    index: HashMap<N, usize>,
}

impl<N: Clone + Eq + Hash> Area<N> {
    fn from_nodes(status: SearchStatus, nodes: Vec<PathNode<N>>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, pn)| (pn.node.clone(), i))
            .collect();
        Self {
            status,
            nodes,
            index,
        }
    }

    /// [`SearchStatus::Resolved`] if the flood ran to completion,
    /// [`SearchStatus::Unresolved`] if the expansion budget cut it short (the
    /// area is then a subset of the true one).
    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Whether `node` was reached.
    #[inline]
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Cheapest cost from the start to `node`, if it was reached.
    #[inline]
    pub fn cost_to(&self, node: &N) -> Option<Cost> {
        self.index.get(node).map(|&i| self.nodes[i].cost)
    }

    /// Reached nodes in the order they were settled (non-decreasing cost).
    #[inline]
    pub fn nodes(&self) -> &[PathNode<N>] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N: PartialEq> PartialEq for Area<N> {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status && self.nodes == other.nodes
    }
}

impl<N: Eq> Eq for Area<N> {}

#[cfg(feature = "serde")]
impl<N: serde::Serialize> serde::Serialize for Area<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&(self.status, &self.nodes), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, N> serde::Deserialize<'de> for Area<N>
where
    N: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (status, nodes): (SearchStatus, Vec<PathNode<N>>) =
            serde::Deserialize::deserialize(deserializer)?;
        Ok(Area::from_nodes(status, nodes))
    }
}

/// Goal-less uniform-cost flood.
///
/// Runs the same expansion as [`AStarEngine`](crate::AStarEngine) with a
/// zero heuristic and no goal test: every settled node is recorded, and
/// edges are pruned by range, drop, climb and the avoidance predicate
/// exactly as in a point-to-point search.
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaFinder;

impl AreaFinder {
    /// Flood from the context's start. Any goal in the context is ignored.
    pub fn run<X: WeightedExaminer>(
        ctx: &SearchContext<'_, X>,
    ) -> Result<Area<X::Node>, SearchError<X::Error>> {
        log::debug!(
            "area: flooding from {:?} within {}",
            ctx.start(),
            ctx.settings().max_range
        );
        let mut frontier = Frontier::new(ctx, 0);
        let mut nodes = Vec::new();
        let mut status = SearchStatus::Resolved;

        while let Some(ci) = frontier.pop() {
            let slot = frontier.slot(ci);
            nodes.push(PathNode {
                node: slot.node.clone(),
                cost: slot.g,
            });
            if frontier.budget_exhausted() {
                log::debug!("area: expansion budget exhausted");
                status = SearchStatus::Unresolved;
                break;
            }
            frontier
                .expand(ci, |_| 0)
                .map_err(SearchError::Examiner)?;
        }

        log::debug!("area: {} nodes reached", nodes.len());
        Ok(Area::from_nodes(status, nodes))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn area_round_trip_rebuilds_index() {
        let area = Area::from_nodes(
            SearchStatus::Resolved,
            vec![
                PathNode { node: 'a', cost: 0 },
                PathNode { node: 'b', cost: 3 },
            ],
        );
        let json = serde_json::to_string(&area).unwrap();
        let back: Area<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, area);
        assert_eq!(back.cost_to(&'b'), Some(3));
        assert!(!back.contains(&'c'));
    }
}
