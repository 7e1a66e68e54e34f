use crate::context::SearchContext;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::traits::{AstarExaminer, Cost};

/// Terminal status of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The search reached its goal (or, for floods, ran to completion).
    Resolved,
    /// The candidates or the expansion budget ran out first.
    Unresolved,
}

/// Outcome of a point-to-point search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<N> {
    pub status: SearchStatus,
    /// Nodes from start to goal, both inclusive. Empty iff unresolved.
    pub path: Vec<N>,
    /// Total cost of `path`; 0 when unresolved.
    pub cost: Cost,
    /// Number of nodes expanded.
    pub expanded: usize,
}

impl<N> SearchResult<N> {
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.status == SearchStatus::Resolved
    }

    fn unresolved(expanded: usize) -> Self {
        Self {
            status: SearchStatus::Unresolved,
            path: Vec::new(),
            cost: 0,
            expanded,
        }
    }
}

/// Point-to-point A* search.
///
/// Each call allocates its own scratch state and keeps nothing afterwards,
/// so independent searches may run on separate threads. A run can be
/// expensive: keep it off latency-sensitive paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStarEngine;

impl AStarEngine {
    /// Find the cheapest path from the context's start to its goal.
    ///
    /// A goal-less (flood) context resolves nothing and returns an unresolved
    /// result without expanding. Examiner failures abort the run and are
    /// returned as [`SearchError::Examiner`].
    pub fn run<X: AstarExaminer>(
        ctx: &SearchContext<'_, X>,
    ) -> Result<SearchResult<X::Node>, SearchError<X::Error>> {
        let Some(goal) = ctx.goal() else {
            return Ok(SearchResult::unresolved(0));
        };
        let examiner = ctx.examiner();
        let heuristic = |n: &X::Node| examiner.heuristic(n, goal);

        log::debug!("astar: {:?} -> {goal:?}", ctx.start());
        let mut frontier = Frontier::new(ctx, heuristic(ctx.start()));

        while let Some(ci) = frontier.pop() {
            if frontier.slot(ci).node == *goal {
                let result = SearchResult {
                    status: SearchStatus::Resolved,
                    path: frontier.path_to(ci),
                    cost: frontier.slot(ci).g,
                    expanded: frontier.expanded(),
                };
                log::debug!(
                    "astar: resolved, cost {} over {} nodes ({} expanded, {} discovered)",
                    result.cost,
                    result.path.len(),
                    result.expanded,
                    frontier.discovered()
                );
                return Ok(result);
            }
            if frontier.budget_exhausted() {
                log::debug!("astar: expansion budget exhausted");
                return Ok(SearchResult::unresolved(frontier.expanded()));
            }
            frontier
                .expand(ci, heuristic)
                .map_err(SearchError::Examiner)?;
        }

        log::debug!(
            "astar: unresolved after {} expansions",
            frontier.expanded()
        );
        Ok(SearchResult::unresolved(frontier.expanded()))
    }
}
