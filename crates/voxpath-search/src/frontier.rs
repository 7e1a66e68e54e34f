//! Best-first expansion shared by [`AStarEngine`](crate::AStarEngine) and
//! [`AreaFinder`](crate::AreaFinder).
//!
//! All per-node scratch state lives in a run-scoped arena: a `Vec` of slots
//! plus a map from node to slot index. Parent links are slot indices, so
//! nothing here outlives the run that created it.

use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use crate::context::SearchContext;
use crate::traits::{Cost, WeightedExaminer};

/// Parent index of the start slot.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Scratch slots
// ---------------------------------------------------------------------------

/// Membership of a discovered node. Undiscovered nodes have no slot at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Membership {
    Open,
    Closed,
}

pub(crate) struct Slot<N> {
    pub(crate) node: N,
    pub(crate) g: Cost,
    pub(crate) h: Cost,
    pub(crate) parent: usize,
    pub(crate) state: Membership,
    /// Sequence number of the newest heap entry for this slot. Older entries
    /// are stale and skipped on pop.
    seq: u64,
}

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the lowest
/// `f` first, then the lowest `h`, then the earliest insertion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: Cost,
    h: Cost,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Open/closed bookkeeping for one search run.
pub(crate) struct Frontier<'c, 'a, X: WeightedExaminer> {
    ctx: &'c SearchContext<'a, X>,
    slots: Vec<Slot<X::Node>>,
    index: HashMap<X::Node, usize>,
    open: BinaryHeap<NodeRef>,
    seq: u64,
    expanded: usize,
    nbuf: Vec<X::Node>,
}

impl<'c, 'a, X: WeightedExaminer> Frontier<'c, 'a, X> {
    /// Create a frontier holding only the context's start node, with g = 0
    /// and the given h.
    pub(crate) fn new(ctx: &'c SearchContext<'a, X>, start_h: Cost) -> Self {
        let start = ctx.start().clone();
        let mut frontier = Self {
            ctx,
            slots: Vec::new(),
            index: HashMap::new(),
            open: BinaryHeap::new(),
            seq: 0,
            expanded: 0,
            nbuf: Vec::with_capacity(8),
        };
        frontier.index.insert(start.clone(), 0);
        frontier.slots.push(Slot {
            node: start,
            g: 0,
            h: start_h,
            parent: NO_PARENT,
            state: Membership::Open,
            seq: 0,
        });
        frontier.push(0);
        frontier
    }

    #[inline]
    pub(crate) fn slot(&self, idx: usize) -> &Slot<X::Node> {
        &self.slots[idx]
    }

    /// Number of nodes expanded so far.
    #[inline]
    pub(crate) fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of nodes discovered so far (open or closed).
    #[inline]
    pub(crate) fn discovered(&self) -> usize {
        self.slots.len()
    }

    /// Whether the expansion budget, if any, has been used up.
    #[inline]
    pub(crate) fn budget_exhausted(&self) -> bool {
        self.ctx
            .settings()
            .max_expansions
            .is_some_and(|budget| self.expanded >= budget)
    }

    /// Remove the best open node and move it to the closed set.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(entry) = self.open.pop() {
            let slot = &mut self.slots[entry.idx];
            // Skip stale entries.
            if slot.state != Membership::Open || slot.seq != entry.seq {
                continue;
            }
            slot.state = Membership::Closed;
            return Some(entry.idx);
        }
        None
    }

    /// Expand a closed node: relax every admissible edge to a node that is
    /// not closed yet. `heuristic` gives the h-score of newly reached nodes.
    pub(crate) fn expand(
        &mut self,
        ci: usize,
        heuristic: impl Fn(&X::Node) -> Cost,
    ) -> Result<(), X::Error> {
        self.expanded += 1;
        let examiner = self.ctx.examiner();
        let settings = *self.ctx.settings();
        let current = self.slots[ci].node.clone();
        let current_g = self.slots[ci].g;
        let current_y = examiner.elevation(&current);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        let listed = examiner.adjacent(&current, &mut nbuf);
        if let Err(e) = listed {
            self.nbuf = nbuf;
            return Err(e);
        }
        log::trace!("expand {current:?} g={current_g}: {} adjacent", nbuf.len());

        let mut result = Ok(());
        for next in nbuf.drain(..) {
            if let Some(&ni) = self.index.get(&next) {
                if self.slots[ni].state == Membership::Closed {
                    continue;
                }
            }
            if !settings.allows_step(examiner.elevation(&next).saturating_sub(current_y)) {
                continue;
            }
            if self.ctx.avoids(&next) {
                continue;
            }
            let step = match examiner.cost(&current, &next) {
                Ok(step) => step,
                Err(e) => {
                    result = Err(e);
                    break;
                }
            };
            let tentative = current_g.saturating_add(step);
            if tentative > settings.max_range {
                continue;
            }
            self.relax(ci, next, tentative, &heuristic);
        }

        self.nbuf = nbuf;
        result
    }

    /// Record `tentative` as the g-score of `node` if it is new or improves
    /// on the best known score.
    fn relax(
        &mut self,
        parent: usize,
        node: X::Node,
        tentative: Cost,
        heuristic: &impl Fn(&X::Node) -> Cost,
    ) {
        let idx = match self.index.entry(node) {
            Entry::Occupied(e) => {
                let idx = *e.get();
                let slot = &mut self.slots[idx];
                if tentative >= slot.g {
                    return;
                }
                slot.g = tentative;
                slot.parent = parent;
                idx
            }
            Entry::Vacant(e) => {
                let idx = self.slots.len();
                let h = heuristic(e.key());
                self.slots.push(Slot {
                    node: e.key().clone(),
                    g: tentative,
                    h,
                    parent,
                    state: Membership::Open,
                    seq: 0,
                });
                e.insert(idx);
                idx
            }
        };
        self.push(idx);
    }

    fn push(&mut self, idx: usize) {
        self.seq += 1;
        let slot = &mut self.slots[idx];
        slot.seq = self.seq;
        self.open.push(NodeRef {
            idx,
            f: slot.g.saturating_add(slot.h),
            h: slot.h,
            seq: self.seq,
        });
    }

    /// Nodes from the start to `idx`, both inclusive.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<X::Node> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            path.push(self.slots[ci].node.clone());
            ci = self.slots[ci].parent;
        }
        path.reverse();
        path
    }
}
