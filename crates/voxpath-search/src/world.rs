//! Examiners deriving adjacency from a [`VoxelWorld`].

use std::cmp::Ordering;

use voxpath_core::{BlockPos, VoxelWorld};

use crate::traits::{AstarExaminer, Cost, Examiner, WeightedExaminer};

/// Default height of the column window [`WalkExaminer`] scans for landing
/// spots on each side.
pub const DEFAULT_SCAN_HEIGHT: u32 = 4;

// ---------------------------------------------------------------------------
// WalkExaminer
// ---------------------------------------------------------------------------

/// Walking adjacency for a two-block-tall body.
///
/// A node is the block holding the body's feet. It is standable when the
/// feet and head blocks are passable and the block below is a floor. From
/// each node the examiner looks at the four horizontal neighbour columns and
/// offers every standable spot within `scan_height` blocks up or down that
/// can be reached without passing through an obstruction. Drop and climb
/// limits are left to the search settings.
///
/// Step cost is `1 + |dy|`; the heuristic is the Manhattan distance, which
/// never overestimates it.
#[derive(Debug, Clone)]
pub struct WalkExaminer<W> {
    world: W,
    scan_height: u32,
}

impl<W: VoxelWorld> WalkExaminer<W> {
    pub fn new(world: W) -> Self {
        Self {
            world,
            scan_height: DEFAULT_SCAN_HEIGHT,
        }
    }

    /// Replace the vertical scan window.
    #[must_use]
    pub fn with_scan_height(mut self, scan_height: u32) -> Self {
        self.scan_height = scan_height;
        self
    }

    #[inline]
    pub fn world(&self) -> &W {
        &self.world
    }

    /// Whether a body can stand with its feet at `p`.
    pub fn is_standable(&self, p: BlockPos) -> Result<bool, W::Error> {
        Ok(self.world.material(p)?.is_passable()
            && self.world.material(p.up())?.is_passable()
            && self.world.material(p.down())?.is_floor())
    }

    /// Whether every block of the column at `(x, z)` from `y0` to `y1`
    /// (inclusive) is passable.
    fn column_clear(&self, at: BlockPos, y0: i32, y1: i32) -> Result<bool, W::Error> {
        for y in y0..=y1 {
            if !self.world.material(BlockPos::new(at.x, y, at.z))?.is_passable() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether the body can move from `from` to the standable spot `to` in
    /// the adjacent column: climbing needs headroom above `from`, dropping
    /// needs a free fall above `to`.
    fn can_reach(&self, from: BlockPos, to: BlockPos) -> Result<bool, W::Error> {
        match to.y.cmp(&from.y) {
            Ordering::Greater => {
                self.column_clear(from, from.y.saturating_add(2), to.y.saturating_add(1))
            }
            Ordering::Less => {
                self.column_clear(to, to.y.saturating_add(2), from.y.saturating_add(1))
            }
            Ordering::Equal => Ok(true),
        }
    }
}

impl<W: VoxelWorld> Examiner for WalkExaminer<W> {
    type Node = BlockPos;
    type Error = W::Error;

    fn is_valid_start(&self, node: &BlockPos) -> Result<bool, W::Error> {
        self.is_standable(*node)
    }

    fn adjacent(&self, node: &BlockPos, buf: &mut Vec<BlockPos>) -> Result<(), W::Error> {
        let scan = self.scan_height.min(i32::MAX as u32) as i32;
        for dir in BlockPos::HORIZONTAL {
            let column = *node + dir;
            for dy in -scan..=scan {
                let to = column.shift(0, dy, 0);
                if self.is_standable(to)? && self.can_reach(*node, to)? {
                    buf.push(to);
                }
            }
        }
        Ok(())
    }

    fn elevation(&self, node: &BlockPos) -> i32 {
        node.y
    }
}

impl<W: VoxelWorld> WeightedExaminer for WalkExaminer<W> {
    fn cost(&self, from: &BlockPos, to: &BlockPos) -> Result<Cost, W::Error> {
        Ok(1 + from.y.abs_diff(to.y))
    }
}

impl<W: VoxelWorld> AstarExaminer for WalkExaminer<W> {
    fn heuristic(&self, node: &BlockPos, goal: &BlockPos) -> Cost {
        node.manhattan(*goal)
    }
}

// ---------------------------------------------------------------------------
// OpenSpaceExaminer
// ---------------------------------------------------------------------------

/// Face-adjacency between open blocks (air and liquids).
///
/// Doors are never open to this examiner, whatever their state, so a closed
/// room with a door still counts as sealed. Every step costs 1.
#[derive(Debug, Clone)]
pub struct OpenSpaceExaminer<W> {
    world: W,
}

impl<W: VoxelWorld> OpenSpaceExaminer<W> {
    pub fn new(world: W) -> Self {
        Self { world }
    }

    #[inline]
    pub fn world(&self) -> &W {
        &self.world
    }
}

impl<W: VoxelWorld> Examiner for OpenSpaceExaminer<W> {
    type Node = BlockPos;
    type Error = W::Error;

    fn is_valid_start(&self, node: &BlockPos) -> Result<bool, W::Error> {
        Ok(self.world.material(*node)?.is_open())
    }

    fn adjacent(&self, node: &BlockPos, buf: &mut Vec<BlockPos>) -> Result<(), W::Error> {
        for n in node.neighbors_6() {
            if self.world.material(n)?.is_open() {
                buf.push(n);
            }
        }
        Ok(())
    }

    fn elevation(&self, node: &BlockPos) -> i32 {
        node.y
    }
}

impl<W: VoxelWorld> WeightedExaminer for OpenSpaceExaminer<W> {
    fn cost(&self, _from: &BlockPos, _to: &BlockPos) -> Result<Cost, W::Error> {
        Ok(1)
    }
}

impl<W: VoxelWorld> AstarExaminer for OpenSpaceExaminer<W> {
    fn heuristic(&self, node: &BlockPos, goal: &BlockPos) -> Cost {
        node.manhattan(*goal)
    }
}
