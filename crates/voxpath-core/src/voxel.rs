//! Block materials and read-only voxel world access.
//!
//! [`VoxelWorld`] is the only contract the search crate has with the world:
//! it asks "what is at this position" and nothing else. [`VoxelGrid`] is a
//! dense in-memory implementation backed by a flat `Vec` over a [`Region`].

use crate::geom::{BlockPos, Region};

/// What occupies a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Material {
    /// Empty space.
    #[default]
    Air,
    /// Anything that cannot be walked through and can be stood on.
    Solid,
    /// Water, lava and friends: passable, not standable.
    Liquid,
    /// An openable obstruction.
    Door { open: bool },
}

impl Material {
    /// Whether a walking body may occupy this block.
    #[inline]
    pub fn is_passable(self) -> bool {
        match self {
            Material::Air | Material::Liquid => true,
            Material::Door { open } => open,
            Material::Solid => false,
        }
    }

    /// Whether a walking body can stand on top of this block.
    #[inline]
    pub fn is_floor(self) -> bool {
        matches!(self, Material::Solid | Material::Door { open: false })
    }

    /// Whether the block counts as open space for enclosure checks. Doors are
    /// closed here whatever their state.
    #[inline]
    pub fn is_open(self) -> bool {
        matches!(self, Material::Air | Material::Liquid)
    }
}

/// Errors a world backend may report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// The block at this position is not available (unloaded chunk, missing
    /// data, ...).
    #[error("block at {0} is not loaded")]
    Unloaded(BlockPos),
}

/// Read-only access to block materials.
pub trait VoxelWorld {
    type Error: std::error::Error;

    /// The material at `p`.
    fn material(&self, p: BlockPos) -> Result<Material, Self::Error>;
}

impl<W: VoxelWorld + ?Sized> VoxelWorld for &W {
    type Error = W::Error;

    #[inline]
    fn material(&self, p: BlockPos) -> Result<Material, Self::Error> {
        (**self).material(p)
    }
}

/// A dense block grid over a fixed [`Region`].
///
/// Positions outside the bounds read as [`Material::Air`], so the grid
/// behaves like a finite structure floating in an empty world.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelGrid {
    bounds: Region,
    blocks: Vec<Material>,
}

impl VoxelGrid {
    /// Create a grid of air blocks covering `bounds`.
    pub fn new(bounds: Region) -> Self {
        Self {
            bounds,
            blocks: vec![Material::Air; bounds.len()],
        }
    }

    /// The bounding region of the grid.
    #[inline]
    pub fn bounds(&self) -> Region {
        self.bounds
    }

    /// Get the material at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: BlockPos) -> Option<Material> {
        self.bounds.index(p).map(|i| self.blocks[i])
    }

    /// Set the material at `p`. Returns `false` (and does nothing) if `p` is
    /// out of bounds.
    pub fn set(&mut self, p: BlockPos, m: Material) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.blocks[i] = m;
                true
            }
            None => false,
        }
    }

    /// Set every in-bounds block of `region` to `m`.
    pub fn fill(&mut self, region: Region, m: Material) {
        for p in region.intersect(self.bounds) {
            self.set(p, m);
        }
    }

    /// Build a hollow box: the outermost layer of `region` becomes `wall`
    /// and everything inside becomes air.
    pub fn hollow_box(&mut self, region: Region, wall: Material) {
        for p in region.intersect(self.bounds) {
            let m = if region.on_boundary(p) {
                wall
            } else {
                Material::Air
            };
            self.set(p, m);
        }
    }

    /// Number of in-bounds blocks equal to `m`.
    pub fn count(&self, m: Material) -> usize {
        self.blocks.iter().filter(|&&b| b == m).count()
    }
}

impl VoxelWorld for VoxelGrid {
    type Error = std::convert::Infallible;

    #[inline]
    fn material(&self, p: BlockPos) -> Result<Material, Self::Error> {
        Ok(self.at(p).unwrap_or_default())
    }
}
