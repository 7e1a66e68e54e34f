//! **voxpath-core** — geometry and read-only voxel world access.
//!
//! This crate provides the types shared across the *voxpath* workspace:
//! block coordinates and boxes, block materials, and the [`VoxelWorld`]
//! trait through which searches look at the world.

pub mod geom;
pub mod voxel;

pub use geom::{BlockPos, Region, RegionIter};
pub use voxel::{Material, VoxelGrid, VoxelWorld, WorldError};
