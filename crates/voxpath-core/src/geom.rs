//! Geometry primitives: [`BlockPos`] and [`Region`].
//!
//! Coordinates follow the usual voxel convention: `y` is the vertical axis
//! and grows upwards, `x` and `z` span the horizontal plane.

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// BlockPos
// ---------------------------------------------------------------------------

/// An integer voxel coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Unit step up (+y).
    pub const UP: Self = Self { x: 0, y: 1, z: 0 };

    /// Unit step down (-y).
    pub const DOWN: Self = Self { x: 0, y: -1, z: 0 };

    /// The four horizontal unit steps: north (-z), east (+x), south (+z),
    /// west (-x).
    pub const HORIZONTAL: [Self; 4] = [
        Self::new(0, 0, -1),
        Self::new(1, 0, 0),
        Self::new(0, 0, 1),
        Self::new(-1, 0, 0),
    ];

    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Return a position shifted by (dx, dy, dz). Coordinates saturate at
    /// the `i32` limits.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z.saturating_add(dz),
        }
    }

    /// The block directly above.
    #[inline]
    pub const fn up(self) -> Self {
        self.shift(0, 1, 0)
    }

    /// The block directly below.
    #[inline]
    pub const fn down(self) -> Self {
        self.shift(0, -1, 0)
    }

    /// The six face-adjacent neighbours, in a fixed order: the four
    /// horizontal ones first, then up, then down.
    #[inline]
    pub fn neighbors_6(self) -> [BlockPos; 6] {
        [
            self.shift(0, 0, -1),
            self.shift(1, 0, 0),
            self.shift(0, 0, 1),
            self.shift(-1, 0, 0),
            self.shift(0, 1, 0),
            self.shift(0, -1, 0),
        ]
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: BlockPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    /// Chebyshev (L∞) distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: BlockPos) -> u32 {
        self.x
            .abs_diff(other.x)
            .max(self.y.abs_diff(other.y))
            .max(self.z.abs_diff(other.z))
    }
}

// --- trait impls for BlockPos ---

impl PartialOrd for BlockPos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BlockPos {
    /// Layer-major ordering: `y`, then `z`, then `x`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y
            .cmp(&other.y)
            .then(self.z.cmp(&other.z))
            .then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for BlockPos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.shift(rhs.x, rhs.y, rhs.z)
    }
}

impl Sub for BlockPos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x.saturating_sub(rhs.x),
            self.y.saturating_sub(rhs.y),
            self.z.saturating_sub(rhs.z),
        )
    }
}

impl Mul<i32> for BlockPos {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(
            self.x.saturating_mul(rhs),
            self.y.saturating_mul(rhs),
            self.z.saturating_mul(rhs),
        )
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A half-open box \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub min: BlockPos,
    pub max: BlockPos,
}

impl Region {
    /// Create a new region from two corners and canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(a: BlockPos, b: BlockPos) -> Self {
        Self {
            min: BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// The smallest region containing every position in `[a, b]`, both
    /// corners inclusive. A corner at `i32::MAX` cannot be included: the
    /// exclusive bound saturates there.
    #[inline]
    pub fn spanning(a: BlockPos, b: BlockPos) -> Self {
        let r = Self::new(a, b);
        Self {
            min: r.min,
            max: r.max.shift(1, 1, 1),
        }
    }

    /// Extent along each axis as `[x, y, z]`. Zero on every axis for an
    /// empty region.
    #[inline]
    pub fn size(self) -> [u32; 3] {
        if self.is_empty() {
            return [0; 3];
        }
        [
            self.max.x.abs_diff(self.min.x),
            self.max.y.abs_diff(self.min.y),
            self.max.z.abs_diff(self.min.z),
        ]
    }

    /// Total number of blocks in the region, saturating at `usize::MAX`.
    #[inline]
    pub fn len(self) -> usize {
        let [x, y, z] = self.size();
        (x as usize)
            .saturating_mul(y as usize)
            .saturating_mul(z as usize)
    }

    /// Whether the region has zero or negative volume.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y || self.min.z >= self.max.z
    }

    /// Whether `p` is inside the half-open region.
    #[inline]
    pub fn contains(self, p: BlockPos) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }

    /// Whether `p` lies in the outermost layer of the region, i.e. it is
    /// contained and at least one of its coordinates sits on a face.
    #[inline]
    pub fn on_boundary(self, p: BlockPos) -> bool {
        self.contains(p)
            && (p.x == self.min.x
                || p.x == self.max.x - 1
                || p.y == self.min.y
                || p.y == self.max.y - 1
                || p.z == self.min.z
                || p.z == self.max.z - 1)
    }

    /// Grow (or shrink, for negative `n`) the region by `n` on every side.
    ///
    /// Shrinking past zero volume yields the default (empty) region.
    #[inline]
    pub fn inflate(self, n: i32) -> Self {
        let r = Self {
            min: self.min.shift(-n, -n, -n),
            max: self.max.shift(n, n, n),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Intersection of two regions (may be empty).
    #[inline]
    pub fn intersect(self, other: Region) -> Self {
        let r = Self {
            min: BlockPos::new(
                self.min.x.max(other.min.x),
                self.min.y.max(other.min.y),
                self.min.z.max(other.min.z),
            ),
            max: BlockPos::new(
                self.max.x.min(other.max.x),
                self.max.y.min(other.max.y),
                self.max.z.min(other.max.z),
            ),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Flat index of `p` inside the region (x fastest, then z, then y).
    /// Returns `None` if `p` is outside, or if the index does not fit in a
    /// `usize`.
    #[inline]
    pub fn index(self, p: BlockPos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let [sx, _, sz] = self.size();
        let dx = p.x.abs_diff(self.min.x) as usize;
        let dy = p.y.abs_diff(self.min.y) as usize;
        let dz = p.z.abs_diff(self.min.z) as usize;
        dy.checked_mul(sz as usize)?
            .checked_add(dz)?
            .checked_mul(sx as usize)?
            .checked_add(dx)
    }

    /// Iterator over every position in the region, in [`Region::index`]
    /// order.
    #[inline]
    pub fn iter(self) -> RegionIter {
        RegionIter {
            region: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Region {
    type Item = BlockPos;
    type IntoIter = RegionIter;
    #[inline]
    fn into_iter(self) -> RegionIter {
        self.iter()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RegionIter
// ---------------------------------------------------------------------------

/// Iterator over the positions in a [`Region`].
#[derive(Clone, Debug)]
pub struct RegionIter {
    region: Region,
    cur: BlockPos,
}

impl Iterator for RegionIter {
    type Item = BlockPos;

    #[inline]
    fn next(&mut self) -> Option<BlockPos> {
        if self.region.is_empty() || self.cur.y >= self.region.max.y {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.region.max.x {
            self.cur.x = self.region.min.x;
            self.cur.z += 1;
            if self.cur.z >= self.region.max.z {
                self.cur.z = self.region.min.z;
                self.cur.y += 1;
            }
        }
        Some(p)
    }
}
