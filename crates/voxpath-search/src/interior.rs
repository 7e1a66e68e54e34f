//! Enclosed-interior flood fill.

use std::collections::{HashSet, VecDeque};

use voxpath_core::{BlockPos, Region};

use crate::error::{ConfigError, NodeRole, SearchError};
use crate::traits::Examiner;

/// The open cells of a sealed cavity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interior {
    cells: Vec<BlockPos>,
    index: HashSet<BlockPos>,
}

impl Interior {
    fn from_cells(cells: Vec<BlockPos>) -> Self {
        let index = cells.iter().copied().collect();
        Self { cells, index }
    }

    /// Whether `p` belongs to the cavity.
    #[inline]
    pub fn contains(&self, p: BlockPos) -> bool {
        self.index.contains(&p)
    }

    /// Cells in breadth-first discovery order from the seed.
    #[inline]
    pub fn cells(&self) -> &[BlockPos] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Interior {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.cells, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interior {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells: Vec<BlockPos> = serde::Deserialize::deserialize(deserializer)?;
        Ok(Interior::from_cells(cells))
    }
}

/// Connectivity flood bounded by a region.
///
/// Starting at a seed, the flood follows the examiner's adjacency (every
/// step counts as 1, nothing is scored). If it ever reaches the outermost
/// layer of the region, the structure is open to the outside and the search
/// stops with [`SearchError::BoundaryLeak`] naming the first such cell.
/// Otherwise the result holds every cell of the cavity.
///
/// Use it with [`OpenSpaceExaminer`](crate::OpenSpaceExaminer) to find the
/// air inside a building; the region should enclose the building's walls.
#[derive(Debug, Clone, Copy)]
pub struct InteriorFinder {
    region: Region,
}

impl InteriorFinder {
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Flood from `seed`.
    pub fn run<X>(&self, examiner: &X, seed: BlockPos) -> Result<Interior, SearchError<X::Error>>
    where
        X: Examiner<Node = BlockPos>,
    {
        let region = self.region;
        if region.is_empty() {
            return Err(ConfigError::EmptyRegion.into());
        }
        if !region.contains(seed) {
            return Err(ConfigError::SeedOutsideRegion { seed, region }.into());
        }
        if !examiner
            .is_valid_start(&seed)
            .map_err(SearchError::Examiner)?
        {
            return Err(SearchError::invalid_node(NodeRole::Start, &seed));
        }
        if region.on_boundary(seed) {
            return Err(SearchError::BoundaryLeak { at: seed });
        }

        log::debug!("interior: flooding from {seed} within {region}");
        // Scratch grows with the cavity, never with the region.
        let mut seen = HashSet::new();
        let mut cells = Vec::new();
        let mut queue = VecDeque::new();
        let mut nbuf = Vec::with_capacity(6);

        seen.insert(seed);
        cells.push(seed);
        queue.push_back(seed);

        while let Some(cur) = queue.pop_front() {
            nbuf.clear();
            examiner
                .adjacent(&cur, &mut nbuf)
                .map_err(SearchError::Examiner)?;
            for &next in &nbuf {
                if !region.contains(next) || region.on_boundary(next) {
                    log::debug!(
                        "interior: leak at {next} after {} cells",
                        cells.len()
                    );
                    return Err(SearchError::BoundaryLeak { at: next });
                }
                if seen.insert(next) {
                    cells.push(next);
                    queue.push_back(next);
                }
            }
        }

        log::debug!("interior: sealed, {} cells", cells.len());
        Ok(Interior::from_cells(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::OpenSpaceExaminer;
    use voxpath_core::{Material, VoxelGrid, WorldError};

    /// A 3x3x1 room: walls, floor and ceiling around the cells
    /// x, z in 1..=3 at y = 1. The grid is larger so that the room floats
    /// in open air.
    fn room() -> VoxelGrid {
        let mut g = VoxelGrid::new(Region::spanning(
            BlockPos::new(-3, -3, -3),
            BlockPos::new(7, 5, 7),
        ));
        g.hollow_box(
            Region::spanning(BlockPos::new(0, 0, 0), BlockPos::new(4, 2, 4)),
            Material::Solid,
        );
        g
    }

    fn finder() -> InteriorFinder {
        InteriorFinder::new(Region::spanning(
            BlockPos::new(-2, -2, -2),
            BlockPos::new(6, 4, 6),
        ))
    }

    const SEED: BlockPos = BlockPos::new(2, 1, 2);

    #[test]
    fn sealed_room_yields_all_cells() {
        let g = room();
        let interior = finder().run(&OpenSpaceExaminer::new(&g), SEED).unwrap();
        assert_eq!(interior.len(), 9);
        for x in 1..=3 {
            for z in 1..=3 {
                assert!(interior.contains(BlockPos::new(x, 1, z)));
            }
        }
        assert!(!interior.contains(BlockPos::new(0, 1, 2)));
        assert_eq!(interior.cells()[0], SEED);
    }

    #[test]
    fn single_gap_leaks() {
        let mut g = room();
        g.set(BlockPos::new(0, 1, 2), Material::Air);
        let err = finder().run(&OpenSpaceExaminer::new(&g), SEED).unwrap_err();
        match err {
            SearchError::BoundaryLeak { at } => assert!(finder().region().on_boundary(at)),
            other => panic!("expected a boundary leak, got {other:?}"),
        }
    }

    #[test]
    fn small_room_in_world_sized_bounds() {
        let g = room();
        let world = InteriorFinder::new(Region::spanning(
            BlockPos::new(-30_000_000, -64, -30_000_000),
            BlockPos::new(30_000_000, 320, 30_000_000),
        ));
        let interior = world.run(&OpenSpaceExaminer::new(&g), SEED).unwrap();
        assert_eq!(interior.len(), 9);

        let everything = InteriorFinder::new(Region::new(
            BlockPos::new(i32::MIN, i32::MIN, i32::MIN),
            BlockPos::new(i32::MAX, i32::MAX, i32::MAX),
        ));
        let interior = everything.run(&OpenSpaceExaminer::new(&g), SEED).unwrap();
        assert_eq!(interior.len(), 9);
    }

    /// An L-shaped cavity over two levels: three cells along x at y = 1,
    /// then a shaft up through (3, 2, 1) into two cells along z at y = 3.
    fn stepped_cavity() -> (VoxelGrid, HashSet<BlockPos>) {
        let mut g = VoxelGrid::new(Region::spanning(
            BlockPos::new(-1, -1, -1),
            BlockPos::new(6, 6, 5),
        ));
        g.fill(
            Region::spanning(BlockPos::new(0, 0, 0), BlockPos::new(5, 5, 4)),
            Material::Solid,
        );
        let open: HashSet<BlockPos> = [
            BlockPos::new(1, 1, 1),
            BlockPos::new(2, 1, 1),
            BlockPos::new(3, 1, 1),
            BlockPos::new(3, 2, 1),
            BlockPos::new(3, 3, 1),
            BlockPos::new(3, 3, 2),
            BlockPos::new(3, 3, 3),
        ]
        .into_iter()
        .collect();
        for &p in &open {
            g.set(p, Material::Air);
        }
        (g, open)
    }

    #[test]
    fn irregular_cavity_across_levels() {
        let (g, open) = stepped_cavity();
        let finder = InteriorFinder::new(Region::spanning(
            BlockPos::new(-1, -1, -1),
            BlockPos::new(6, 6, 5),
        ));
        let interior = finder
            .run(&OpenSpaceExaminer::new(&g), BlockPos::new(1, 1, 1))
            .unwrap();
        assert_eq!(interior.len(), 7);
        let found: HashSet<BlockPos> = interior.cells().iter().copied().collect();
        assert_eq!(found, open);

        // Seeding from the other end floods the same cells.
        let other = finder
            .run(&OpenSpaceExaminer::new(&g), BlockPos::new(3, 3, 3))
            .unwrap();
        assert_eq!(other.len(), 7);
        assert!(open.iter().all(|&p| other.contains(p)));
    }

    #[test]
    fn sealed_result_is_deterministic() {
        let (g, _) = stepped_cavity();
        let finder = InteriorFinder::new(Region::spanning(
            BlockPos::new(-1, -1, -1),
            BlockPos::new(6, 6, 5),
        ));
        let ex = OpenSpaceExaminer::new(&g);
        let first = finder.run(&ex, BlockPos::new(1, 1, 1)).unwrap();
        for _ in 0..5 {
            let again = finder.run(&ex, BlockPos::new(1, 1, 1)).unwrap();
            assert_eq!(again.cells(), first.cells());
        }
    }

    #[test]
    fn leak_is_deterministic() {
        let mut g = room();
        g.set(BlockPos::new(2, 2, 4), Material::Air);
        g.set(BlockPos::new(4, 1, 1), Material::Air);
        let ex = OpenSpaceExaminer::new(&g);
        let first = format!("{:?}", finder().run(&ex, SEED).unwrap_err());
        for _ in 0..5 {
            assert_eq!(format!("{:?}", finder().run(&ex, SEED).unwrap_err()), first);
        }
    }

    #[test]
    fn doors_count_as_closed() {
        let mut g = room();
        g.set(BlockPos::new(0, 1, 2), Material::Door { open: true });
        g.set(BlockPos::new(4, 1, 2), Material::Door { open: false });
        let interior = finder().run(&OpenSpaceExaminer::new(&g), SEED).unwrap();
        assert_eq!(interior.len(), 9);
    }

    #[test]
    fn walls_may_form_the_boundary_layer() {
        let g = room();
        let tight = InteriorFinder::new(Region::spanning(
            BlockPos::new(0, 0, 0),
            BlockPos::new(4, 2, 4),
        ));
        let interior = tight.run(&OpenSpaceExaminer::new(&g), SEED).unwrap();
        assert_eq!(interior.len(), 9);
    }

    #[test]
    fn seed_on_boundary_is_a_leak() {
        let g = room();
        let finder = InteriorFinder::new(Region::spanning(
            BlockPos::new(1, 1, 1),
            BlockPos::new(3, 1, 3),
        ));
        let err = finder.run(&OpenSpaceExaminer::new(&g), SEED).unwrap_err();
        assert!(matches!(err, SearchError::BoundaryLeak { at } if at == SEED));
    }

    #[test]
    fn bad_requests_fail_before_flooding() {
        let g = room();
        let ex = OpenSpaceExaminer::new(&g);
        let empty = InteriorFinder::new(Region::default());
        assert!(matches!(
            empty.run(&ex, SEED),
            Err(SearchError::Config(ConfigError::EmptyRegion))
        ));
        assert!(matches!(
            finder().run(&ex, BlockPos::new(40, 0, 0)),
            Err(SearchError::Config(ConfigError::SeedOutsideRegion { .. }))
        ));
        assert!(matches!(
            finder().run(&ex, BlockPos::new(0, 1, 1)),
            Err(SearchError::InvalidNode {
                role: NodeRole::Start,
                ..
            })
        ));
    }

    struct Unloaded;

    impl Examiner for Unloaded {
        type Node = BlockPos;
        type Error = WorldError;

        fn is_valid_start(&self, _node: &BlockPos) -> Result<bool, WorldError> {
            Ok(true)
        }

        fn adjacent(&self, node: &BlockPos, _buf: &mut Vec<BlockPos>) -> Result<(), WorldError> {
            Err(WorldError::Unloaded(*node))
        }
    }

    #[test]
    fn examiner_errors_propagate() {
        let err = finder().run(&Unloaded, SEED).unwrap_err();
        assert!(matches!(err, SearchError::Examiner(WorldError::Unloaded(p)) if p == SEED));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn interior_round_trip() {
        let interior = Interior::from_cells(vec![BlockPos::new(1, 1, 1), BlockPos::new(2, 1, 1)]);
        let json = serde_json::to_string(&interior).unwrap();
        let back: Interior = serde_json::from_str(&json).unwrap();
        assert_eq!(back, interior);
        assert!(back.contains(BlockPos::new(2, 1, 1)));
    }
}
