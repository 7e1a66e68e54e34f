//! Shortest-path and flood searches over pluggable search spaces.
//!
//! The search space is described by an *examiner*: a strategy answering
//! which nodes are valid endpoints, which nodes are adjacent, what a step
//! costs and how far the goal probably is. Three searches run over it:
//!
//! - **A\*** point-to-point search ([`AStarEngine::run`])
//! - **Reachable area** uniform-cost flood ([`AreaFinder::run`])
//! - **Enclosed interior** bounded flood fill ([`InteriorFinder::run`])
//!
//! Every run is synchronous, allocates its own scratch state and keeps
//! nothing once it returns, so independent searches may run in parallel.
//! None of them is cheap enough for a per-tick loop: compute the result off
//! the hot path and cache it.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Examiner`] | interior flood |
//! | [`WeightedExaminer`] : [`Examiner`] | reachable area |
//! | [`AstarExaminer`] : [`WeightedExaminer`] | A* |
//!
//! Provided examiners: [`GraphExaminer`] over an explicit [`Graph`],
//! [`WalkExaminer`] and [`OpenSpaceExaminer`] over a
//! [`VoxelWorld`](voxpath_core::VoxelWorld).

mod area;
mod astar;
mod context;
mod error;
mod frontier;
mod graph;
mod interior;
mod settings;
mod traits;
mod world;

pub use area::{Area, AreaFinder, PathNode};
pub use astar::{AStarEngine, SearchResult, SearchStatus};
pub use context::SearchContext;
pub use error::{ConfigError, NodeRole, SearchError};
pub use graph::{Graph, GraphExaminer, GraphNode, NodeId};
pub use interior::{Interior, InteriorFinder};
pub use settings::SearchSettings;
pub use traits::{AstarExaminer, Cost, Examiner, WeightedExaminer};
pub use world::{DEFAULT_SCAN_HEIGHT, OpenSpaceExaminer, WalkExaminer};
