//! Typed search errors.
//!
//! Construction-time defects ([`ConfigError`], invalid endpoints) fail before
//! any search work begins. Running out of candidates is not an error: it is
//! reported through [`SearchStatus::Unresolved`](crate::SearchStatus).
//! Examiner failures pass through untouched.

use std::fmt;

use voxpath_core::{BlockPos, Region};

/// Settings or request parameters that violate an invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `max_range` is 0 but the goal differs from the start.
    #[error("max_range is 0 but the goal differs from the start")]
    ZeroRange,
    /// The enclosing region of an interior search has no volume.
    #[error("enclosing region is empty")]
    EmptyRegion,
    /// The interior seed lies outside the enclosing region.
    #[error("seed {seed} lies outside the enclosing region {region}")]
    SeedOutsideRegion {
        seed: BlockPos,
        region: Region,
    },
}

/// Which end of a search a rejected node was meant to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    Start,
    Goal,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Failure of a search request.
#[derive(Debug, thiserror::Error)]
pub enum SearchError<E> {
    /// The request was malformed.
    #[error("invalid search configuration: {0}")]
    Config(#[from] ConfigError),
    /// The examiner rejected the start or goal node.
    #[error("{role} node {node} rejected by examiner")]
    InvalidNode { role: NodeRole, node: String },
    /// An interior flood reached the edge of its enclosing region: the
    /// structure is not sealed.
    #[error("structure is not enclosed: flood escaped at {at}")]
    BoundaryLeak { at: BlockPos },
    /// The examiner itself failed.
    #[error(transparent)]
    Examiner(E),
}

impl<E> SearchError<E> {
    pub(crate) fn invalid_node(role: NodeRole, node: &impl fmt::Debug) -> Self {
        Self::InvalidNode {
            role,
            node: format!("{node:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn messages() {
        let e: SearchError<Infallible> = ConfigError::ZeroRange.into();
        assert_eq!(
            e.to_string(),
            "invalid search configuration: max_range is 0 but the goal differs from the start"
        );
        let e: SearchError<Infallible> = SearchError::invalid_node(NodeRole::Goal, &3u8);
        assert_eq!(e.to_string(), "goal node 3 rejected by examiner");
        let e: SearchError<Infallible> = SearchError::BoundaryLeak {
            at: BlockPos::new(1, 2, 3),
        };
        assert_eq!(
            e.to_string(),
            "structure is not enclosed: flood escaped at (1, 2, 3)"
        );
    }
}
