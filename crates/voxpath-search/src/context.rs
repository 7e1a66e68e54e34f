use std::fmt;

use crate::error::{ConfigError, NodeRole, SearchError};
use crate::settings::SearchSettings;
use crate::traits::Examiner;

type Avoid<'a, N> = Box<dyn Fn(&N) -> bool + 'a>;

/// Everything a single search run needs: the examiner, the endpoints, the
/// movement limits and an optional avoidance predicate.
///
/// A context is validated when it is built, so a search over it never fails
/// for configuration reasons. It borrows the examiner and never mutates it.
pub struct SearchContext<'a, X: Examiner> {
    examiner: &'a X,
    start: X::Node,
    goal: Option<X::Node>,
    settings: SearchSettings,
    avoid: Option<Avoid<'a, X::Node>>,
}

impl<'a, X: Examiner> SearchContext<'a, X> {
    /// Build a point-to-point context.
    ///
    /// Fails if the examiner rejects either endpoint, or if `max_range` is 0
    /// while `goal` differs from `start`.
    pub fn new(
        examiner: &'a X,
        start: X::Node,
        goal: X::Node,
        settings: SearchSettings,
    ) -> Result<Self, SearchError<X::Error>> {
        if settings.max_range == 0 && start != goal {
            return Err(ConfigError::ZeroRange.into());
        }
        if !examiner
            .is_valid_start(&start)
            .map_err(SearchError::Examiner)?
        {
            return Err(SearchError::invalid_node(NodeRole::Start, &start));
        }
        if !examiner.is_valid_goal(&goal).map_err(SearchError::Examiner)? {
            return Err(SearchError::invalid_node(NodeRole::Goal, &goal));
        }
        Ok(Self {
            examiner,
            start,
            goal: Some(goal),
            settings,
            avoid: None,
        })
    }

    /// Build a goal-less context for flood searches.
    ///
    /// Only the start is checked. A `max_range` of 0 is accepted and floods
    /// nothing but the start itself.
    pub fn flood(
        examiner: &'a X,
        start: X::Node,
        settings: SearchSettings,
    ) -> Result<Self, SearchError<X::Error>> {
        if !examiner
            .is_valid_start(&start)
            .map_err(SearchError::Examiner)?
        {
            return Err(SearchError::invalid_node(NodeRole::Start, &start));
        }
        Ok(Self {
            examiner,
            start,
            goal: None,
            settings,
            avoid: None,
        })
    }

    /// Forbid stepping onto any node for which `avoid` returns `true`. The
    /// start node is never tested.
    #[must_use]
    pub fn avoiding(mut self, avoid: impl Fn(&X::Node) -> bool + 'a) -> Self {
        self.avoid = Some(Box::new(avoid));
        self
    }

    #[inline]
    pub fn examiner(&self) -> &'a X {
        self.examiner
    }

    #[inline]
    pub fn start(&self) -> &X::Node {
        &self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<&X::Node> {
        self.goal.as_ref()
    }

    #[inline]
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Whether the avoidance predicate forbids `node`.
    #[inline]
    pub fn avoids(&self, node: &X::Node) -> bool {
        self.avoid.as_ref().is_some_and(|f| f(node))
    }
}

impl<X: Examiner> fmt::Debug for SearchContext<'_, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchContext")
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("settings", &self.settings)
            .field("avoid", &self.avoid.is_some())
            .finish_non_exhaustive()
    }
}
