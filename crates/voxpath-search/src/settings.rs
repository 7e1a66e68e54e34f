use crate::traits::Cost;

/// Movement limits applied to every edge a weighted search considers.
///
/// All bounds are unsigned, so a negative limit cannot be expressed. With the
/// `serde` feature the settings can be read from any serde format; missing
/// fields take their [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchSettings {
    /// Maximum cumulative cost from the start.
    pub max_range: Cost,
    /// Maximum descent of a single step.
    pub max_drop: u32,
    /// Maximum ascent of a single step.
    pub max_climb: u32,
    /// Maximum number of node expansions before the search gives up and
    /// reports an unresolved outcome. `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_range: 64,
            max_drop: 3,
            max_climb: 1,
            max_expansions: None,
        }
    }
}

impl SearchSettings {
    /// Settings with no movement limits at all.
    pub const UNBOUNDED: Self = Self {
        max_range: Cost::MAX,
        max_drop: u32::MAX,
        max_climb: u32::MAX,
        max_expansions: None,
    };

    /// Replace the range limit.
    #[must_use]
    pub fn with_max_range(mut self, max_range: Cost) -> Self {
        self.max_range = max_range;
        self
    }

    /// Replace the per-step descent limit.
    #[must_use]
    pub fn with_max_drop(mut self, max_drop: u32) -> Self {
        self.max_drop = max_drop;
        self
    }

    /// Replace the per-step ascent limit.
    #[must_use]
    pub fn with_max_climb(mut self, max_climb: u32) -> Self {
        self.max_climb = max_climb;
        self
    }

    /// Bound the number of expansions.
    #[must_use]
    pub fn with_max_expansions(mut self, budget: usize) -> Self {
        self.max_expansions = Some(budget);
        self
    }

    /// Whether a step with vertical change `delta` (positive = up) is within
    /// the drop and climb limits.
    #[inline]
    pub fn allows_step(&self, delta: i32) -> bool {
        if delta >= 0 {
            delta.unsigned_abs() <= self.max_climb
        } else {
            delta.unsigned_abs() <= self.max_drop
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let s: SearchSettings = serde_json::from_str(r#"{"max_range": 12}"#).unwrap();
        assert_eq!(s.max_range, 12);
        assert_eq!(s.max_drop, SearchSettings::default().max_drop);
        assert_eq!(s.max_expansions, None);
    }

    #[test]
    fn settings_round_trip() {
        let s = SearchSettings::default().with_max_expansions(7);
        let json = serde_json::to_string(&s).unwrap();
        let back: SearchSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
