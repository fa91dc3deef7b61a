use core::fmt;

/// How a type-based segment picks one member among several candidates.
///
/// Candidates are ordered fields first, then zero-parameter methods; within
/// each group the most derived class comes first and declaration order is
/// kept.
///
/// ```
/// use rp_reflect::access::ResolutionStrategy;
///
/// let candidates = ["first", "middle", "last"];
/// assert_eq!(ResolutionStrategy::FirstMatch.select(&candidates), Some(&"first"));
/// assert_eq!(ResolutionStrategy::LastMatch.select(&candidates), Some(&"last"));
/// assert_eq!(ResolutionStrategy::ExactMatch.select(&candidates), None);
/// assert_eq!(ResolutionStrategy::ExactMatch.select(&candidates[..1]), Some(&"first"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ResolutionStrategy {
    /// The first candidate.
    #[default]
    FirstMatch,
    /// The last candidate.
    LastMatch,
    /// The only candidate; more than one is an error.
    ExactMatch,
}

impl ResolutionStrategy {
    /// Picks a candidate, or `None` if the list is empty or, for
    /// [`ExactMatch`](Self::ExactMatch), has more than one entry.
    pub fn select<T>(self, candidates: &[T]) -> Option<&T> {
        match self {
            Self::FirstMatch => candidates.first(),
            Self::LastMatch => candidates.last(),
            Self::ExactMatch => match candidates {
                [only] => Some(only),
                _ => None,
            },
        }
    }
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstMatch => f.pad("FIRST_MATCH"),
            Self::LastMatch => f.pad("LAST_MATCH"),
            Self::ExactMatch => f.pad("EXACT_MATCH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResolutionStrategy;

    #[test]
    fn empty_never_selects() {
        let empty: [u8; 0] = [];
        assert_eq!(ResolutionStrategy::FirstMatch.select(&empty), None);
        assert_eq!(ResolutionStrategy::LastMatch.select(&empty), None);
        assert_eq!(ResolutionStrategy::ExactMatch.select(&empty), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_names() {
        let strategy: ResolutionStrategy = serde_json::from_str("\"LAST_MATCH\"").unwrap();
        assert_eq!(strategy, ResolutionStrategy::LastMatch);
        assert_eq!(
            serde_json::to_string(&ResolutionStrategy::ExactMatch).unwrap(),
            "\"EXACT_MATCH\""
        );
    }
}
