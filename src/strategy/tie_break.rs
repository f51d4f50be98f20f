//! Tie-break combinators.
//!
//! Each combinator wraps another matcher, keeps its match decision and
//! replaces only the score:
//!
//! | Combinator              | Score               |
//! |-------------------------|---------------------|
//! | `PreferFirstRegistered` | `-order`            |
//! | `PreferLastRegistered`  | `+order`            |
//! | `PreferShortestPattern` | `-len(pattern)`     |
//! | `PreferLongestPattern`  | `+len(pattern)`     |

use crate::strategy::{length_score, order_score, MatchError, Matcher, Score};

/// Earliest registration wins ties.
#[derive(Debug, Clone, Default)]
pub struct PreferFirstRegistered<M> {
    inner: M,
}

impl<M: Matcher> PreferFirstRegistered<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: Matcher> Matcher for PreferFirstRegistered<M> {
    fn matches(&self, pattern: &str, query: &str, order: u64) -> Result<Option<Score>, MatchError> {
        Ok(self.inner.matches(pattern, query, order)?.map(|_| -order_score(order)))
    }
}

/// Most recent registration wins ties.
#[derive(Debug, Clone, Default)]
pub struct PreferLastRegistered<M> {
    inner: M,
}

impl<M: Matcher> PreferLastRegistered<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: Matcher> Matcher for PreferLastRegistered<M> {
    fn matches(&self, pattern: &str, query: &str, order: u64) -> Result<Option<Score>, MatchError> {
        Ok(self.inner.matches(pattern, query, order)?.map(|_| order_score(order)))
    }
}

/// Shortest pattern wins ties.
#[derive(Debug, Clone, Default)]
pub struct PreferShortestPattern<M> {
    inner: M,
}

impl<M: Matcher> PreferShortestPattern<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: Matcher> Matcher for PreferShortestPattern<M> {
    fn matches(&self, pattern: &str, query: &str, order: u64) -> Result<Option<Score>, MatchError> {
        Ok(self.inner.matches(pattern, query, order)?.map(|_| -length_score(pattern)))
    }
}

/// Longest pattern wins ties.
#[derive(Debug, Clone, Default)]
pub struct PreferLongestPattern<M> {
    inner: M,
}

impl<M: Matcher> PreferLongestPattern<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: Matcher> Matcher for PreferLongestPattern<M> {
    fn matches(&self, pattern: &str, query: &str, order: u64) -> Result<Option<Score>, MatchError> {
        Ok(self.inner.matches(pattern, query, order)?.map(|_| length_score(pattern)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{HierarchicalPath, Prefix, Strict};

    #[test]
    fn test_order_scores() {
        let first = PreferFirstRegistered::new(Strict);
        assert_eq!(first.matches("a", "a", 4).unwrap(), Some(-4));
        assert_eq!(first.matches("a", "b", 4).unwrap(), None);

        let last = PreferLastRegistered::new(Strict);
        assert_eq!(last.matches("a", "a", 4).unwrap(), Some(4));
    }

    #[test]
    fn test_length_scores() {
        let shortest = PreferShortestPattern::new(Prefix);
        assert_eq!(shortest.matches("/ab", "/abc", 0).unwrap(), Some(-3));

        let longest = PreferLongestPattern::new(Prefix);
        assert_eq!(longest.matches("/ab", "/abc", 0).unwrap(), Some(3));
        assert_eq!(longest.matches("/x", "/abc", 0).unwrap(), None);
    }

    #[test]
    fn test_decision_is_preserved() {
        let cases = [("/api/", "/api/v1"), ("/api", "/api/v1"), ("/", "/"), ("", "/x")];
        for (pattern, query) in cases {
            let base = HierarchicalPath.matches(pattern, query, 2).unwrap().is_some();
            let wrapped = PreferShortestPattern::new(PreferFirstRegistered::new(HierarchicalPath));
            assert_eq!(wrapped.matches(pattern, query, 2).unwrap().is_some(), base);
        }
    }

    #[test]
    fn test_errors_pass_through() {
        let m = PreferLastRegistered::new(crate::strategy::RegexMatch);
        assert!(m.matches("(", "x", 0).is_err());
    }
}
